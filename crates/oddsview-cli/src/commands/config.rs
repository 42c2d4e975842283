use std::path::Path;

use anyhow::Result;

use oddsview_core::AppConfig;

pub fn run(config: &AppConfig, path: Option<&Path>) -> Result<()> {
    let path = path
        .map(Path::to_path_buf)
        .unwrap_or_else(AppConfig::config_path);
    let source = if path.exists() { "" } else { " (not found, defaults)" };

    println!("# {}{}", path.display(), source);
    print!("{}", config.to_toml()?);

    Ok(())
}
