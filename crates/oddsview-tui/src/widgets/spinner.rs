//! Braille spinner for the loading indicator

pub const SPINNER_FRAMES: [char; 10] = ['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];

/// Get spinner character for the given frame
pub fn spinner_char(frame: usize) -> char {
    SPINNER_FRAMES[frame % SPINNER_FRAMES.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spinner_wraps() {
        assert_eq!(spinner_char(0), '⠋');
        assert_eq!(spinner_char(SPINNER_FRAMES.len()), '⠋');
        assert_eq!(spinner_char(3), '⠸');
    }
}
