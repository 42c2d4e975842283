/// Cubic ease-out: f(t) = 1 - (1-t)³
///
/// `t` is clamped to [0, 1].
#[inline]
pub fn ease_out_cubic(t: f64) -> f64 {
    let inv = 1.0 - t.clamp(0.0, 1.0);
    1.0 - inv * inv * inv
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_easing_boundaries() {
        assert_eq!(ease_out_cubic(0.0), 0.0);
        assert_eq!(ease_out_cubic(1.0), 1.0);
        assert_eq!(ease_out_cubic(-3.0), 0.0);
        assert_eq!(ease_out_cubic(2.0), 1.0);
        assert!((ease_out_cubic(0.5) - 0.875).abs() < 1e-12);
    }

    #[test]
    fn test_easing_monotonic() {
        let mut prev = 0.0;
        for i in 0..=100 {
            let t = i as f64 / 100.0;
            let v = ease_out_cubic(t);
            assert!(v >= prev, "not monotonic at t={}", t);
            prev = v;
        }
    }

    #[test]
    fn test_easing_decelerates() {
        let early = ease_out_cubic(0.1) - ease_out_cubic(0.0);
        let late = ease_out_cubic(1.0) - ease_out_cubic(0.9);
        assert!(early > late);
    }
}
