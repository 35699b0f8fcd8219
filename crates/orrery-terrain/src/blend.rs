//! Polynomial smooth minimum / maximum used to join terrain layers without creases.

/// Smooth minimum of `a` and `b` with blend width `k`.
///
/// Within `|a - b| < k` the result bends below both inputs by at most `k / 4`;
/// outside it equals `min(a, b)` exactly. `k == 0` is an ordinary `min`.
#[inline]
pub fn smooth_min(a: f32, b: f32, k: f32) -> f32 {
    if k == 0.0 {
        return a.min(b);
    }
    let h = ((b - a + k) / (2.0 * k)).clamp(0.0, 1.0);
    a * h + b * (1.0 - h) - k * h * (1.0 - h)
}

/// Smooth maximum of `a` and `b` with blend width `k`. `k == 0` is an
/// ordinary `max`.
#[inline]
pub fn smooth_max(a: f32, b: f32, k: f32) -> f32 {
    if k == 0.0 {
        return a.max(b);
    }
    smooth_min(a, b, -k)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-6;

    #[test]
    fn test_far_apart_values_match_hard_min_max() {
        assert_eq!(smooth_min(-5.0, 5.0, 0.5), -5.0);
        assert_eq!(smooth_min(5.0, -5.0, 0.5), -5.0);
        assert_eq!(smooth_max(-5.0, 5.0, 0.5), 5.0);
        assert_eq!(smooth_max(5.0, -5.0, 0.5), 5.0);
    }

    #[test]
    fn test_zero_width_is_hard_min_max() {
        assert_eq!(smooth_min(0.3, 0.2, 0.0), 0.2);
        assert_eq!(smooth_max(0.3, 0.2, 0.0), 0.3);
        assert_eq!(smooth_min(0.25, 0.25, 0.0), 0.25);
    }

    #[test]
    fn test_zero_width_max_picks_larger_either_order() {
        assert_eq!(smooth_max(0.0, 0.7, 0.0), 0.7);
        assert_eq!(smooth_max(0.7, 0.0, 0.0), 0.7);
        assert_eq!(smooth_max(0.0, 0.7, -0.0), 0.7);
        assert_eq!(smooth_min(0.0, 0.7, -0.0), 0.0);
    }

    #[test]
    fn test_zero_width_agrees_with_tiny_width() {
        for (a, b) in [(0.0, 0.7), (-1.2, 0.4), (0.9, -0.3)] {
            assert!((smooth_max(a, b, 0.0) - smooth_max(a, b, 1e-9)).abs() < EPSILON);
            assert!((smooth_min(a, b, 0.0) - smooth_min(a, b, 1e-9)).abs() < EPSILON);
        }
    }

    #[test]
    fn test_equal_inputs_bend_by_quarter_width() {
        let k = 0.8;
        let v = smooth_min(1.0, 1.0, k);
        assert!((v - (1.0 - k / 4.0)).abs() < EPSILON, "got {v}");
        let v = smooth_max(1.0, 1.0, k);
        assert!((v - (1.0 + k / 4.0)).abs() < EPSILON, "got {v}");
    }

    #[test]
    fn test_smooth_min_never_exceeds_hard_min() {
        for i in 0..100 {
            let a = i as f32 * 0.02 - 1.0;
            let b = 0.1;
            let v = smooth_min(a, b, 0.3);
            assert!(v <= a.min(b) + EPSILON, "smooth_min({a}, {b}) = {v}");
        }
    }

    #[test]
    fn test_continuous_across_blend_region() {
        let k = 0.4;
        let step = 1e-3;
        let mut prev = smooth_max(-1.0, 0.0, k);
        for i in 1..2000 {
            let a = -1.0 + i as f32 * step;
            let v = smooth_max(a, 0.0, k);
            assert!((v - prev).abs() < 2.0 * step, "jump at a={a}: {prev} -> {v}");
            prev = v;
        }
    }
}
