//! Small numeric helpers

/// Relative tolerance for treating a rank as an integer
pub const INTEGER_TOLERANCE: f64 = 1e-9;

/// Linear interpolation between `a` and `b`
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// `a` and `b` agree to within a relative tolerance
pub fn is_close(a: f64, b: f64) -> bool {
    a == b || (a - b).abs() <= INTEGER_TOLERANCE * a.abs().max(b.abs())
}
