//! Degree arithmetic on the ecliptic circle.

/// Normalize an angle to [0, 360) degrees: `((x % 360) + 360) % 360`.
pub fn normalize_deg(deg: f64) -> f64 {
    let r = ((deg % 360.0) + 360.0) % 360.0;
    // -1e-18 + 360 rounds to exactly 360.0
    if r >= 360.0 { 0.0 } else { r }
}

/// Forward (counter-clockwise) arc from `a` to `b`, in [0, 360).
pub fn arc_forward(a: f64, b: f64) -> f64 {
    normalize_deg(b - a)
}

/// Shorter arc between two longitudes, in [0, 180].
pub fn angular_separation(a: f64, b: f64) -> f64 {
    let sep = (a - b).abs() % 360.0;
    if sep > 180.0 { 360.0 - sep } else { sep }
}
