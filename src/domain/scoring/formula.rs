//! The two factor shapes every scorer is built from.

/// `min(cap, value / target * cap)`. Zero for a non-positive target.
pub fn linear(value: f64, target: f64, cap: f64) -> f64 {
    if target <= 0.0 || !value.is_finite() || value <= 0.0 {
        return 0.0;
    }
    (value / target * cap).min(cap)
}

/// `min(cap, log10(value + 1) / log10(reference + 1) * cap)`.
///
/// Grows quickly at first and flattens out, so a single very large value
/// does not saturate the factor on its own.
pub fn logarithmic(value: f64, reference: f64, cap: f64) -> f64 {
    if reference <= 0.0 || !value.is_finite() || value <= 0.0 {
        return 0.0;
    }
    ((value + 1.0).log10() / (reference + 1.0).log10() * cap).min(cap)
}
