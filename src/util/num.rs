/// Largest integer value exactly representable as an `f64` (`2^53 - 1`).
pub const MAX_SAFE_U64_INT: u64 = 9_007_199_254_740_991;

/// Safely converts an `f64` to `u64` if the value is finite, non-negative,
/// exactly representable and not fractional.
///
/// ## Errors
/// Returns `Err(error)` for non-finite, negative, out-of-range, or fractional
/// values.
///
/// ## Example
/// ```
/// use april::util::num::f64_to_u64_checked;
///
/// assert_eq!(f64_to_u64_checked(7.0, ()), Ok(7));
/// assert_eq!(f64_to_u64_checked(0.0, ()), Ok(0));
///
/// assert!(f64_to_u64_checked(-5.0, ()).is_err());
/// assert!(f64_to_u64_checked(1.5, ()).is_err());
/// assert!(f64_to_u64_checked(f64::INFINITY, ()).is_err());
/// assert!(f64_to_u64_checked(f64::NAN, ()).is_err());
/// ```
#[allow(clippy::cast_possible_truncation)]
#[allow(clippy::cast_precision_loss)]
#[allow(clippy::cast_sign_loss)]
pub fn f64_to_u64_checked<E>(value: f64, error: E) -> Result<u64, E> {
    if !is_whole(value) || value < 0.0 || value > MAX_SAFE_U64_INT as f64 {
        return Err(error);
    }
    Ok(value as u64)
}

/// Returns `true` if `value` has no fractional part.
///
/// ```
/// use april::util::num::is_whole;
///
/// assert!(is_whole(3.0));
/// assert!(!is_whole(3.5));
/// assert!(!is_whole(f64::NAN));
/// ```
#[must_use]
pub fn is_whole(value: f64) -> bool {
    value.is_finite() && value.fract() == 0.0
}
