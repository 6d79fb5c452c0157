use crate::error::EvalError;

/// Converts an evaluated index expression to a `usize` array index.
///
/// Fractional values truncate toward zero, matching the original language's
/// `int()`-style index computation; negative or non-finite values are
/// rejected.
///
/// # Errors
/// Returns [`EvalError::InvalidIndex`] for negative or non-finite values.
///
/// # Example
/// ```
/// use bhask::util::num::f64_to_index;
///
/// assert_eq!(f64_to_index(2.0).unwrap(), 2);
/// assert_eq!(f64_to_index(2.9).unwrap(), 2);
/// assert!(f64_to_index(-1.0).is_err());
/// ```
#[allow(clippy::cast_possible_truncation)]
#[allow(clippy::cast_sign_loss)]
pub fn f64_to_index(value: f64) -> Result<usize, EvalError> {
    if !value.is_finite() || value < 0.0 {
        return Err(EvalError::InvalidIndex { value });
    }
    Ok(value.trunc() as usize)
}

/// Formats an evaluation result the way the language prints numbers.
///
/// Integral values render without a decimal point; everything else uses the
/// default `f64` rendering.
///
/// # Example
/// ```
/// use bhask::util::num::format_number;
///
/// assert_eq!(format_number(19.0), "19");
/// assert_eq!(format_number(2.5), "2.5");
/// ```
#[allow(clippy::cast_possible_truncation)]
#[must_use]
pub fn format_number(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        value.to_string()
    }
}
