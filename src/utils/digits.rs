use log::trace;

/// Base-10 value of the concatenated digits, e.g. `[3, 3]` is `33.0`.
///
/// Long literals lose precision past 2^53 and reach infinity past the `f64`
/// range; callers decide whether that is acceptable.
pub fn digits_to_number(digits: &[u8]) -> f64 {
    let result = digits
        .iter()
        .fold(0.0, |acc, &d| acc * 10.0 + f64::from(d));
    trace!("Converted digits {:?} to {}", digits, result);
    result
}
