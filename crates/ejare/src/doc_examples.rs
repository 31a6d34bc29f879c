use crate::{CalculationResult, Field, RawInputs, calculate};

/// Build a snapshot from `(wire name, text)` pairs and calculate it.
///
/// Unknown field names are ignored. This helper is intended for
/// documentation examples to avoid repetitive setup.
///
/// # Example
///
/// ```rust
/// # use ejare::doc_examples::calculate_fields;
/// let calc = calculate_fields(&[
///     ("effectiveRate", "۲۰"),
///     ("lastYearRent", "۱٬۰۰۰٬۰۰۰"),
///     ("lastYearMortgage", "10,000,000"),
///     ("nextYearMortgage", "12,000,000"),
///     ("nextYearRent", "1200000"),
/// ])?;
/// assert!((calc.increase_percent().unwrap() - 20.0).abs() < 1e-9);
/// # Ok::<(), ejare::CalcError>(())
/// ```
pub fn calculate_fields(fields: &[(&str, &str)]) -> CalculationResult {
    let raw = fields
        .iter()
        .fold(RawInputs::new(), |raw, (name, value)| match Field::parse(name) {
            Some(field) => raw.with(field, *value),
            None => raw,
        });
    calculate(&raw)
}
