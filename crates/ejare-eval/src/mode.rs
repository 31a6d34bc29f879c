use ejare_common::{CalculationMode, Field, RawInputs};

/// Pick the calculation direction from field presence alone.
///
/// Only the raw text matters: `"0"` is present, `""` is not, and the parsed
/// values are never consulted.
pub fn detect_mode(raw: &RawInputs) -> CalculationMode {
    match (
        raw.is_present(Field::NextYearRent),
        raw.is_present(Field::RentIncreasePercent),
    ) {
        (true, true) => CalculationMode::Ambiguous,
        (false, false) => CalculationMode::Incomplete,
        (true, false) => CalculationMode::ByNextRent,
        (false, true) => CalculationMode::ByIncreasePercent,
    }
}
