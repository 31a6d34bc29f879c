//! Numeral normalization.
//!
//! Field text arrives in whatever script the user's keyboard produced:
//! `"۱٬۲۳۴٫۵"`, `"1,234.5"` and `"1234.5"` must all mean the same number.
//! Normalization never fails. Unparseable text yields `0.0`, and the engine
//! decides whether a zero is acceptable for a given field.

use ejare_common::{Field, NormalizedInputs, RawInputs};

use crate::locale::{
    ARABIC_DECIMAL_SEPARATOR, ARABIC_GROUP_SEPARATOR, DigitScript, LATIN_GROUP_SEPARATOR,
};

/// Rewrite a numeral into plain ASCII float syntax without parsing it.
///
/// Trims, maps every supported digit to ASCII, drops thousands separators
/// and turns the Arabic decimal separator into `.`.
pub fn canonicalize(raw: &str) -> String {
    raw.trim()
        .chars()
        .filter(|c| *c != LATIN_GROUP_SEPARATOR && *c != ARABIC_GROUP_SEPARATOR)
        .map(|c| {
            if c == ARABIC_DECIMAL_SEPARATOR {
                '.'
            } else {
                DigitScript::to_ascii(c)
            }
        })
        .collect()
}

/// Parse a numeral in any supported script. `None` when the canonical
/// form is empty, not a float literal, or not finite.
pub fn parse_numeral(raw: &str) -> Option<f64> {
    let canonical = canonicalize(raw);
    if canonical.is_empty() || !is_float_literal(&canonical) {
        return None;
    }
    canonical.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Parse a numeral, falling back to `0.0`.
pub fn normalize(raw: &str) -> f64 {
    parse_numeral(raw).unwrap_or(0.0)
}

/// Numeric view of a raw snapshot.
///
/// The rate becomes `None` unless `rate / 100` is strictly positive.
pub fn normalize_inputs(raw: &RawInputs) -> NormalizedInputs {
    let rate = normalize(raw.get(Field::EffectiveRate));
    NormalizedInputs {
        previous_rent: normalize(raw.get(Field::LastYearRent)),
        previous_deposit: normalize(raw.get(Field::LastYearMortgage)),
        next_deposit: normalize(raw.get(Field::NextYearMortgage)),
        rate_percent: (rate / 100.0 > 0.0).then_some(rate),
        next_rent: normalize(raw.get(Field::NextYearRent)),
        increase_percent: normalize(raw.get(Field::RentIncreasePercent)),
    }
}

/// `[+-]? digits? ('.' digits?)? ([eE] [+-]? digits)?` with at least one
/// mantissa digit.
///
/// `str::parse::<f64>` would also accept `inf`, `nan` and `infinity`; those
/// are not numerals a user types into an amount field.
fn is_float_literal(s: &str) -> bool {
    let bytes = s.as_bytes();
    let mut i = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        i += 1;
    }

    let int_start = i;
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        i += 1;
    }
    let mut mantissa_digits = i - int_start;

    if i < bytes.len() && bytes[i] == b'.' {
        i += 1;
        let frac_start = i;
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        mantissa_digits += i - frac_start;
    }

    if mantissa_digits == 0 {
        return false;
    }

    if i < bytes.len() && matches!(bytes[i], b'e' | b'E') {
        i += 1;
        if matches!(bytes.get(i), Some(b'+' | b'-')) {
            i += 1;
        }
        let exp_start = i;
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        if i == exp_start {
            return false;
        }
    }

    i == bytes.len()
}
