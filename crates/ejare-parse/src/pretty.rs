//! Display formatting for amounts and percentages.
//!
//! The engine works on unrounded floats; anything shown to a person goes
//! through here. Amounts are rounded to whole units and grouped by
//! thousands; percentages keep a fixed number of decimals.

use crate::locale::Locale;

/// Round to the nearest whole unit and render with grouping.
///
/// ```
/// use ejare_parse::{Locale, format_amount};
/// assert_eq!(format_amount(1_166_666.67, &Locale::invariant()), "1,166,667");
/// assert_eq!(format_amount(1_166_666.67, &Locale::persian()), "۱٬۱۶۶٬۶۶۷");
/// ```
pub fn format_amount(value: f64, locale: &Locale) -> String {
    if !value.is_finite() {
        return locale.digits.zero().to_string();
    }
    let rounded = value.round();
    let digits = format!("{:.0}", rounded.abs());

    let mut out = String::with_capacity(digits.len() * 3);
    if rounded < 0.0 {
        out.push('-');
    }
    let len = digits.len();
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(locale.group_separator);
        }
        out.push(localize_char(c, locale));
    }
    out
}

/// Fixed-point percentage without grouping or a `%` sign.
pub fn format_percent(value: f64, decimals: usize, locale: &Locale) -> String {
    if !value.is_finite() {
        return locale.digits.zero().to_string();
    }
    let mut text = format!("{value:.decimals$}");
    // "-0.00" is noise.
    if text.starts_with('-') && text[1..].chars().all(|c| c == '0' || c == '.') {
        text.remove(0);
    }
    text.chars().map(|c| localize_char(c, locale)).collect()
}

fn localize_char(c: char, locale: &Locale) -> char {
    match c {
        '0'..='9' => locale.digits.digit(c as u32 - '0' as u32),
        '.' => locale.decimal_separator,
        other => other,
    }
}
