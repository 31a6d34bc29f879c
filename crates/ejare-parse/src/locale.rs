//! Digit scripts and separator conventions.
//!
//! Parsing is deliberately script-agnostic: [`Locale::parse_number`] accepts
//! every supported script and separator regardless of which locale it is
//! called on. The locale only matters when rendering.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// ASCII comma.
pub const LATIN_GROUP_SEPARATOR: char = ',';
/// ARABIC THOUSANDS SEPARATOR (U+066C).
pub const ARABIC_GROUP_SEPARATOR: char = '\u{066C}';
/// ARABIC DECIMAL SEPARATOR (U+066B).
pub const ARABIC_DECIMAL_SEPARATOR: char = '\u{066B}';

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum DigitScript {
    #[default]
    Latin,
    /// Extended Arabic-Indic digits, U+06F0..=U+06F9 (`۰`..`۹`).
    Persian,
    /// Arabic-Indic digits, U+0660..=U+0669 (`٠`..`٩`).
    ArabicIndic,
}

impl DigitScript {
    pub const fn zero(self) -> char {
        match self {
            Self::Latin => '0',
            Self::Persian => '\u{06F0}',
            Self::ArabicIndic => '\u{0660}',
        }
    }

    /// Render a single decimal digit (0..=9) in this script.
    pub fn digit(self, d: u32) -> char {
        debug_assert!(d < 10);
        char::from_u32(self.zero() as u32 + d).unwrap_or('0')
    }

    /// Classify a character as a digit of some supported script.
    pub fn classify(c: char) -> Option<(DigitScript, u32)> {
        match c {
            '0'..='9' => Some((Self::Latin, c as u32 - '0' as u32)),
            '\u{06F0}'..='\u{06F9}' => Some((Self::Persian, c as u32 - 0x06F0)),
            '\u{0660}'..='\u{0669}' => Some((Self::ArabicIndic, c as u32 - 0x0660)),
            _ => None,
        }
    }

    /// Map any supported digit to its ASCII counterpart; other chars pass through.
    pub fn to_ascii(c: char) -> char {
        match Self::classify(c) {
            Some((_, d)) => Self::Latin.digit(d),
            None => c,
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "latin" | "ascii" | "en" => Some(Self::Latin),
            "persian" | "farsi" | "fa" => Some(Self::Persian),
            "arabic" | "arabic-indic" | "ar" => Some(Self::ArabicIndic),
            _ => None,
        }
    }
}

/// Rendering conventions plus the shared parsing entry point.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Locale {
    pub digits: DigitScript,
    pub group_separator: char,
    pub decimal_separator: char,
}

impl Default for Locale {
    fn default() -> Self {
        Self::invariant()
    }
}

impl Locale {
    /// ASCII digits, `,` grouping, `.` decimals.
    pub const fn invariant() -> Self {
        Locale {
            digits: DigitScript::Latin,
            group_separator: LATIN_GROUP_SEPARATOR,
            decimal_separator: '.',
        }
    }

    /// Persian digits with Arabic separators, as `fa-IR` renders them.
    pub const fn persian() -> Self {
        Locale {
            digits: DigitScript::Persian,
            group_separator: ARABIC_GROUP_SEPARATOR,
            decimal_separator: ARABIC_DECIMAL_SEPARATOR,
        }
    }

    pub const fn for_script(digits: DigitScript) -> Self {
        match digits {
            DigitScript::Latin => Self::invariant(),
            DigitScript::Persian | DigitScript::ArabicIndic => Locale {
                digits,
                group_separator: ARABIC_GROUP_SEPARATOR,
                decimal_separator: ARABIC_DECIMAL_SEPARATOR,
            },
        }
    }

    /// Parse a numeral written in any supported script.
    pub fn parse_number(&self, s: &str) -> Option<f64> {
        crate::numeral::parse_numeral(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_all_scripts() {
        assert_eq!(DigitScript::classify('7'), Some((DigitScript::Latin, 7)));
        assert_eq!(DigitScript::classify('۷'), Some((DigitScript::Persian, 7)));
        assert_eq!(DigitScript::classify('٧'), Some((DigitScript::ArabicIndic, 7)));
        assert_eq!(DigitScript::classify('x'), None);
    }

    #[test]
    fn digit_table_is_one_to_one() {
        for d in 0..10 {
            let persian = DigitScript::Persian.digit(d);
            assert_eq!(DigitScript::to_ascii(persian), DigitScript::Latin.digit(d));
        }
        assert_eq!(DigitScript::Persian.digit(0), '۰');
        assert_eq!(DigitScript::Persian.digit(9), '۹');
    }

    #[test]
    fn persian_locale_parses_ascii_too() {
        assert_eq!(Locale::persian().parse_number("12.5"), Some(12.5));
        assert_eq!(Locale::invariant().parse_number("۱۲٫۵"), Some(12.5));
    }

    #[test]
    fn script_names() {
        assert_eq!(DigitScript::parse("Persian"), Some(DigitScript::Persian));
        assert_eq!(DigitScript::parse("latin"), Some(DigitScript::Latin));
        assert_eq!(DigitScript::parse("klingon"), None);
    }
}
