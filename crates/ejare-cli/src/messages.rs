//! User-facing wording, in Persian and English.

use ejare_common::{CalcError, CalcErrorKind};
use ejare_parse::{Locale, format_amount};
use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Fa,
    En,
}

impl Language {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fa" | "persian" | "farsi" => Some(Self::Fa),
            "en" | "english" => Some(Self::En),
            _ => None,
        }
    }

    pub fn default_currency(&self) -> &'static str {
        match self {
            Self::Fa => "تومان",
            Self::En => "Toman",
        }
    }
}

/// Labels for the success report.
pub struct Labels {
    pub previous_total: &'static str,
    pub next_total: &'static str,
    pub increase_percent: &'static str,
    pub required_rent: &'static str,
}

pub fn labels(lang: Language) -> Labels {
    match lang {
        Language::Fa => Labels {
            previous_total: "اجاره کل سال گذشته (شامل معادل رهن)",
            next_total: "اجاره کل سال آینده (شامل معادل رهن)",
            increase_percent: "درصد افزایش اجاره کل",
            required_rent: "اجاره سال آینده مورد نیاز",
        },
        Language::En => Labels {
            previous_total: "Previous total rent (incl. deposit equivalent)",
            next_total: "Next total rent (incl. deposit equivalent)",
            increase_percent: "Total rent increase",
            required_rent: "Required next rent",
        },
    }
}

/// Explain a failure in a way the user can act on.
///
/// `NegativeRequiredRent` states the shortfall and the deposit increase,
/// and names the two usual causes.
pub fn error_message(err: &CalcError, lang: Language, locale: &Locale, currency: &str) -> String {
    match (err.kind, lang) {
        (CalcErrorKind::InvalidBaseInputs, Language::Fa) => {
            "لطفاً نرخ مؤثر سالانه را به‌صورت عددی بزرگ‌تر از صفر وارد کنید.".to_string()
        }
        (CalcErrorKind::InvalidBaseInputs, Language::En) => {
            "Please enter the effective annual rate as a number greater than zero.".to_string()
        }
        (CalcErrorKind::AmbiguousMode, Language::Fa) => {
            "لطفاً **فقط** یکی از فیلدهای «اجاره سال آینده» یا «افزایش اجاره» را وارد کنید."
                .to_string()
        }
        (CalcErrorKind::AmbiguousMode, Language::En) => {
            "Please fill in **only one** of \"next year rent\" or \"rent increase percent\"."
                .to_string()
        }
        (CalcErrorKind::IncompleteMode, Language::Fa) => {
            "لطفاً یکی از فیلدهای «اجاره سال آینده» یا «افزایش اجاره» را وارد کنید.".to_string()
        }
        (CalcErrorKind::IncompleteMode, Language::En) => {
            "Please fill in either \"next year rent\" or \"rent increase percent\".".to_string()
        }
        (CalcErrorKind::ZeroBaseRent, Language::Fa) => {
            "خطا: اجاره کل سال گذشته نمی‌تواند صفر باشد.".to_string()
        }
        (CalcErrorKind::ZeroBaseRent, Language::En) => {
            "Error: last year's total rent cannot be zero.".to_string()
        }
        (CalcErrorKind::Overflow, Language::Fa) => {
            "خطا: مبالغ واردشده بیش از حد بزرگ‌اند و قابل محاسبه نیستند.".to_string()
        }
        (CalcErrorKind::Overflow, Language::En) => {
            "Error: the amounts entered are too large to calculate with.".to_string()
        }
        (CalcErrorKind::NegativeRequiredRent, lang) => {
            let required = format_amount(err.required_rent().unwrap_or(0.0), locale);
            let delta = format_amount(err.deposit_delta().unwrap_or(0.0), locale);
            match lang {
                Language::Fa => format!(
                    "خطا در محاسبه: اجاره سال آینده منفی می‌شود ({required} {currency}). \
                     افزایش رهن ({delta} {currency}) احتمالاً بیش از حد زیاد است \
                     یا درصد افزایش اجاره کمتر از حد لازم است."
                ),
                Language::En => format!(
                    "Calculation error: next year's rent would be negative ({required} {currency}). \
                     The deposit increase ({delta} {currency}) is probably too large, \
                     or the target increase percent is too low."
                ),
            }
        }
    }
}
