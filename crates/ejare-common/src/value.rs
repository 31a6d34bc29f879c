use std::fmt::{self, Display};

use crate::{CalcError, Field};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A fresh snapshot of the raw field text, exactly as typed.
///
/// Absent fields are empty strings. Nothing is parsed here; presence is a
/// property of the raw text alone.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct RawInputs {
    pub last_year_rent: String,
    pub last_year_mortgage: String,
    pub next_year_mortgage: String,
    pub effective_rate: String,
    pub next_year_rent: String,
    pub rent_increase_percent: String,
}

impl RawInputs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style setter.
    pub fn with(mut self, field: Field, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        *self.slot_mut(field) = value.into();
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::LastYearRent => &self.last_year_rent,
            Field::LastYearMortgage => &self.last_year_mortgage,
            Field::NextYearMortgage => &self.next_year_mortgage,
            Field::EffectiveRate => &self.effective_rate,
            Field::NextYearRent => &self.next_year_rent,
            Field::RentIncreasePercent => &self.rent_increase_percent,
        }
    }

    /// A field is present when its raw text is non-empty. `"0"` counts.
    pub fn is_present(&self, field: Field) -> bool {
        !self.get(field).is_empty()
    }

    fn slot_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::LastYearRent => &mut self.last_year_rent,
            Field::LastYearMortgage => &mut self.last_year_mortgage,
            Field::NextYearMortgage => &mut self.next_year_mortgage,
            Field::EffectiveRate => &mut self.effective_rate,
            Field::NextYearRent => &mut self.next_year_rent,
            Field::RentIncreasePercent => &mut self.rent_increase_percent,
        }
    }
}

/// Numeric view of [`RawInputs`].
///
/// Amount fields default to `0.0` when absent or unparseable. The rate is
/// `None` when it did not normalize to a strictly positive value.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct NormalizedInputs {
    pub previous_rent: f64,
    pub previous_deposit: f64,
    pub next_deposit: f64,
    pub rate_percent: Option<f64>,
    pub next_rent: f64,
    pub increase_percent: f64,
}

impl NormalizedInputs {
    pub fn deposit_delta(&self) -> f64 {
        self.next_deposit - self.previous_deposit
    }
}

/// Calculation direction, derived from which selector fields are present.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CalculationMode {
    /// Next cash rent given; solve for the increase percent.
    ByNextRent,
    /// Increase percent given; solve for the next cash rent.
    ByIncreasePercent,
    Ambiguous,
    Incomplete,
}

impl Display for CalculationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::ByNextRent => "by_next_rent",
            Self::ByIncreasePercent => "by_increase_percent",
            Self::Ambiguous => "ambiguous",
            Self::Incomplete => "incomplete",
        })
    }
}

/// The quantity a successful calculation solved for.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", content = "value", rename_all = "snake_case"))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Solved {
    IncreasePercent(f64),
    NextRent(f64),
}

impl Solved {
    pub fn mode(&self) -> CalculationMode {
        match self {
            Self::IncreasePercent(_) => CalculationMode::ByNextRent,
            Self::NextRent(_) => CalculationMode::ByIncreasePercent,
        }
    }

    pub fn value(&self) -> f64 {
        match self {
            Self::IncreasePercent(v) | Self::NextRent(v) => *v,
        }
    }
}

/// Successful reconciliation. Amounts are unrounded.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Calculation {
    pub previous_deposit_equivalent: f64,
    pub previous_total_rent: f64,
    pub next_deposit_equivalent: f64,
    pub next_total_rent: f64,
    pub solved: Solved,
}

impl Calculation {
    pub fn mode(&self) -> CalculationMode {
        self.solved.mode()
    }

    pub fn increase_percent(&self) -> Option<f64> {
        match self.solved {
            Solved::IncreasePercent(p) => Some(p),
            Solved::NextRent(_) => None,
        }
    }

    pub fn next_rent(&self) -> Option<f64> {
        match self.solved {
            Solved::NextRent(r) => Some(r),
            Solved::IncreasePercent(_) => None,
        }
    }
}

pub type CalculationResult = Result<Calculation, CalcError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presence_is_raw_length() {
        let raw = RawInputs::new()
            .with(Field::NextYearRent, "0")
            .with(Field::RentIncreasePercent, "");
        assert!(raw.is_present(Field::NextYearRent));
        assert!(!raw.is_present(Field::RentIncreasePercent));
        assert!(!raw.is_present(Field::EffectiveRate));
    }

    #[test]
    fn get_set_cover_every_field() {
        let mut raw = RawInputs::new();
        for (i, field) in Field::ALL.into_iter().enumerate() {
            raw.set(field, i.to_string());
        }
        for (i, field) in Field::ALL.into_iter().enumerate() {
            assert_eq!(raw.get(field), i.to_string());
        }
    }

    #[test]
    fn solved_reports_its_mode() {
        let calc = Calculation {
            previous_deposit_equivalent: 0.0,
            previous_total_rent: 100.0,
            next_deposit_equivalent: 0.0,
            next_total_rent: 110.0,
            solved: Solved::IncreasePercent(10.0),
        };
        assert_eq!(calc.mode(), CalculationMode::ByNextRent);
        assert_eq!(calc.increase_percent(), Some(10.0));
        assert_eq!(calc.next_rent(), None);
        assert_eq!(Solved::NextRent(5.0).value(), 5.0);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn raw_inputs_use_wire_names() {
        let raw: RawInputs =
            serde_json::from_str(r#"{"effectiveRate":"20","nextYearRent":"1200000"}"#).unwrap();
        assert_eq!(raw.effective_rate, "20");
        assert_eq!(raw.next_year_rent, "1200000");
        assert!(raw.last_year_rent.is_empty());
    }
}
