//! Calculation error representation shared by the engine, the CLI and
//! the bindings.
//!
//! - **`CalcErrorKind`** : the closed set of failure reasons
//! - **`CalcErrorExtra`**: per-kind payload slot (e.g. `NegativeRent`)
//! - **`CalcError`**     : one struct that glues kind, message and payload
//!
//! Every kind is a recoverable input condition. Nothing here is raised
//! as a panic; the engine hands these back as plain values.

use std::{error::Error, fmt};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// All recognised calculation failures.
///
/// `Display` renders a stable snake_case code, suitable for logs and
/// machine-readable output.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum CalcErrorKind {
    /// Effective rate missing, non-numeric or not strictly positive.
    InvalidBaseInputs,
    /// Both next rent and increase percent were supplied.
    AmbiguousMode,
    /// Neither next rent nor increase percent was supplied.
    IncompleteMode,
    /// Previous total rent is zero or negative, so no ratio exists.
    ZeroBaseRent,
    /// The cash rent needed to hit the target percent is below zero.
    NegativeRequiredRent,
    /// Inputs are so large that a computed figure is no longer finite.
    Overflow,
}

impl CalcErrorKind {
    pub const ALL: [CalcErrorKind; 6] = [
        Self::InvalidBaseInputs,
        Self::AmbiguousMode,
        Self::IncompleteMode,
        Self::ZeroBaseRent,
        Self::NegativeRequiredRent,
        Self::Overflow,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidBaseInputs => "invalid_base_inputs",
            Self::AmbiguousMode => "ambiguous_mode",
            Self::IncompleteMode => "incomplete_mode",
            Self::ZeroBaseRent => "zero_base_rent",
            Self::NegativeRequiredRent => "negative_required_rent",
            Self::Overflow => "overflow",
        }
    }

    /// Inverse of [`CalcErrorKind::code`]. Case-insensitive.
    pub fn parse(s: &str) -> Option<Self> {
        let wanted = s.trim().to_ascii_lowercase();
        Self::ALL.into_iter().find(|k| k.code() == wanted)
    }
}

impl fmt::Display for CalcErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Kind-specific payloads ("extension slot").
///
/// Only variants that need extra data get it.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "type", rename_all = "snake_case"))]
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum CalcErrorExtra {
    #[default]
    None,

    /// `NegativeRequiredRent` diagnostics: the computed (negative) cash
    /// rent and how much the deposit grew between periods.
    NegativeRent {
        required_rent: f64,
        deposit_delta: f64,
    },
}

/// The single error struct the calculation API passes around.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct CalcError {
    pub kind: CalcErrorKind,
    pub message: Option<String>,
    pub extra: CalcErrorExtra,
}

/* ───────────────────── Constructors & helpers ─────────────────────── */

impl From<CalcErrorKind> for CalcError {
    fn from(kind: CalcErrorKind) -> Self {
        Self {
            kind,
            message: None,
            extra: CalcErrorExtra::None,
        }
    }
}

impl CalcError {
    /// Basic constructor (no message, no extra).
    pub fn new(kind: CalcErrorKind) -> Self {
        kind.into()
    }

    pub fn new_invalid_base() -> Self {
        Self::new(CalcErrorKind::InvalidBaseInputs)
    }

    pub fn new_ambiguous() -> Self {
        Self::new(CalcErrorKind::AmbiguousMode)
    }

    pub fn new_incomplete() -> Self {
        Self::new(CalcErrorKind::IncompleteMode)
    }

    pub fn new_zero_base() -> Self {
        Self::new(CalcErrorKind::ZeroBaseRent)
    }

    pub fn new_overflow() -> Self {
        Self::new(CalcErrorKind::Overflow)
    }

    /// `NegativeRequiredRent` with its diagnostic payload attached.
    pub fn new_negative_rent(required_rent: f64, deposit_delta: f64) -> Self {
        Self::new(CalcErrorKind::NegativeRequiredRent).with_extra(CalcErrorExtra::NegativeRent {
            required_rent,
            deposit_delta,
        })
    }

    /// Attach a human-readable explanation.
    pub fn with_message<S: Into<String>>(mut self, msg: S) -> Self {
        self.message = Some(msg.into());
        self
    }

    /// Attach kind-specific extra data.
    pub fn with_extra(mut self, extra: CalcErrorExtra) -> Self {
        self.extra = extra;
        self
    }

    /// The negative cash rent carried by `NegativeRequiredRent`, if any.
    pub fn required_rent(&self) -> Option<f64> {
        match self.extra {
            CalcErrorExtra::NegativeRent { required_rent, .. } => Some(required_rent),
            CalcErrorExtra::None => None,
        }
    }

    /// The deposit increase carried by `NegativeRequiredRent`, if any.
    pub fn deposit_delta(&self) -> Option<f64> {
        match self.extra {
            CalcErrorExtra::NegativeRent { deposit_delta, .. } => Some(deposit_delta),
            CalcErrorExtra::None => None,
        }
    }
}

/* ───────────────────────── Display / Error ────────────────────────── */

impl fmt::Display for CalcError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)?;

        if let Some(ref msg) = self.message {
            write!(f, ": {msg}")?;
        }

        // Keep it terse for logs.
        match &self.extra {
            CalcErrorExtra::None => {}
            CalcErrorExtra::NegativeRent {
                required_rent,
                deposit_delta,
            } => {
                write!(
                    f,
                    " [required rent {required_rent:.0}, deposit delta {deposit_delta:.0}]"
                )?;
            }
        }

        Ok(())
    }
}

impl Error for CalcError {}

impl PartialEq<CalcErrorKind> for CalcError {
    fn eq(&self, other: &CalcErrorKind) -> bool {
        self.kind == *other
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_codes_roundtrip() {
        for kind in CalcErrorKind::ALL {
            assert_eq!(CalcErrorKind::parse(kind.code()), Some(kind));
        }
        assert_eq!(
            CalcErrorKind::parse("  Zero_Base_Rent "),
            Some(CalcErrorKind::ZeroBaseRent)
        );
        assert_eq!(CalcErrorKind::parse("nope"), None);
    }

    #[test]
    fn plain_error_display() {
        let err = CalcError::new_ambiguous();
        assert_eq!(err.to_string(), "ambiguous_mode");
        assert_eq!(err.required_rent(), None);

        let err = CalcError::new_invalid_base().with_message("rate must be positive");
        assert_eq!(err.to_string(), "invalid_base_inputs: rate must be positive");
    }

    #[test]
    fn negative_rent_carries_payload() {
        let err = CalcError::new_negative_rent(-416_666.666, 50_000_000.0);
        assert_eq!(err, CalcErrorKind::NegativeRequiredRent);
        assert_eq!(err.required_rent(), Some(-416_666.666));
        assert_eq!(err.deposit_delta(), Some(50_000_000.0));
        assert_eq!(
            err.to_string(),
            "negative_required_rent [required rent -416667, deposit delta 50000000]"
        );
    }
}
