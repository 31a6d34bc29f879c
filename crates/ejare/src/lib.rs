//! Meta crate that re-exports the Ejare building blocks with sensible
//! defaults. Downstream users can depend on this crate and opt into
//! specific layers via feature flags while keeping access to the underlying
//! crates when deeper integration is required.

#[cfg(feature = "common")]
pub use ejare_common as common;

#[cfg(feature = "parse")]
pub use ejare_parse as parse;

#[cfg(feature = "eval")]
pub use ejare_eval as eval;

#[cfg(feature = "common")]
pub use ejare_common::{
    CalcError, CalcErrorExtra, CalcErrorKind, Calculation, CalculationMode, CalculationResult,
    Field, NormalizedInputs, RawInputs, Solved,
};

#[cfg(feature = "parse")]
pub use ejare_parse::{DigitScript, Locale, format_amount, format_percent, normalize};

#[cfg(feature = "eval")]
pub use ejare_eval::{CalcConfig, Calculator, ZeroBasePolicy, calculate, detect_mode};

#[cfg(feature = "eval")]
pub mod doc_examples;
