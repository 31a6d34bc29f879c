//! Rent reconciliation engine.
//!
//! Converts security deposits into an equivalent monthly rent, adds them to
//! the cash rent, and then solves in one of two directions:
//!
//! - next cash rent known → total-rent increase percent
//! - target increase percent known → required next cash rent
//!
//! Every call is a pure function of one input snapshot.

pub mod config;
pub mod conversion;
pub mod engine;
pub mod mode;

pub use config::{CalcConfig, ZeroBasePolicy};
pub use conversion::{DepositConversion, MONTHS_PER_YEAR};
pub use engine::{Calculator, calculate, calculate_normalized};
pub use mode::detect_mode;

pub use ejare_common::{
    CalcError, CalcErrorExtra, CalcErrorKind, Calculation, CalculationMode, CalculationResult,
    Field, NormalizedInputs, RawInputs, Solved,
};

#[cfg(test)]
mod tests;
