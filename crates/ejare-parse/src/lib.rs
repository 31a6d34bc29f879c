pub mod locale;
pub mod numeral;
pub mod pretty;

pub use locale::{DigitScript, Locale};
pub use numeral::{canonicalize, normalize, normalize_inputs, parse_numeral};
pub use pretty::{format_amount, format_percent};

// Re-export common types
pub use ejare_common::{Field, NormalizedInputs, RawInputs};
