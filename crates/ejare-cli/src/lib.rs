//! Front-end plumbing for the `ejare` binary.
//!
//! Everything here sits on top of the pure engine: reading snapshot and
//! settings files, and turning results into text or JSON for a terminal.

mod error;
pub mod messages;
pub mod report;
pub mod settings;
pub mod snapshot;

pub use error::CliError;
pub use messages::Language;
pub use report::{OutputFormat, render, render_json, render_text};
pub use settings::{DisplayOptions, Settings};
pub use snapshot::{load_snapshot, parse_snapshot};
