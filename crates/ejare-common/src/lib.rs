pub mod error;
pub mod field;
pub mod value;

pub use error::*;
pub use field::*;
pub use value::*;
