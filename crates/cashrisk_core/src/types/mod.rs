//! Foundation types: calendar days and error enums.

pub mod error;
pub mod time;

pub use error::{DateError, FlowError};
pub use time::Date;
