//! Core building blocks shared by the sequence diagram builder
//!
//! Line emission, text formatting helpers, keyword enumerations, errors and
//! logging setup.

mod error;
pub mod logging;
mod text;
mod types;
mod writer;

pub use error::*;
pub use logging::{init_default_logging, init_logging, LogFormat};
pub use text::*;
pub use types::*;
pub use writer::*;
