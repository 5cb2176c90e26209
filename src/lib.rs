pub mod config;
pub mod error;
pub mod fetch;
pub mod pipeline;
pub mod plot;
pub mod process;

pub use error::{Error, Result};
