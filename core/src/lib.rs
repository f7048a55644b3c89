pub mod api;
pub mod cli;
pub mod error;
pub mod extraction;
pub mod render;
pub mod types;

#[cfg(test)]
pub(crate) mod testutil;

pub use api::{extract_metadata, render, render_file, InstanceMetadata};
pub use cli::report::TextReport;
pub use error::{CtViewError, Result};
pub use extraction::validate;
pub use types::*;
