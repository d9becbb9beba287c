//! Logo processing.
//!
//! # Modules
//!
//! - [`transparency`]: near-white pixel reclassification
//! - [`encode`]: PNG encoding
//! - [`svg`]: SVG wrapper generation
//! - [`process`]: the one-shot pipeline driver

mod encode;
mod process;
mod svg;
mod transparency;

pub use process::process_logo;
