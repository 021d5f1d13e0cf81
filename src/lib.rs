//! Convert PNG images to JPEG, flattening transparency onto white.

pub mod color_mode;
pub mod converter;
pub mod error;
pub mod image_handler;
pub mod utils;

pub use color_mode::ColorMode;
pub use converter::{Conversion, ConversionJob, Summary, convert, default_jobs, run_jobs};
pub use error::{ConvertError, Result};
