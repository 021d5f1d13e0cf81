//! PNG to JPEG conversion jobs.

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use log::debug;

use crate::color_mode::ColorMode;
use crate::error::{ConvertError, Result};
use crate::image_handler;
use crate::utils::convert::flatten;

const DEFAULT_JOBS: [(&str, &str); 2] = [
    ("assets/logo.png", "assets/logo.jpg"),
    ("assets/background.png", "assets/background.jpg"),
];

/// One source file and the JPEG it is converted into.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionJob {
    pub source: PathBuf,
    pub destination: PathBuf,
}

impl ConversionJob {
    pub fn new(source: impl Into<PathBuf>, destination: impl Into<PathBuf>) -> Self {
        Self {
            source: source.into(),
            destination: destination.into(),
        }
    }
}

/// The built-in jobs the command line tool runs.
pub fn default_jobs() -> Vec<ConversionJob> {
    DEFAULT_JOBS
        .iter()
        .map(|(source, destination)| ConversionJob::new(*source, *destination))
        .collect()
}

/// What a successful conversion produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Conversion {
    pub mode: ColorMode,
    pub width: u32,
    pub height: u32,
    pub bytes_written: usize,
}

/// Totals for a batch of jobs.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub converted: usize,
    pub failed: usize,
}

/// Convert `source` into a JPEG at `destination`, flattening any
/// transparency onto white. An existing destination is overwritten.
pub fn convert(source: &Path, destination: &Path) -> Result<Conversion> {
    let decode_error = |source_err: image::ImageError| ConvertError::Decode {
        path: source.to_path_buf(),
        source: source_err,
    };

    // Read fully up front; no file handle outlives this statement.
    let bytes = std::fs::read(source).map_err(|e| decode_error(image::ImageError::IoError(e)))?;
    let image = image_handler::load_image_from_bytes(&bytes).map_err(decode_error)?;
    let mode = ColorMode::probe(&bytes, &image);
    debug!(
        "{}: {}x{} {}",
        source.display(),
        image.width(),
        image.height(),
        mode
    );

    let rgb = flatten(&image, mode);
    drop(image);

    let jpeg = image_handler::save_jpeg_to_bytes(&rgb)?;
    std::fs::write(destination, &jpeg).map_err(|e| ConvertError::Write {
        path: destination.to_path_buf(),
        source: e,
    })?;
    debug!("{}: wrote {} bytes", destination.display(), jpeg.len());

    Ok(Conversion {
        mode,
        width: rgb.width(),
        height: rgb.height(),
        bytes_written: jpeg.len(),
    })
}

/// Run every job in order, reporting one line per job to `out`.
///
/// Conversion failures are reported and skipped; only a failure to write
/// the report itself is returned.
pub fn run_jobs<W: Write>(jobs: &[ConversionJob], out: &mut W) -> io::Result<Summary> {
    let mut summary = Summary::default();

    for job in jobs {
        match convert(&job.source, &job.destination) {
            Ok(_) => {
                summary.converted += 1;
                writeln!(
                    out,
                    "Converted {} -> {}",
                    job.source.display(),
                    job.destination.display()
                )?;
            }
            Err(e) => {
                summary.failed += 1;
                debug!("conversion of {} failed: {:?}", job.source.display(), e);
                writeln!(out, "Error converting {}: {}", job.source.display(), e)?;
            }
        }
    }

    Ok(summary)
}
