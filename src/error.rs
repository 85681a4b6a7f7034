use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::record::GIAB_HEADER;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IoContext {
    pub byte_pos: u64,
    pub line_num: u64,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormatError {
    #[error("Invalid number of columns (minimum = {expected})!")]
    ColumnCount { expected: usize, found: usize },
    #[error("Sample entry has not been specified!")]
    MissingSample,
}

#[derive(Debug, Error)]
pub enum SamplesheetError {
    #[error("I/O error on {}: {source}", describe_path(.path.as_deref()))]
    Io {
        #[source]
        source: io::Error,
        /// File being read or written; `None` for caller-supplied readers.
        path: Option<PathBuf>,
        /// Input position, when the fault happened while reading.
        ctx: Option<IoContext>,
    },
    #[error(
        "ERROR: Please check samplesheet header -> {} != {}",
        .found.join(","),
        GIAB_HEADER.join(",")
    )]
    Header { found: Vec<String> },
    #[error("ERROR: Please check samplesheet -> {source}\nLine: '{line}'")]
    Format {
        #[source]
        source: FormatError,
        /// Offending input line, trimmed.
        line: String,
        ctx: IoContext,
    },
}

impl SamplesheetError {
    pub(crate) fn io_err(
        source: io::Error,
        path: Option<&Path>,
        ctx: Option<IoContext>,
    ) -> Self {
        Self::Io {
            source,
            path: path.map(Path::to_path_buf),
            ctx,
        }
    }
    pub(crate) fn fmt_err(source: FormatError, raw_line: &str, ctx: IoContext) -> Self {
        Self::Format {
            source,
            line: raw_line.trim().to_string(),
            ctx,
        }
    }

    /// True for schema violations in the input, false for I/O faults.
    pub fn is_validation(&self) -> bool {
        !matches!(self, Self::Io { .. })
    }
}

fn describe_path(path: Option<&Path>) -> String {
    match path {
        Some(p) => format!("'{}'", p.display()),
        None => "input stream".to_string(),
    }
}
