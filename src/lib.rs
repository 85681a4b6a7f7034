//! Convert Genome In a Bottle sequence indexes into nf-core/fetchdata samplesheets.
//!
//! - Tab-separated input with the fixed `FASTQ .. NIST_SAMPLE_NAME` header (plain and `.gz`).
//! - Fail-fast validation: header, column count, non-empty sample.
//! - Runs grouped per sample, samples sorted, `{sample}_RUN{n}` ids.
//! - No output file at all when the input has no data rows.

pub mod error;
pub mod group;
pub mod reader;
pub mod record;
mod util;
pub mod writer;

pub use crate::error::{FormatError, IoContext, SamplesheetError};
pub use crate::group::SampleGroups;
pub use crate::reader::{SamplesheetReader, Source};
pub use crate::record::{GIAB_HEADER, GiabRecord, OUTPUT_HEADER, OutputRow, RunFiles};
pub use crate::writer::{WriteOutcome, write_rows, write_samplesheet};

use std::path::Path;

/// Read, validate and group `file_in`, then write the samplesheet to `file_out`.
pub fn convert<P: AsRef<Path>, Q: AsRef<Path>>(
    file_in: P,
    file_out: Q,
) -> Result<WriteOutcome, SamplesheetError> {
    let groups = {
        let reader = SamplesheetReader::from_path(file_in)?;
        SampleGroups::from_records(reader)?
    };
    write_samplesheet(&groups, file_out)
}
