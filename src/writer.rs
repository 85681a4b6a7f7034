use crate::error::SamplesheetError;
use crate::group::SampleGroups;
use crate::record::OUTPUT_HEADER;

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// What [`write_samplesheet`] did with the output path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    /// No groups; the output file was not created.
    Skipped,
    Written { samples: usize, runs: usize },
}

/// Write the header and every row. Fields are comma-joined without quoting.
pub fn write_rows<W: Write>(groups: &SampleGroups, mut out: W) -> io::Result<()> {
    writeln!(out, "{}", OUTPUT_HEADER.join(","))?;
    for row in groups.rows() {
        writeln!(out, "{}", row.fields().join(","))?;
    }
    out.flush()
}

/// Write `groups` to `path`, or leave `path` untouched when there is nothing to write.
pub fn write_samplesheet<P: AsRef<Path>>(
    groups: &SampleGroups,
    path: P,
) -> Result<WriteOutcome, SamplesheetError> {
    let path = path.as_ref();
    if groups.is_empty() {
        log::info!("no samples found; not writing {}", path.display());
        return Ok(WriteOutcome::Skipped);
    }

    let io_err = |e| SamplesheetError::io_err(e, Some(path), None);
    let f = File::create(path).map_err(io_err)?;
    write_rows(groups, BufWriter::new(f)).map_err(io_err)?;

    let outcome = WriteOutcome::Written {
        samples: groups.num_samples(),
        runs: groups.num_runs(),
    };
    log::info!("wrote {} ({outcome:?})", path.display());
    Ok(outcome)
}
