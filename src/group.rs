use std::collections::HashMap;

use crate::record::{GiabRecord, OutputRow, RunFiles};

/// Runs keyed by sample name.
///
/// Runs within a sample keep insertion order; that order numbers them. Sample
/// keys are unordered here and only sorted when rows are produced.
#[derive(Debug, Clone, Default)]
pub struct SampleGroups {
    by_sample: HashMap<String, Vec<RunFiles>>,
}

impl SampleGroups {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold records into groups, stopping at the first error.
    pub fn from_records<I, E>(records: I) -> Result<Self, E>
    where
        I: IntoIterator<Item = Result<GiabRecord, E>>,
    {
        let mut groups = Self::new();
        for rec in records {
            groups.push(rec?);
        }
        Ok(groups)
    }

    pub fn push(&mut self, record: GiabRecord) {
        let (sample, files) = record.into_parts();
        log::debug!("grouping run {} for sample {sample}", files.fastq_1);
        self.by_sample.entry(sample).or_default().push(files);
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.by_sample.is_empty()
    }

    #[inline]
    pub fn num_samples(&self) -> usize {
        self.by_sample.len()
    }

    pub fn num_runs(&self) -> usize {
        self.by_sample.values().map(Vec::len).sum()
    }

    pub fn runs(&self, sample: &str) -> Option<&[RunFiles]> {
        self.by_sample.get(sample).map(Vec::as_slice)
    }

    /// Sample names in ascending byte order.
    pub fn sorted_samples(&self) -> Vec<&str> {
        let mut samples: Vec<&str> = self.by_sample.keys().map(String::as_str).collect();
        samples.sort_unstable();
        samples
    }

    /// Output rows: samples sorted, runs in input order, `{sample}_RUN{n}` ids from 1.
    pub fn rows(&self) -> impl Iterator<Item = OutputRow<'_>> + '_ {
        self.sorted_samples().into_iter().flat_map(move |sample| {
            self.by_sample[sample]
                .iter()
                .enumerate()
                .map(move |(idx, files)| OutputRow {
                    run_id: format!("{sample}_RUN{}", idx + 1),
                    files,
                })
        })
    }
}
