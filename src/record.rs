/// Column names expected, in order, on the first line of a GIAB sequence index.
pub const GIAB_HEADER: [&str; 5] = [
    "FASTQ",
    "FASTQ_MD5",
    "PAIRED_FASTQ",
    "PAIRED_FASTQ_MD5",
    "NIST_SAMPLE_NAME",
];

/// Header line of the generated samplesheet.
pub const OUTPUT_HEADER: [&str; 5] = ["sample", "fastq_1", "fastq_2", "md5_1", "md5_2"];

/// One validated data line of a GIAB sequence index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GiabRecord {
    pub fastq_1: String,
    pub md5_1: String,
    pub fastq_2: String,
    pub md5_2: String,
    pub sample: String,
}

impl GiabRecord {
    /// Split into the grouping key and the per-run files.
    pub fn into_parts(self) -> (String, RunFiles) {
        (
            self.sample,
            RunFiles {
                fastq_1: self.fastq_1,
                fastq_2: self.fastq_2,
                md5_1: self.md5_1,
                md5_2: self.md5_2,
            },
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunFiles {
    pub fastq_1: String,
    pub fastq_2: String,
    pub md5_1: String,
    pub md5_2: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputRow<'a> {
    pub run_id: String,
    pub files: &'a RunFiles,
}

impl OutputRow<'_> {
    #[inline]
    pub fn fields(&self) -> [&str; 5] {
        [
            self.run_id.as_str(),
            self.files.fastq_1.as_str(),
            self.files.fastq_2.as_str(),
            self.files.md5_1.as_str(),
            self.files.md5_2.as_str(),
        ]
    }
}
