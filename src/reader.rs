use crate::error::{FormatError, IoContext, SamplesheetError};
use crate::record::{GIAB_HEADER, GiabRecord};
use crate::util::{looks_like_gzip, open_file, split_fields};

#[cfg(feature = "gzip")]
use flate2::read::MultiGzDecoder;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

#[derive(Debug)]
pub enum Source {
    Path(PathBuf),
    Reader,
}

/// Line reader over a GIAB sequence index (plain/.gz).
///
/// The header is validated on the first call to [`read_header`](Self::read_header)
/// or [`next`](Self::next). Reading stops at the first error.
pub struct SamplesheetReader {
    src: Source,
    rdr: Box<dyn BufRead + Send>,
    line_num: u64,
    byte_pos: u64,
    header: Option<Vec<String>>,
    done: bool,
}

impl SamplesheetReader {
    /// Open from a file path. Gzip input is detected by its magic bytes, so a
    /// plain file named `*.gz` is still read as text.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, SamplesheetError> {
        let path = path.as_ref();
        let open_err = |e| SamplesheetError::io_err(e, Some(path), None);
        let mut f = open_file(path).map_err(open_err)?;

        let is_gz = looks_like_gzip(&mut f).map_err(open_err)?;
        if !is_gz && path.extension().and_then(|s| s.to_str()) == Some("gz") {
            log::debug!("{} has no gzip magic; reading as plain text", path.display());
        }

        let rdr: Box<dyn BufRead + Send> = if is_gz {
            #[cfg(feature = "gzip")]
            {
                Box::new(BufReader::new(MultiGzDecoder::new(f)))
            }
            #[cfg(not(feature = "gzip"))]
            {
                return Err(open_err(io::Error::new(
                    io::ErrorKind::Unsupported,
                    "gzip input requires the `gzip` feature",
                )));
            }
        } else {
            Box::new(BufReader::new(f))
        };

        Ok(Self::with_source(Source::Path(path.to_path_buf()), rdr))
    }

    /// Wrap an arbitrary `BufRead` (stdin, in-memory buffers, etc.).
    pub fn from_bufread<R: BufRead + Send + 'static>(reader: R) -> Self {
        Self::with_source(Source::Reader, Box::new(reader))
    }

    fn with_source(src: Source, rdr: Box<dyn BufRead + Send>) -> Self {
        Self {
            src,
            rdr,
            line_num: 0,
            byte_pos: 0,
            header: None,
            done: false,
        }
    }

    pub fn source(&self) -> &Source {
        &self.src
    }

    /// Read and validate the header line. Subsequent calls return the cached header.
    pub fn read_header(&mut self) -> Result<&[String], SamplesheetError> {
        if self.header.is_none() {
            let mut line = String::new();
            self.read_line(&mut line).map_err(|e| self.io_err(e))?;
            let found = split_fields(&line);

            let matches = found.len() >= GIAB_HEADER.len()
                && found.iter().zip(GIAB_HEADER).all(|(f, h)| f == h);
            if !matches {
                self.done = true;
                return Err(SamplesheetError::Header { found });
            }
            if found.len() > GIAB_HEADER.len() {
                log::warn!(
                    "ignoring {} extra header column(s): {}",
                    found.len() - GIAB_HEADER.len(),
                    found[GIAB_HEADER.len()..].join(",")
                );
            }
            log::debug!("samplesheet header accepted ({:?})", self.src);
            self.header = Some(found);
        }
        Ok(self.header.as_deref().unwrap_or_default())
    }

    /// Iterator-style `next` record.
    pub fn next(&mut self) -> Option<Result<GiabRecord, SamplesheetError>> {
        if self.done {
            return None;
        }
        let res = self.read_one().transpose();
        if matches!(res, None | Some(Err(_))) {
            self.done = true;
        }
        res
    }

    /// Read one line terminated by `\n`, `\r\n` or a lone `\r`.
    fn read_line(&mut self, buf: &mut String) -> io::Result<usize> {
        buf.clear();
        let mut bytes = Vec::with_capacity(256);
        loop {
            let avail = self.rdr.fill_buf()?;
            if avail.is_empty() {
                break;
            }
            match avail.iter().position(|&b| b == b'\n' || b == b'\r') {
                Some(i) => {
                    let eol = avail[i];
                    bytes.extend_from_slice(&avail[..=i]);
                    self.rdr.consume(i + 1);
                    if eol == b'\r' && self.rdr.fill_buf()?.first() == Some(&b'\n') {
                        bytes.push(b'\n');
                        self.rdr.consume(1);
                    }
                    break;
                }
                None => {
                    let len = avail.len();
                    bytes.extend_from_slice(avail);
                    self.rdr.consume(len);
                }
            }
        }

        let n = bytes.len();
        if n > 0 {
            self.line_num += 1;
            self.byte_pos += n as u64;
        }
        *buf = String::from_utf8(bytes)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        Ok(n)
    }

    fn read_one(&mut self) -> Result<Option<GiabRecord>, SamplesheetError> {
        self.read_header()?;

        let mut line = String::with_capacity(256);
        let n = self.read_line(&mut line).map_err(|e| self.io_err(e))?;
        if n == 0 {
            return Ok(None);
        }

        let [fastq_1, md5_1, fastq_2, md5_2, sample] =
            match <[String; 5]>::try_from(split_fields(&line)) {
                Ok(fields) => fields,
                Err(fields) => {
                    return Err(SamplesheetError::fmt_err(
                        FormatError::ColumnCount {
                            expected: GIAB_HEADER.len(),
                            found: fields.len(),
                        },
                        &line,
                        self.ctx(),
                    ));
                }
            };
        if sample.is_empty() {
            return Err(SamplesheetError::fmt_err(
                FormatError::MissingSample,
                &line,
                self.ctx(),
            ));
        }

        Ok(Some(GiabRecord {
            fastq_1,
            md5_1,
            fastq_2,
            md5_2,
            sample,
        }))
    }

    fn io_err(&self, source: io::Error) -> SamplesheetError {
        let path = match &self.src {
            Source::Path(p) => Some(p.as_path()),
            Source::Reader => None,
        };
        SamplesheetError::io_err(source, path, Some(self.ctx()))
    }

    #[inline]
    fn ctx(&self) -> IoContext {
        IoContext {
            byte_pos: self.byte_pos,
            line_num: self.line_num,
        }
    }
}

impl Iterator for SamplesheetReader {
    type Item = Result<GiabRecord, SamplesheetError>;
    fn next(&mut self) -> Option<Self::Item> {
        SamplesheetReader::next(self)
    }
}
