use std::fs::File;
use std::io::{BufRead, BufReader, Lines};
use std::path::{Path, PathBuf};

use super::error::{IngestError, Result};

// ---------------------------------------------------------------------------
// Line – one data line of the input
// ---------------------------------------------------------------------------

/// A data line together with its 1-based position in the file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    pub number: usize,
    pub text: String,
}

// ---------------------------------------------------------------------------
// LineReader – lazy, single-pass, header already consumed
// ---------------------------------------------------------------------------

/// Streams the lines of a text file, skipping the header line.
///
/// The reader owns the file handle; it is closed when the reader is dropped,
/// whether iteration finished or stopped early on an error.
pub struct LineReader {
    path: PathBuf,
    lines: Lines<BufReader<File>>,
    line_no: usize,
}

impl LineReader {
    /// Open `path` and discard its first line.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let file = File::open(&path).map_err(|source| IngestError::Io {
            path: path.clone(),
            source,
        })?;

        let mut lines = BufReader::new(file).lines();
        let mut line_no = 0;
        if let Some(header) = lines.next() {
            header.map_err(|source| IngestError::Io {
                path: path.clone(),
                source,
            })?;
            line_no = 1;
        }

        Ok(Self {
            path,
            lines,
            line_no,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Iterator for LineReader {
    type Item = Result<Line>;

    fn next(&mut self) -> Option<Self::Item> {
        let next = self.lines.next()?;
        self.line_no += 1;

        Some(match next {
            Ok(mut text) => {
                if text.ends_with('\r') {
                    text.pop();
                }
                Ok(Line {
                    number: self.line_no,
                    text,
                })
            }
            Err(source) => Err(IngestError::Io {
                path: self.path.clone(),
                source,
            }),
        })
    }
}
