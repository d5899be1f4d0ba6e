use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Streaming word-list source.
///
/// Yields one word per input line, in file order, read once front to back.
/// Lines are decoded as Latin-1 (ISO-8859-1), where every byte maps to the
/// code point of the same value; decoding is total over arbitrary bytes and
/// cannot fail. Leading and trailing whitespace, including `\r`/`\n` line
/// terminators, is stripped. Both the load and the query phase go through
/// this type, so the two phases see identical word forms.
#[derive(Debug)]
pub struct WordList {
    path: PathBuf,
    reader: BufReader<File>,
    buf: Vec<u8>,
}

impl WordList {
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let file = File::open(&path).map_err(|source| Error::Source {
            path: path.clone(),
            source,
        })?;
        Ok(Self {
            path,
            reader: BufReader::new(file),
            buf: Vec::new(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

fn decode_latin1(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| b as char).collect()
}

impl Iterator for WordList {
    type Item = Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        self.buf.clear();
        match self.reader.read_until(b'\n', &mut self.buf) {
            Ok(0) => None,
            Ok(_) => Some(Ok(decode_latin1(&self.buf).trim().to_string())),
            Err(source) => Some(Err(Error::Source {
                path: self.path.clone(),
                source,
            })),
        }
    }
}
