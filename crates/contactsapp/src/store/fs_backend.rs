use super::backend::LogBackend;
use crate::error::{ContactsError, Result};
use std::fs::{self, OpenOptions};
use std::io::{self, BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

/// Filesystem log: one plain text file, opened per call and closed right after.
pub struct FsBackend {
    path: PathBuf,
}

impl FsBackend {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn ensure_parent(&self) -> Result<()> {
        match self.path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => ensure_dir(dir),
            _ => Ok(()),
        }
    }
}

pub(crate) fn ensure_dir(path: &Path) -> Result<()> {
    if !path.exists() {
        fs::create_dir_all(path).map_err(ContactsError::Io)?;
    }
    Ok(())
}

/// A sink that can be cut back to an earlier length.
trait Truncate: Write {
    fn truncate_to(&mut self, len: u64) -> io::Result<()>;
}

impl Truncate for fs::File {
    fn truncate_to(&mut self, len: u64) -> io::Result<()> {
        self.set_len(len)
    }
}

/// Writes the whole entry or, on failure, cuts the sink back to `start` bytes
/// so the log never ends in half an entry.
fn write_whole<W: Truncate>(out: &mut W, start: u64, entry: &[u8]) -> io::Result<()> {
    let written = out.write_all(entry).and_then(|()| out.flush());
    if let Err(e) = written {
        if let Err(undo) = out.truncate_to(start) {
            log::warn!("could not remove partial log entry: {}", undo);
        }
        return Err(e);
    }
    Ok(())
}

/// Splits raw bytes into lines without the `\n` or `\r\n` terminator.
/// Invalid UTF-8 is replaced rather than failing the whole read.
fn decode_lines<R: BufRead>(mut reader: R) -> io::Result<Vec<String>> {
    let mut lines = Vec::new();
    let mut buf = Vec::new();
    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            return Ok(lines);
        }
        if buf.last() == Some(&b'\n') {
            buf.pop();
            if buf.last() == Some(&b'\r') {
                buf.pop();
            }
        }
        lines.push(String::from_utf8_lossy(&buf).into_owned());
    }
}

impl LogBackend for FsBackend {
    fn append(&self, entry: &str) -> Result<()> {
        self.ensure_parent()?;

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(ContactsError::Io)?;
        let start = file.metadata().map_err(ContactsError::Io)?.len();
        write_whole(&mut file, start, entry.as_bytes()).map_err(ContactsError::Io)?;

        Ok(())
    }

    fn read_lines(&self) -> Result<Option<Vec<String>>> {
        if !self.path.exists() {
            return Ok(None);
        }

        let file = fs::File::open(&self.path).map_err(ContactsError::Io)?;
        let lines = decode_lines(BufReader::new(file)).map_err(ContactsError::Io)?;
        Ok(Some(lines))
    }

    fn path(&self) -> PathBuf {
        self.path.clone()
    }
}
