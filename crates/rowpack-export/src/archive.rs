//! Archive sinks: where finished member files go.

use std::io::{Seek, Write};

use thiserror::Error;
use zip::result::ZipError;
use zip::write::SimpleFileOptions;
use zip::{AesMode, CompressionMethod, ZipWriter};

/// Errors raised by an archive sink.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ArchiveError {
    /// The underlying zip writer failed.
    #[error("zip write failed: {0}")]
    Zip(#[from] ZipError),

    /// I/O error on the output stream.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The sink was used after finalization.
    #[error("archive already finalized")]
    Finalized,
}

/// A container that accepts named byte-content members and finalizes into
/// one archive.
///
/// Members appear in the container in the order they are added. `finish`
/// must be called exactly once; adding members afterwards is an error.
pub trait ArchiveSink {
    /// Add one member with the given name and content.
    fn add_member(&mut self, name: &str, data: &[u8]) -> Result<(), ArchiveError>;

    /// Write the container trailer and release the output stream.
    fn finish(&mut self) -> Result<(), ArchiveError>;
}

/// An [`ArchiveSink`] producing a zip container.
///
/// Every member is Deflate compressed. When a password is configured, every
/// member is additionally AES-256 encrypted with it; without a password the
/// archive is readable by any zip tool.
pub struct ZipSink<W: Write + Seek> {
    writer: Option<ZipWriter<W>>,
    password: Option<String>,
}

impl<W: Write + Seek> ZipSink<W> {
    /// Create a sink writing the container to `out`.
    pub fn new(out: W, password: Option<String>) -> Self {
        Self {
            writer: Some(ZipWriter::new(out)),
            password,
        }
    }
}

impl<W: Write + Seek> ArchiveSink for ZipSink<W> {
    fn add_member(&mut self, name: &str, data: &[u8]) -> Result<(), ArchiveError> {
        let writer = self.writer.as_mut().ok_or(ArchiveError::Finalized)?;

        let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);
        match self.password.as_deref() {
            Some(password) => {
                writer.start_file(name, options.with_aes_encryption(AesMode::Aes256, password))?;
            }
            None => writer.start_file(name, options)?,
        }
        writer.write_all(data)?;
        Ok(())
    }

    fn finish(&mut self) -> Result<(), ArchiveError> {
        let writer = self.writer.take().ok_or(ArchiveError::Finalized)?;
        writer.finish()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    #[test]
    fn members_keep_insertion_order() {
        let mut buffer = Cursor::new(Vec::new());
        {
            let mut sink = ZipSink::new(&mut buffer, None);
            sink.add_member("b.csv", b"second").expect("add b");
            sink.add_member("a.csv", b"first").expect("add a");
            sink.finish().expect("finish");
        }

        let mut archive = zip::ZipArchive::new(buffer).expect("read back");
        assert_eq!(archive.len(), 2);
        assert_eq!(archive.by_index(0).expect("member 0").name(), "b.csv");
        assert_eq!(archive.by_index(1).expect("member 1").name(), "a.csv");
    }

    #[test]
    fn finish_twice_is_an_error() {
        let mut buffer = Cursor::new(Vec::new());
        let mut sink = ZipSink::new(&mut buffer, None);
        sink.finish().expect("first finish");
        assert!(matches!(sink.finish(), Err(ArchiveError::Finalized)));
        assert!(matches!(
            sink.add_member("late.csv", b"x"),
            Err(ArchiveError::Finalized)
        ));
    }
}
