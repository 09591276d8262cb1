//! Opening the file named by an argument.

use std::fs::{File, OpenOptions};
use std::io::{self, Read, Write};
use std::path::PathBuf;

use log::debug;

use super::argument::Argument;
use super::ArgumentError;

/// Either a file opened from an argument or the caller's default handle.
///
/// The caller owns the handle; an opened file is closed when this value is dropped.
#[derive(Debug)]
pub enum FileOrDefault<D> {
    File(File),
    Default(D),
}

impl<D> FileOrDefault<D> {
    pub fn is_default(&self) -> bool {
        matches!(self, FileOrDefault::Default(_))
    }
}

impl<D: Read> Read for FileOrDefault<D> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        match self {
            FileOrDefault::File(file) => file.read(buf),
            FileOrDefault::Default(default) => default.read(buf),
        }
    }
}

impl<D: Write> Write for FileOrDefault<D> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            FileOrDefault::File(file) => file.write(buf),
            FileOrDefault::Default(default) => default.write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            FileOrDefault::File(file) => file.flush(),
            FileOrDefault::Default(default) => default.flush(),
        }
    }
}

impl Argument<'_> {
    /// Opens the path held by this argument with `options`.
    ///
    /// Access flags and permissions come from `options` (on Unix, set the mode
    /// through `std::os::unix::fs::OpenOptionsExt`). An absent argument or an
    /// empty path returns `default` without touching the filesystem.
    pub fn open_file<D>(
        &self,
        options: &OpenOptions,
        default: D,
    ) -> Result<FileOrDefault<D>, ArgumentError> {
        let path = match self.raw() {
            None | Some("") => return Ok(FileOrDefault::Default(default)),
            Some(path) => path,
        };

        debug!("Opening file from argument: {}", path);

        options
            .open(path)
            .map(FileOrDefault::File)
            .map_err(|source| ArgumentError::FileOpenFailure {
                path: PathBuf::from(path),
                source,
            })
    }
}
