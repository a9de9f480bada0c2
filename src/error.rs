use std::io;
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("file not found: '{}'", .path.display())]
    FileNotFound { path: PathBuf },

    #[error("I/O error for '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("output file already exists: '{}'", .path.display())]
    OutputFileAlreadyExists { path: PathBuf },

    #[error("no atoms of residue {residue} found in '{}'", .path.display())]
    ResidueNotFound { residue: i64, path: PathBuf },

    #[error("no coordinates of atom {serial} found in '{}'", .path.display())]
    SerialNotFound { serial: u64, path: PathBuf },

    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("invalid config: {0}")]
    Config(String),
}

impl Error {
    /// Wrap an I/O error raised while reading `path`.
    /// A missing file becomes `FileNotFound`.
    pub fn from_io(source: io::Error, path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        match source.kind() {
            io::ErrorKind::NotFound => Self::FileNotFound { path },
            _ => Self::Io { path, source },
        }
    }

    pub fn invalid_argument(details: impl Into<String>) -> Self {
        Self::InvalidArgument(details.into())
    }

    pub fn config(details: impl Into<String>) -> Self {
        Self::Config(details.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_io_maps_not_found() {
        let err = Error::from_io(io::Error::from(io::ErrorKind::NotFound), "missing.pdb");
        assert!(matches!(err, Error::FileNotFound { ref path } if path == &PathBuf::from("missing.pdb")));
        assert_eq!(err.to_string(), "file not found: 'missing.pdb'");
    }

    #[test]
    fn test_from_io_keeps_other_errors() {
        let err = Error::from_io(io::Error::from(io::ErrorKind::PermissionDenied), "locked.pdb");
        assert!(matches!(err, Error::Io { .. }));
        assert!(std::error::Error::source(&err).is_some());
    }
}
