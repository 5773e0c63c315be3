use std::path::PathBuf;

use crate::error::ErrorKind;

#[derive(Debug)]
/// Represents failures of the host boundary.
pub enum HostError {
    /// The program source could not be read.
    UnreadableSource {
        /// The path that was requested.
        path:   PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },
    /// Reading a console line failed.
    ReadFailed {
        /// The underlying I/O error.
        source: std::io::Error,
    },
    /// The input stream ended while the program asked for another line.
    InputClosed,
}

impl HostError {
    /// Every host error is an I/O error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        ErrorKind::Io
    }
}

impl std::fmt::Display for HostError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnreadableSource { path, source } => write!(f,
                                                              "{}: Failed to read '{}': {source}.",
                                                              self.kind(),
                                                              path.display()),
            Self::ReadFailed { source } => {
                write!(f, "{}: Failed to read input: {source}.", self.kind())
            },
            Self::InputClosed => write!(f, "{}: Input ended while asking for a line.", self.kind()),
        }
    }
}

impl std::error::Error for HostError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::UnreadableSource { source, .. } | Self::ReadFailed { source } => Some(source),
            Self::InputClosed => None,
        }
    }
}
