use core::fmt;
use std::{io, path::PathBuf, str::FromStr};

pub const CR: u8 = b'\r';
pub const LF: u8 = b'\n';

/// End-of-line convention written after every emitted line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Eol {
    /// `\r\n`
    #[default]
    Msdos,
    /// `\n`
    Unix,
    /// `\r`
    Mac,
}

impl Eol {
    pub const ALL: [Eol; 3] = [Eol::Msdos, Eol::Unix, Eol::Mac];

    /// The terminator bytes for this convention.
    #[must_use]
    pub fn as_bytes(self) -> &'static [u8] {
        match self {
            Eol::Msdos => b"\r\n",
            Eol::Unix => b"\n",
            Eol::Mac => b"\r",
        }
    }
}

impl fmt::Display for Eol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Eol::Msdos => write!(f, "msdos"),
            Eol::Unix => write!(f, "unix"),
            Eol::Mac => write!(f, "mac"),
        }
    }
}

impl FromStr for Eol {
    type Err = Error;

    /// Accepts the command-line spellings exactly, without the `--` prefix.
    fn from_str(s: &str) -> Result<Self> {
        match s {
            "msdos" | "dos" => Ok(Eol::Msdos),
            "unix" | "posix" | "linux" => Ok(Eol::Unix),
            "mac" | "osx" => Ok(Eol::Mac),
            _ => Err(Error::UnknownEol(s.to_owned())),
        }
    }
}

/// Error type for conversion runs.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Reading from an opened source or writing the output failed.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// An input file could not be opened.
    #[error("{}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("unknown line-ending convention `{0}'")]
    UnknownEol(String),
}

/// Result type alias for conversion runs.
pub type Result<T> = std::result::Result<T, Error>;
