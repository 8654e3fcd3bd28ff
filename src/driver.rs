//! Runs a conversion over an ordered list of sources.

use core::fmt;
use std::{
    fs::File,
    io::{self, Read, Write},
    path::{Path, PathBuf},
};

use log::{debug, info, warn};

use crate::{convert::convert_stream, line_buffer::LineBuffer, Eol, Error, Result};

/// Exit status used for usage errors (help, unrecognized options).
pub const EXIT_USAGE: u8 = 255;
/// Exit status used when reading an opened source or writing output fails.
pub const EXIT_IO: u8 = 254;
/// Largest exit status the skipped-file count maps to.
pub const EXIT_MAX_SKIPPED: u8 = 253;

/// One input stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    Stdin,
    File(PathBuf),
}

impl Source {
    /// Open the source for reading. Files are read as raw bytes.
    ///
    /// # Errors
    ///
    /// Returns `Error::Open` if a file can't be opened.
    pub fn open(&self) -> Result<Box<dyn Read>> {
        match self {
            Source::Stdin => Ok(Box::new(io::stdin().lock())),
            Source::File(path) => File::open(path)
                .map(|file| Box::new(file) as Box<dyn Read>)
                .map_err(|source| Error::Open {
                    path: path.clone(),
                    source,
                }),
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Source::Stdin => write!(f, "-"),
            Source::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// What to convert and how, resolved once from the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    eol: Eol,
    sources: Vec<Source>,
}

impl Config {
    /// Resolve `files` into sources.
    ///
    /// No files, or the single name `-`, means standard input. Otherwise every
    /// name is a file, in order; a `-` among several names is a file called `-`.
    pub fn new<I, P>(eol: Eol, files: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        let files: Vec<PathBuf> = files.into_iter().map(Into::into).collect();
        let sources = match files.as_slice() {
            [] => vec![Source::Stdin],
            [only] if only.as_path() == Path::new("-") => vec![Source::Stdin],
            _ => files.into_iter().map(Source::File).collect(),
        };
        Self { eol, sources }
    }

    #[must_use]
    pub fn eol(&self) -> Eol {
        self.eol
    }

    #[must_use]
    pub fn sources(&self) -> &[Source] {
        &self.sources
    }
}

/// Outcome of a run that wasn't aborted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    /// Lines written across every source.
    pub lines: u64,
    /// Files that could not be opened.
    pub skipped: usize,
}

impl Summary {
    /// Process exit status: the number of skipped files, saturating below the
    /// codes reserved for usage and I/O errors.
    #[must_use]
    pub fn exit_code(&self) -> u8 {
        u8::try_from(self.skipped).map_or(EXIT_MAX_SKIPPED, |n| n.min(EXIT_MAX_SKIPPED))
    }
}

#[derive(Debug)]
pub struct Driver {
    config: Config,
}

impl Driver {
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Convert every source in order into `out`, flushing after each one.
    ///
    /// A file that can't be opened is reported on `diag` and skipped.
    ///
    /// # Errors
    ///
    /// Returns `Error::Io` if reading an opened source, or writing to `out` or
    /// `diag`, fails. The run stops at the first such error.
    pub fn run<W, E>(&self, out: &mut W, diag: &mut E) -> Result<Summary>
    where
        W: Write + ?Sized,
        E: Write + ?Sized,
    {
        let eol = self.config.eol;
        let mut line = LineBuffer::new();
        let mut summary = Summary::default();

        for source in &self.config.sources {
            let reader = match source.open() {
                Ok(reader) => reader,
                Err(err @ Error::Open { .. }) => {
                    warn!("skipping {source}: {err}");
                    writeln!(diag, "eol2eol: {err}")?;
                    summary.skipped += 1;
                    continue;
                }
                Err(err) => return Err(err),
            };

            let lines = convert_stream(reader, out, eol, &mut line)?;
            out.flush()?;
            debug!("{source}: converted {lines} lines to {eol}");
            summary.lines += lines;
        }

        info!(
            "converted {} lines from {} sources, {} skipped",
            summary.lines,
            self.config.sources.len() - summary.skipped,
            summary.skipped
        );
        Ok(summary)
    }
}
