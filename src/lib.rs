#![doc = include_str!("../README.md")]

pub mod convert;
pub mod driver;
pub mod line_buffer;
pub mod line_reader;
pub mod pushback;
mod types;

pub use convert::{convert, convert_str, convert_stream, lines};
pub use driver::{Config, Driver, Source, Summary};
pub use line_buffer::LineBuffer;
pub use line_reader::read_line;
pub use pushback::PushbackReader;
pub use types::{Eol, Error, Result, CR, LF};
