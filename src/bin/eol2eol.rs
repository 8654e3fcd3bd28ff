use std::{
    ffi::{OsStr, OsString},
    io::{self, BufWriter, Write},
    path::PathBuf,
    process::ExitCode,
};

use anyhow::Context;
use clap::Parser;
use env_logger::Env;
use eol2eol::{
    driver::{EXIT_IO, EXIT_USAGE},
    Config, Driver, Eol,
};

#[derive(Debug, Parser)]
#[command(
    name = "eol2eol",
    override_usage = "eol2eol [OPTION] [FILE]...",
    about = "Concatenate EOL-converted FILE(s), or standard input, to standard output",
    after_help = "Lines are split on \\r\\n, \\n or \\r, in any mix.\n\
                  With no FILE, or when FILE is -, read standard input.",
    args_override_self = true
)]
struct Args {
    /// Convert EOL to \r\n (default)
    #[arg(long, visible_alias = "dos", overrides_with_all = ["mac", "unix"])]
    msdos: bool,

    /// Convert EOL to \r
    #[arg(long, visible_alias = "osx", overrides_with_all = ["msdos", "unix"])]
    mac: bool,

    /// Convert EOL to \n
    #[arg(long, visible_aliases = ["posix", "linux"], overrides_with_all = ["msdos", "mac"])]
    unix: bool,
}

impl Args {
    fn eol(&self) -> Eol {
        if self.unix {
            Eol::Unix
        } else if self.mac {
            Eol::Mac
        } else {
            Eol::Msdos
        }
    }
}

/// Tokens starting with `--`, and `-h`, are options. Everything else is a
/// file name, including `-` and names such as `-notes.txt`.
fn is_option(arg: &OsStr) -> bool {
    let bytes = arg.as_encoded_bytes();
    bytes.starts_with(b"--") || bytes == b"-h"
}

fn partition_args<I>(args: I) -> (Vec<OsString>, Vec<PathBuf>)
where
    I: IntoIterator<Item = OsString>,
{
    let mut options = Vec::new();
    let mut files = Vec::new();
    for arg in args {
        if is_option(&arg) {
            options.push(arg);
        } else {
            files.push(PathBuf::from(arg));
        }
    }
    (options, files)
}

/// The first option token that is neither help nor a conversion flag spelled
/// exactly, such as `--`, `--unix=yes` or `--frobnicate`. Scanning stops at
/// help, which wins over anything after it.
fn first_unrecognized_option(options: &[OsString]) -> Option<&OsStr> {
    for option in options {
        if option == "-h" || option == "--help" {
            return None;
        }
        let is_conversion_flag = option
            .to_str()
            .and_then(|token| token.strip_prefix("--"))
            .is_some_and(|name| name.parse::<Eol>().is_ok());
        if !is_conversion_flag {
            return Some(option.as_os_str());
        }
    }
    None
}

fn unrecognized_option(option: &OsStr) -> ExitCode {
    eprintln!("eol2eol: unrecognized option `{}'", option.to_string_lossy());
    eprintln!("Try `eol2eol --help' for more information");
    ExitCode::from(EXIT_USAGE)
}

fn usage_error(err: &clap::Error) -> ExitCode {
    // help goes to stdout, anything else to stderr
    if let Err(io_err) = err.print() {
        log::warn!("failed to print usage: {io_err}");
    }
    ExitCode::from(EXIT_USAGE)
}

fn run(config: Config) -> anyhow::Result<u8> {
    let mut out = BufWriter::new(io::stdout().lock());
    let mut diag = io::stderr().lock();
    let summary = Driver::new(config)
        .run(&mut out, &mut diag)
        .context("conversion failed")?;
    out.flush().context("failed to flush standard output")?;
    Ok(summary.exit_code())
}

fn main() -> ExitCode {
    let _ = env_logger::Builder::from_env(Env::default().default_filter_or("warn")).try_init();

    let mut raw = std::env::args_os();
    let bin_name = raw.next().unwrap_or_else(|| OsString::from("eol2eol"));
    let (options, files) = partition_args(raw);
    if let Some(option) = first_unrecognized_option(&options) {
        return unrecognized_option(option);
    }

    let args = match Args::try_parse_from(std::iter::once(bin_name).chain(options)) {
        Ok(args) => args,
        Err(err) => return usage_error(&err),
    };
    log::debug!("eol={} files={}", args.eol(), files.len());

    match run(Config::new(args.eol(), files)) {
        Ok(code) => ExitCode::from(code),
        Err(err) => {
            eprintln!("eol2eol: {err:#}");
            ExitCode::from(EXIT_IO)
        }
    }
}
