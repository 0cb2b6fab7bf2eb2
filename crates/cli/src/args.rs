use std::{
    ffi::{OsStr, OsString},
    path::PathBuf,
};

use clap::Parser;

/// Printed after the raw argument list when the arguments are wrong.
pub const USAGE: &str = "Args: [text file with data]";

/// Command-line arguments: exactly one data file.
#[derive(Debug, Parser)]
#[command(name = "linehist", disable_help_flag = true, disable_version_flag = true)]
pub struct Cli {
    /// Text file of whitespace-separated numbers.
    pub data: PathBuf,
}

impl Cli {
    /// Parses the full argument list, program name included.
    ///
    /// Returns `None` unless exactly one argument follows the program name.
    /// That argument is always taken as the path, even if it looks like a
    /// flag or is `--`.
    pub fn from_args(args: &[OsString]) -> Option<Self> {
        let [program, data] = args else {
            return None;
        };
        let end_of_options = OsStr::new("--");
        Self::try_parse_from([program.as_os_str(), end_of_options, data.as_os_str()]).ok()
    }
}

/// Formats the raw argument list and usage line shown for wrong arguments.
pub fn usage(args: &[OsString]) -> String {
    let args: Vec<_> = args.iter().map(|arg| arg.to_string_lossy()).collect();
    format!("{args:?}\n{USAGE}")
}
