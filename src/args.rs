//! These structs provide the CLI interface for the assistant.

use crate::model::Kind;
use clap::{Parser, Subcommand};
use std::convert::Infallible;
use std::fmt::{Display, Formatter};
use std::ops::Deref;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing_subscriber::filter::LevelFilter;

/// assistant: A personal assistant for notes, tasks, contacts and finances.
///
/// Each kind of record is kept in its own JSON file in the data directory. Run without a
/// subcommand to use the interactive menu, or use one of the subcommands below to do a single
/// thing and exit.
#[derive(Debug, Parser, Clone)]
pub struct Args {
    #[clap(flatten)]
    common: Common,

    #[command(subcommand)]
    command: Option<Command>,
}

impl Args {
    pub fn new(common: Common, command: Option<Command>) -> Self {
        Self { common, command }
    }

    pub fn common(&self) -> &Common {
        &self.common
    }

    /// The subcommand, `Command::Menu` when none was given.
    pub fn command(&self) -> Command {
        self.command.clone().unwrap_or(Command::Menu)
    }
}

#[derive(Subcommand, Debug, Clone, Eq, PartialEq)]
pub enum Command {
    /// Create the data directory and write a default config.json into it.
    ///
    /// This is optional: when there is no config.json the default file names are used.
    Init,
    /// Open the interactive menu. This is what happens when no subcommand is given.
    Menu,
    /// Print every record of one kind.
    List(KindArgs),
    /// Write every record of one kind to a CSV file.
    Export(FileArgs),
    /// Append every row of a CSV file to the records of one kind.
    Import(FileArgs),
    /// Summarize the transactions between two dates and save them to report_<start>_<end>.csv.
    Report(ReportArgs),
    /// Evaluate an arithmetic expression, e.g. `assistant calc "(2 + 3) * 4"`.
    Calc(CalcArgs),
}

/// Arguments common to all subcommands.
#[derive(Debug, Parser, Clone)]
pub struct Common {
    /// The logging verbosity. One of, from least to most verbose:
    /// off, error, warn, info, debug, trace
    ///
    /// This can be overridden by RUST_LOG. See the tracing-subscriber EnvFilter docs.
    #[arg(long, default_value_t = LevelFilter::INFO)]
    log_level: LevelFilter,

    /// The directory where the data files and config.json are held. Defaults to the current
    /// directory.
    #[arg(long, env = "ASSISTANT_HOME", default_value_t = DisplayPath::from(PathBuf::from(".")))]
    home: DisplayPath,
}

impl Common {
    pub fn new(log_level: LevelFilter, home: PathBuf) -> Self {
        Self {
            log_level,
            home: home.into(),
        }
    }

    pub fn log_level(&self) -> LevelFilter {
        self.log_level
    }

    pub fn home(&self) -> &DisplayPath {
        &self.home
    }
}

/// (Not shown): Args for the `assistant list` command.
#[derive(Debug, Parser, Clone, Eq, PartialEq)]
pub struct KindArgs {
    /// Which records: notes, tasks, contacts or finance.
    kind: Kind,
}

impl KindArgs {
    pub fn new(kind: Kind) -> Self {
        Self { kind }
    }

    pub fn kind(&self) -> Kind {
        self.kind
    }
}

/// (Not shown): Args for the `assistant export` and `assistant import` commands.
#[derive(Debug, Parser, Clone, Eq, PartialEq)]
pub struct FileArgs {
    /// Which records: notes, tasks, contacts or finance.
    kind: Kind,

    /// The CSV file. Relative paths are resolved against the data directory.
    file: PathBuf,
}

impl FileArgs {
    pub fn new(kind: Kind, file: impl Into<PathBuf>) -> Self {
        Self {
            kind,
            file: file.into(),
        }
    }

    pub fn kind(&self) -> Kind {
        self.kind
    }

    pub fn file(&self) -> &Path {
        &self.file
    }
}

/// (Not shown): Args for the `assistant report` command.
#[derive(Debug, Parser, Clone, Eq, PartialEq)]
pub struct ReportArgs {
    /// The first day of the report, DD-MM-YYYY.
    start: String,

    /// The last day of the report, DD-MM-YYYY. Transactions on this day are included.
    end: String,
}

impl ReportArgs {
    pub fn new(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
        }
    }

    pub fn start(&self) -> &str {
        &self.start
    }

    pub fn end(&self) -> &str {
        &self.end
    }
}

/// (Not shown): Args for the `assistant calc` command.
#[derive(Debug, Parser, Clone, Eq, PartialEq)]
pub struct CalcArgs {
    /// The expression. Numbers, + - * / and parentheses are allowed. Several words are joined
    /// with spaces, so quoting is optional.
    #[arg(required = true, trailing_var_arg = true, allow_hyphen_values = true)]
    expression: Vec<String>,
}

impl CalcArgs {
    pub fn new(expression: impl Into<String>) -> Self {
        Self {
            expression: vec![expression.into()],
        }
    }

    pub fn expression(&self) -> String {
        self.expression.join(" ")
    }
}

#[derive(Debug, Default, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct DisplayPath(PathBuf);

impl From<PathBuf> for DisplayPath {
    fn from(value: PathBuf) -> Self {
        DisplayPath(value)
    }
}

impl Deref for DisplayPath {
    type Target = Path;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AsRef<Path> for DisplayPath {
    fn as_ref(&self) -> &Path {
        &self.0
    }
}

impl Display for DisplayPath {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.to_string_lossy())
    }
}

impl FromStr for DisplayPath {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(PathBuf::from(s)))
    }
}

impl DisplayPath {
    pub fn path(&self) -> &Path {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("assistant").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_defaults_to_menu() {
        let args = parse(&["--home", "/tmp/data"]);
        assert_eq!(args.command(), Command::Menu);
        assert_eq!(args.common().home().path(), Path::new("/tmp/data"));
        assert_eq!(args.common().log_level(), LevelFilter::INFO);
    }

    #[test]
    fn test_export() {
        let args = parse(&["--log-level", "debug", "export", "tasks", "out.csv"]);
        assert_eq!(args.common().log_level(), LevelFilter::DEBUG);
        assert_eq!(
            args.command(),
            Command::Export(FileArgs::new(Kind::Tasks, "out.csv"))
        );
    }

    #[test]
    fn test_report() {
        let args = parse(&["report", "01-03-2024", "31-03-2024"]);
        match args.command() {
            Command::Report(r) => {
                assert_eq!(r.start(), "01-03-2024");
                assert_eq!(r.end(), "31-03-2024");
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_calc_joins_words() {
        let args = parse(&["calc", "-3", "+", "(2", "*", "4)"]);
        match args.command() {
            Command::Calc(c) => assert_eq!(c.expression(), "-3 + (2 * 4)"),
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_unknown_kind_is_rejected() {
        let res = Args::try_parse_from(["assistant", "list", "recipes"]);
        assert!(res.is_err());
    }
}
