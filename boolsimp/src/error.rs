use boolsimp_error::Error;
use boolsimp_parser::parser::error::Error as ParseError;
use std::{fmt, io};

/// Utility enum to package the errors that can occur while simplifying one input.
#[derive(Debug)]
pub enum CliError {
    /// The input contained nothing but whitespace.
    Empty,

    /// The input is not a valid expression.
    Parse(Error),

    /// The input could not be read, or the output could not be written.
    Io(io::Error),
}

impl CliError {
    /// Report this error to stderr.
    ///
    /// Parse errors are rendered as a report pointing into `input`.
    pub fn report_to_stderr(&self, src_id: &str, input: &str) {
        let result = match self {
            Self::Parse(err) => err.report_to_stderr(src_id, input),
            Self::Empty | Self::Io(_) => {
                eprintln!("error: {}", self);
                Ok(())
            },
        };

        if let Err(err) = result {
            eprintln!("error: could not print the report: {}", err);
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "enter a Boolean expression to simplify"),
            Self::Parse(err) => write!(f, "{}", err),
            Self::Io(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for CliError {}

impl From<ParseError> for CliError {
    fn from(err: ParseError) -> Self {
        Self::Parse(err.into())
    }
}

impl From<io::Error> for CliError {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}
