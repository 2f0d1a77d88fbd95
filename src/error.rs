use std::fmt::{Display, Formatter};

pub type Error = anyhow::Error;
pub type Result<T> = std::result::Result<T, Error>;

/// The area of the program in which a public-facing error originated. Command handlers tag their
/// errors with one of these so that the message printed to the user says what kind of thing went
/// wrong before the detailed context chain.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum ErrorType {
    /// The home directory or `config.json` could not be created or loaded.
    Config,
    /// The ledger data file could not be written.
    Storage,
    /// The user's input could not be turned into a valid expense.
    Request,
    /// The CSV export could not be produced or written.
    Export,
}

impl Display for ErrorType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            ErrorType::Config => "configuration error",
            ErrorType::Storage => "storage error",
            ErrorType::Request => "invalid request",
            ErrorType::Export => "export error",
        };
        f.write_str(s)
    }
}

/// Tags an internal `Result` with an `ErrorType` before it leaves a command handler.
pub trait IntoResult<T> {
    fn pub_result(self, error_type: ErrorType) -> Result<T>;
}

impl<T, E> IntoResult<T> for std::result::Result<T, E>
where
    E: Into<Error>,
{
    fn pub_result(self, error_type: ErrorType) -> Result<T> {
        self.map_err(|e| e.into().context(error_type.to_string()))
    }
}
