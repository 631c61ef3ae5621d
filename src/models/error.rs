use crate::models::Side;
use crate::types::SlotIndex;
use std::fmt;

#[derive(Debug)]
pub enum Error {
    /// Every candidate slot of the probe sequence on `side` was occupied. `placed` is the
    /// symbol-side slot that had already been written when the name side turned out to be full.
    TableFull {
        side: Side,
        placed: Option<SlotIndex>,
    },
    NotFound(String),
    InvalidArgument(String),
    ParserError(String),
    IoError(std::io::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::TableFull {
                side,
                placed: Some(index),
            } => write!(
                f,
                "Hash table is full: no free slot in {}_table (already placed at symbol_table index {})",
                side, index
            ),
            Error::TableFull { side, placed: None } => {
                write!(f, "Hash table is full: no free slot in {}_table", side)
            }
            Error::NotFound(key) => write!(f, "Not Found: {}", key),
            Error::InvalidArgument(msg) => write!(f, "Invalid Argument: {}", msg),
            Error::ParserError(msg) => write!(f, "Parser Error: {}", msg),
            Error::IoError(err) => write!(f, "IO Error: {}", err),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::IoError(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Error {
        Error::IoError(err)
    }
}

impl From<csv::Error> for Error {
    fn from(err: csv::Error) -> Error {
        Error::ParserError(format!("Failed to read CSV record: {}", err))
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Error {
        if err.is_io() {
            Error::IoError(err.into())
        } else {
            Error::ParserError(format!("Failed to parse table document: {}", err))
        }
    }
}
