use std::error::Error as StdError;
use std::fmt;

mod json;
mod rect;
mod selector;

pub use json::{from_text, to_text};
pub use rect::Rect;
pub use selector::{Fragment, Selector};

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    OrderViolation {
        appended: Fragment,
        present: Fragment,
    },
    DuplicateSingleton {
        fragment: Fragment,
    },
    Json(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OrderViolation { appended, present } => write!(
                f,
                "order violation: {appended} cannot be appended after {present}"
            ),
            Self::DuplicateSingleton { fragment } => {
                write!(f, "duplicate {fragment}: at most one occurrence allowed")
            }
            Self::Json(msg) => write!(f, "json error: {msg}"),
        }
    }
}

impl StdError for Error {}
