use crowdfund_types::TypeError;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DecodeError {
    #[error("unexpected end of buffer reading {field}: need {needed} bytes, {remaining} left")]
    UnexpectedEnd {
        field: &'static str,
        needed: usize,
        remaining: usize,
    },

    #[error("declared length of {field} is {declared} bytes but only {remaining} remain")]
    LengthOverflow {
        field: &'static str,
        declared: usize,
        remaining: usize,
    },

    #[error("{field} is not valid UTF-8")]
    InvalidUtf8 { field: &'static str },

    #[error("{field} holds {value}, expected 0 or 1")]
    InvalidBool { field: &'static str, value: u8 },

    #[error("unknown category index: {0}")]
    UnknownCategory(u8),

    #[error("{0} trailing bytes after record")]
    TrailingBytes(usize),

    #[error("decoded record is invalid: {0}")]
    InvalidRecord(#[from] TypeError),
}

pub type DecodeResult<T> = Result<T, DecodeError>;
