use std::{fmt::Display, path::PathBuf};

use thiserror::Error;

use crate::{lexer::tokens::Token, Position};

#[derive(Debug, Clone)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
    scanned: Vec<Token>,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
            scanned: Vec::new(),
        }
    }

    pub fn with_scanned(self, scanned: Vec<Token>) -> Self {
        Error { scanned, ..self }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_kind(&self) -> &ErrorImpl {
        &self.internal_error
    }

    /// Tokens recognised on the line before the failure.
    pub fn get_scanned(&self) -> &[Token] {
        &self.scanned
    }

    pub fn into_scanned(self) -> Vec<Token> {
        self.scanned
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnrecognisedCharacter { .. } => "UnrecognisedCharacter",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnrecognisedCharacter { character: ':' } => {
                ErrorTip::Suggestion(String::from("`:` is only valid as part of `:=`"))
            }
            ErrorImpl::UnrecognisedCharacter { character } if character.is_whitespace() => {
                ErrorTip::Suggestion(format!(
                    "only spaces and tabs separate tokens, found {:?}",
                    character
                ))
            }
            ErrorImpl::UnrecognisedCharacter { .. } => ErrorTip::None,
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} at column {}", self.internal_error, self.position.0 + 1)
    }
}

impl std::error::Error for Error {}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErrorImpl {
    #[error("unrecognised character: {character:?}")]
    UnrecognisedCharacter { character: char },
}

#[derive(Error, Debug)]
pub enum DriverError {
    #[error("file not found: {}", path.display())]
    InputNotFound { path: PathBuf },
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

impl DriverError {
    pub fn exit_code(&self) -> i32 {
        match self {
            DriverError::InputNotFound { .. } => 2,
            DriverError::Io(_) => 1,
        }
    }
}
