use std::error::Error;

use rusoto_core::RusotoError;
use rusoto_dynamodb::{DeleteItemError, GetItemError, PutItemError, ScanError, UpdateItemError};
use std::fmt;
use std::fmt::{Display, Formatter};

#[derive(Debug, PartialEq)]
pub enum TableApiError {
    InvalidRequest(String),
    UnrecognizedOperation(String),
    MissingTableName(String),
    InvalidPayload(String),
    InvalidAttribute(String),
    PutError(RusotoError<PutItemError>),
    GetError(RusotoError<GetItemError>),
    UpdateError(RusotoError<UpdateItemError>),
    DeleteError(RusotoError<DeleteItemError>),
    ScanError(RusotoError<ScanError>),
}

impl Display for TableApiError {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match *self {
            TableApiError::InvalidRequest(ref message) => {
                write!(f, "invalid request envelope: {}", message)
            }
            TableApiError::UnrecognizedOperation(ref operation) => {
                write!(f, "unrecognized operation: {}", operation)
            }
            TableApiError::MissingTableName(ref operation) => {
                write!(f, "tableName is required for operation: {}", operation)
            }
            TableApiError::InvalidPayload(ref message) => {
                write!(f, "invalid payload: {}", message)
            }
            TableApiError::InvalidAttribute(ref message) => {
                write!(f, "invalid attribute value: {}", message)
            }
            TableApiError::PutError(ref error) => std::fmt::Display::fmt(error, f),
            TableApiError::GetError(ref error) => std::fmt::Display::fmt(error, f),
            TableApiError::UpdateError(ref error) => std::fmt::Display::fmt(error, f),
            TableApiError::DeleteError(ref error) => std::fmt::Display::fmt(error, f),
            TableApiError::ScanError(ref error) => std::fmt::Display::fmt(error, f),
        }
    }
}

impl Error for TableApiError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match *self {
            TableApiError::PutError(ref error) => Some(error),
            TableApiError::GetError(ref error) => Some(error),
            TableApiError::UpdateError(ref error) => Some(error),
            TableApiError::DeleteError(ref error) => Some(error),
            TableApiError::ScanError(ref error) => Some(error),
            _ => None,
        }
    }
}

impl From<RusotoError<PutItemError>> for TableApiError {
    fn from(e: RusotoError<PutItemError>) -> TableApiError {
        TableApiError::PutError(e)
    }
}

impl From<RusotoError<GetItemError>> for TableApiError {
    fn from(e: RusotoError<GetItemError>) -> TableApiError {
        TableApiError::GetError(e)
    }
}

impl From<RusotoError<UpdateItemError>> for TableApiError {
    fn from(e: RusotoError<UpdateItemError>) -> TableApiError {
        TableApiError::UpdateError(e)
    }
}

impl From<RusotoError<DeleteItemError>> for TableApiError {
    fn from(e: RusotoError<DeleteItemError>) -> TableApiError {
        TableApiError::DeleteError(e)
    }
}

impl From<RusotoError<ScanError>> for TableApiError {
    fn from(e: RusotoError<ScanError>) -> TableApiError {
        TableApiError::ScanError(e)
    }
}
