use thiserror::Error;

use crate::stars::raw_reader::ParseRecordError;

/// Fatal error taxonomy of the reduction pipeline.
///
/// Lines that do not match the record grammar are **not** errors (they are silently
/// skipped by the reader), and derived values that cannot be computed are represented
/// by [`PhotValue::Undefined`](crate::photometry::PhotValue) rather than surfaced here.
#[derive(Error, Debug)]
pub enum PhotfitError {
    #[error("Raw file not found at: {0}")]
    RawFileNotFound(String),

    #[error("Invalid file format, missing data: {0}")]
    InvalidFormatMissingData(String),

    #[error("Unable to perform file operation: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Error during the raw record parsing: {0}")]
    ParsingRawRecordError(ParseRecordError),

    #[error("Invalid reduction parameter: {0}")]
    InvalidReductionParams(String),
}

impl From<ParseRecordError> for PhotfitError {
    fn from(err: ParseRecordError) -> Self {
        PhotfitError::ParsingRawRecordError(err)
    }
}

impl PartialEq for PhotfitError {
    fn eq(&self, other: &Self) -> bool {
        use PhotfitError::*;
        match (self, other) {
            (RawFileNotFound(a), RawFileNotFound(b)) => a == b,
            (InvalidFormatMissingData(a), InvalidFormatMissingData(b)) => a == b,
            // Not comparable: equal if same variant
            (IoError(_), IoError(_)) => true,
            (ParsingRawRecordError(a), ParsingRawRecordError(b)) => a == b,
            (InvalidReductionParams(a), InvalidReductionParams(b)) => a == b,
            _ => false,
        }
    }
}
