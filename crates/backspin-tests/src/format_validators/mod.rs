//! Binary format validators for test infrastructure.
//!
//! Parses file headers independently of the encoder so tests can check that
//! written files are correctly formatted.

use thiserror::Error;

mod wav;

pub use wav::{validate_wav, WavInfo};

/// Why a file failed validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    /// Fewer bytes than the smallest valid file.
    #[error("{format}: file too short ({len} bytes, need {min})")]
    TooShort {
        format: &'static str,
        len: usize,
        min: usize,
    },

    /// A structural problem at a known byte offset.
    #[error("{format}: {message} at byte {offset}")]
    Malformed {
        format: &'static str,
        message: String,
        offset: usize,
    },

    /// A required chunk never appeared.
    #[error("{format}: missing {chunk} chunk")]
    MissingChunk {
        format: &'static str,
        chunk: &'static str,
    },

    /// Header fields that disagree with each other.
    #[error("{format}: {message}")]
    Inconsistent {
        format: &'static str,
        message: String,
    },
}

impl FormatError {
    /// The format that was being validated.
    pub fn format(&self) -> &'static str {
        match self {
            FormatError::TooShort { format, .. }
            | FormatError::Malformed { format, .. }
            | FormatError::MissingChunk { format, .. }
            | FormatError::Inconsistent { format, .. } => format,
        }
    }

    /// Byte offset of the problem, when there is one.
    pub fn offset(&self) -> Option<usize> {
        match self {
            FormatError::Malformed { offset, .. } => Some(*offset),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_error_display() {
        let err = FormatError::Malformed {
            format: "WAV",
            message: "bad tag".to_string(),
            offset: 12,
        };
        assert_eq!(err.to_string(), "WAV: bad tag at byte 12");
        assert_eq!(err.offset(), Some(12));

        let err = FormatError::MissingChunk {
            format: "WAV",
            chunk: "data",
        };
        assert_eq!(err.to_string(), "WAV: missing data chunk");
        assert_eq!(err.format(), "WAV");
        assert_eq!(err.offset(), None);
    }
}
