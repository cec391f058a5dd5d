//! Error types for the audio core.

use thiserror::Error;

/// Result type for audio operations.
pub type AudioResult<T> = Result<T, AudioError>;

/// Errors raised by the collaborators around the core.
///
/// Reversal and encoding never fail; everything here comes from decoding,
/// capture devices or I/O.
#[derive(Debug, Error)]
pub enum AudioError {
    /// The input could not be decoded.
    #[error("decode error: {message}")]
    Decode {
        /// Error message.
        message: String,
    },

    /// The container or codec is not recognized.
    #[error("unsupported audio format: {message}")]
    UnsupportedFormat {
        /// Error message.
        message: String,
    },

    /// The container holds no decodable audio track.
    #[error("no audio track found")]
    NoAudioTrack,

    /// The capture device refused access.
    #[error("permission denied for capture device '{device}'")]
    PermissionDenied {
        /// Device name.
        device: String,
    },

    /// The capture device failed mid-stream.
    #[error("capture error: {message}")]
    Capture {
        /// Error message.
        message: String,
    },

    /// Invalid parameter value.
    #[error("invalid parameter '{name}': {message}")]
    InvalidParameter {
        /// Parameter name.
        name: String,
        /// Error message.
        message: String,
    },

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl AudioError {
    /// Creates a decode error.
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }

    /// Creates an unsupported format error.
    pub fn unsupported(message: impl Into<String>) -> Self {
        Self::UnsupportedFormat {
            message: message.into(),
        }
    }

    /// Creates a capture error.
    pub fn capture(message: impl Into<String>) -> Self {
        Self::Capture {
            message: message.into(),
        }
    }

    /// Creates an invalid parameter error.
    pub fn invalid_param(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name: name.into(),
            message: message.into(),
        }
    }

    /// Stable error code for machine-readable output.
    pub fn code(&self) -> &'static str {
        match self {
            AudioError::Decode { .. } => "AUDIO_001",
            AudioError::UnsupportedFormat { .. } => "AUDIO_002",
            AudioError::NoAudioTrack => "AUDIO_003",
            AudioError::PermissionDenied { .. } => "AUDIO_004",
            AudioError::Capture { .. } => "AUDIO_005",
            AudioError::InvalidParameter { .. } => "AUDIO_006",
            AudioError::Io(_) => "AUDIO_007",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_param_helper() {
        let err = AudioError::invalid_param("channels", "must be at least 1");
        assert!(err.to_string().contains("channels"));
        assert!(err.to_string().contains("at least 1"));
    }

    #[test]
    fn test_permission_denied_message() {
        let err = AudioError::PermissionDenied {
            device: "default".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "permission denied for capture device 'default'"
        );
        assert_eq!(err.code(), "AUDIO_004");
    }

    #[test]
    fn test_io_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: AudioError = io.into();
        assert_eq!(err.code(), "AUDIO_007");
    }
}
