//! Error taxonomy for the wonkify engine.
//!
//! Decode and encode failures are fatal and non-retryable (a corrupt input
//! file or a full disk will not improve on a second attempt). Parameter
//! errors only arise from preset JSON, never from the transform itself.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum WonkifyError {
    #[error("failed to decode {path}: {source}")]
    Decode {
        path: String,
        #[source]
        source: hound::Error,
    },

    #[error("failed to encode {path}: {source}")]
    Encode {
        path: String,
        #[source]
        source: hound::Error,
    },

    #[error("invalid parameters: {0}")]
    Params(String),
}
