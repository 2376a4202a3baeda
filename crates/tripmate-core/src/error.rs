//! Error types for the Tripmate client
//!
//! The `Display` text of each variant is what the user sees in the alert,
//! so keep the wording stable.

use thiserror::Error;

/// Main error type for client operations
#[derive(Error, Debug)]
pub enum ClientError {
    /// Save was pressed with nothing selected
    #[error("Please select at least one interest.")]
    NoInterestsSelected,

    /// Chosen photo exceeds the upload limit
    #[error("File size too large. Please choose an image under 5MB.")]
    PhotoTooLarge { size: u64 },

    /// Chosen file does not declare an image type
    #[error("Please select an image file.")]
    NotAnImage { mime: String },

    /// Selected file's size or contents could not be read
    #[error("Could not read the selected file. Please choose another file.")]
    FileUnreadable,

    /// Bytes could not be decoded as an image
    #[error("Could not read that image. Please choose another file.")]
    ImageDecode(#[source] image::ImageError),

    /// Resized image could not be re-encoded
    #[error("Could not compress that image. Please choose another file.")]
    ImageEncode(#[source] image::ImageError),

    /// Server answered with a non-success HTTP status
    #[error("Network response was not ok")]
    Http { status: u16 },

    /// Server answered but reported an application-level failure
    #[error("{message}")]
    Rejected { message: String },

    /// Request never completed (network failure, unreadable body)
    #[error("{0}")]
    Transport(String),

    /// Error during serialization/deserialization
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ClientError {
    /// Whether the error came from the user's own input rather than the network.
    pub fn is_user_input(&self) -> bool {
        matches!(
            self,
            ClientError::NoInterestsSelected
                | ClientError::PhotoTooLarge { .. }
                | ClientError::NotAnImage { .. }
                | ClientError::FileUnreadable
                | ClientError::ImageDecode(_)
                | ClientError::ImageEncode(_)
        )
    }
}

/// Result type alias using ClientError
pub type ClientResult<T> = Result<T, ClientError>;
