//! Image handling components

pub mod photo_upload;

pub use photo_upload::PhotoUpload;
