//! Profile photo checks and compression.
//!
//! Photos are shrunk so the longer side is at most [`MAX_PHOTO_DIMENSION`]
//! pixels and re-encoded as JPEG, then carried around as a data URL for both
//! the live preview and the profile payload.

use base64::Engine;
use image::codecs::jpeg::JpegEncoder;
use image::imageops::FilterType;
use image::GenericImageView;

use crate::error::{ClientError, ClientResult};

/// Largest accepted upload (5 MB)
pub const MAX_PHOTO_BYTES: u64 = 5 * 1024 * 1024;

/// Neither side of the compressed photo exceeds this many pixels
pub const MAX_PHOTO_DIMENSION: u32 = 800;

/// JPEG quality for the compressed photo (0.8 on the canvas scale)
pub const JPEG_QUALITY: u8 = 80;

/// MIME type a browser would declare for a file of this name.
pub fn declared_mime(file_name: &str) -> &'static str {
    let ext = file_name
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .unwrap_or_default();
    match ext.as_str() {
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "bmp" => "image/bmp",
        "svg" => "image/svg+xml",
        "txt" => "text/plain",
        "pdf" => "application/pdf",
        _ => "application/octet-stream",
    }
}

/// Type to check an upload against.
///
/// The browser-declared type wins whenever the platform reports one, even
/// an empty one; the file-name guess is only used where no browser file
/// object exists.
pub fn upload_mime(browser_type: Option<String>, file_name: &str) -> String {
    browser_type.unwrap_or_else(|| declared_mime(file_name).to_string())
}

/// Size of the selected file; an unknown size is an unreadable file.
pub fn upload_size(size: Option<u64>) -> ClientResult<u64> {
    size.ok_or(ClientError::FileUnreadable)
}

/// Reject oversized files first, then files that do not declare an image type.
pub fn check_upload(size: u64, mime: &str) -> ClientResult<()> {
    if size > MAX_PHOTO_BYTES {
        return Err(ClientError::PhotoTooLarge { size });
    }
    if !mime.starts_with("image/") {
        return Err(ClientError::NotAnImage {
            mime: mime.to_string(),
        });
    }
    Ok(())
}

/// Target dimensions that fit within `max` on both sides.
///
/// The larger side is clamped to `max` and the other scaled by the same
/// factor (truncated, never below one pixel). Images already within bounds
/// are returned unchanged.
pub fn fit_within(width: u32, height: u32, max: u32) -> (u32, u32) {
    let scale = |side: u32, num: u32, den: u32| -> u32 {
        ((side as u64 * num as u64) / den as u64).max(1) as u32
    };

    if width > height && width > max {
        (max, scale(height, max, width))
    } else if height > max {
        (scale(width, max, height), max)
    } else {
        (width, height)
    }
}

/// Decode, shrink and re-encode a photo as a `data:image/jpeg;base64,` URL.
pub fn compress_to_data_url(bytes: &[u8]) -> ClientResult<String> {
    let img = image::load_from_memory(bytes).map_err(ClientError::ImageDecode)?;
    let (width, height) = img.dimensions();
    let (target_w, target_h) = fit_within(width, height, MAX_PHOTO_DIMENSION);

    let resized = if (target_w, target_h) == (width, height) {
        img
    } else {
        img.resize_exact(target_w, target_h, FilterType::Triangle)
    };

    // JPEG has no alpha channel
    let rgb = resized.to_rgb8();
    let mut buffer = Vec::new();
    JpegEncoder::new_with_quality(&mut buffer, JPEG_QUALITY)
        .encode_image(&rgb)
        .map_err(ClientError::ImageEncode)?;

    tracing::debug!(
        from = ?(width, height),
        to = ?(target_w, target_h),
        bytes = buffer.len(),
        "Compressed profile photo"
    );

    let encoded = base64::engine::general_purpose::STANDARD.encode(&buffer);
    Ok(format!("data:image/jpeg;base64,{}", encoded))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{DynamicImage, ImageFormat, RgbaImage};

    fn png_bytes(width: u32, height: u32) -> Vec<u8> {
        let img = DynamicImage::ImageRgba8(RgbaImage::from_pixel(
            width,
            height,
            image::Rgba([200, 120, 40, 128]),
        ));
        let mut buffer = Vec::new();
        img.write_to(&mut std::io::Cursor::new(&mut buffer), ImageFormat::Png)
            .unwrap();
        buffer
    }

    fn decode_data_url(url: &str) -> DynamicImage {
        let payload = url.strip_prefix("data:image/jpeg;base64,").unwrap();
        let bytes = base64::engine::general_purpose::STANDARD
            .decode(payload)
            .unwrap();
        image::load_from_memory_with_format(&bytes, ImageFormat::Jpeg).unwrap()
    }

    #[test]
    fn test_fit_landscape() {
        assert_eq!(fit_within(1600, 1200, 800), (800, 600));
    }

    #[test]
    fn test_fit_portrait() {
        assert_eq!(fit_within(1200, 2400, 800), (400, 800));
    }

    #[test]
    fn test_fit_square() {
        assert_eq!(fit_within(1000, 1000, 800), (800, 800));
    }

    #[test]
    fn test_fit_small_unchanged() {
        assert_eq!(fit_within(640, 480, 800), (640, 480));
        assert_eq!(fit_within(800, 800, 800), (800, 800));
    }

    #[test]
    fn test_fit_truncates_and_never_zero() {
        assert_eq!(fit_within(1000, 3, 800), (800, 2));
        assert_eq!(fit_within(5000, 1, 800), (800, 1));
        assert_eq!(fit_within(1, 5000, 800), (1, 800));
    }

    #[test]
    fn test_check_upload() {
        assert!(check_upload(1024, "image/png").is_ok());
        assert!(check_upload(MAX_PHOTO_BYTES, "image/jpeg").is_ok());
        assert!(matches!(
            check_upload(MAX_PHOTO_BYTES + 1, "image/png"),
            Err(ClientError::PhotoTooLarge { .. })
        ));
        assert!(matches!(
            check_upload(10, "application/pdf"),
            Err(ClientError::NotAnImage { .. })
        ));
    }

    #[test]
    fn test_size_checked_before_type() {
        let err = check_upload(MAX_PHOTO_BYTES * 2, "text/plain").unwrap_err();
        assert!(matches!(err, ClientError::PhotoTooLarge { .. }));
    }

    #[test]
    fn test_browser_type_wins_over_name() {
        let mime = upload_mime(Some("image/jpeg".to_string()), "IMG_20240614");
        assert_eq!(mime, "image/jpeg");
        assert!(check_upload(1024, &mime).is_ok());

        let mime = upload_mime(Some("text/plain".to_string()), "holiday.png");
        assert!(matches!(
            check_upload(1024, &mime),
            Err(ClientError::NotAnImage { .. })
        ));
    }

    #[test]
    fn test_empty_browser_type_rejected() {
        let mime = upload_mime(Some(String::new()), "photo.jpg");
        assert!(matches!(
            check_upload(1024, &mime),
            Err(ClientError::NotAnImage { .. })
        ));
    }

    #[test]
    fn test_name_guess_without_browser_file() {
        assert_eq!(upload_mime(None, "me.png"), "image/png");
        assert_eq!(upload_mime(None, "IMG_20240614"), "application/octet-stream");
    }

    #[test]
    fn test_unknown_size_is_unreadable() {
        assert_eq!(upload_size(Some(2048)).unwrap(), 2048);
        let err = upload_size(None).unwrap_err();
        assert!(matches!(err, ClientError::FileUnreadable));
        assert!(err.is_user_input());
    }

    #[test]
    fn test_declared_mime() {
        assert_eq!(declared_mime("me.JPG"), "image/jpeg");
        assert_eq!(declared_mime("holiday.webp"), "image/webp");
        assert_eq!(declared_mime("notes.txt"), "text/plain");
        assert_eq!(declared_mime("README"), "application/octet-stream");
    }

    #[test]
    fn test_compress_large_png() {
        let url = compress_to_data_url(&png_bytes(1600, 1200)).unwrap();
        let decoded = decode_data_url(&url);
        assert_eq!(decoded.dimensions(), (800, 600));
    }

    #[test]
    fn test_compress_small_png_keeps_size() {
        let url = compress_to_data_url(&png_bytes(120, 90)).unwrap();
        assert!(url.starts_with("data:image/jpeg;base64,"));
        assert_eq!(decode_data_url(&url).dimensions(), (120, 90));
    }

    #[test]
    fn test_compress_garbage_fails() {
        let err = compress_to_data_url(b"definitely not an image").unwrap_err();
        assert!(matches!(err, ClientError::ImageDecode(_)));
        assert!(err.is_user_input());
    }
}
