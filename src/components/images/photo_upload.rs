//! Photo Upload Component
//!
//! File input with size/type checks and client-side compression.

use std::sync::Arc;

use dioxus::html::FileEngine;
use dioxus::prelude::*;
use dioxus::web::WebFileEngineExt;
use tripmate_core::{
    check_upload, compress_to_data_url, upload_mime, upload_size, ClientError, ClientResult,
};

/// Profile photo picker with live preview.
///
/// Accepted photos are shrunk to fit 800px and re-encoded as JPEG before
/// `on_photo` is called with the resulting data URL. Rejected files raise
/// an alert and reset the input; any previously accepted photo stays.
///
/// # Examples
///
/// ```rust,ignore
/// rsx! {
///     PhotoUpload {
///         preview: controller.read().photo().map(str::to_string),
///         on_photo: move |data_url| controller.write().set_photo(data_url),
///     }
/// }
/// ```
#[component]
pub fn PhotoUpload(
    /// Data URL of the accepted photo, if any
    preview: Option<String>,
    /// Callback with the compressed photo's data URL
    on_photo: EventHandler<String>,
) -> Element {
    let mut processing = use_signal(|| false);
    // Bumping the key re-creates the input, which clears its selection
    let mut input_key = use_signal(|| 0u32);

    let handle_change = move |evt: FormEvent| {
        let Some(files) = evt.files() else {
            return;
        };
        let Some(name) = files.files().into_iter().next() else {
            return;
        };

        processing.set(true);
        spawn(async move {
            let result = load_photo(files, &name).await;
            processing.set(false);

            match result {
                Ok(data_url) => {
                    tracing::info!(file = %name, "Profile photo accepted");
                    on_photo.call(data_url);
                }
                Err(e) => {
                    tracing::warn!(file = %name, "Profile photo rejected: {}", e);
                    gloo::dialogs::alert(&e.to_string());
                    input_key += 1;
                }
            }
        });
    };

    rsx! {
        div { class: "profile-pic",
            if let Some(src) = preview {
                img { id: "profilePhotoPreview", class: "profile-pic-preview", src: "{src}", alt: "Profile photo" }
            } else {
                span { class: "profile-pic-placeholder", "Add a photo" }
            }
            label { class: "profile-pic-button",
                if processing() { "Processing..." } else { "Choose photo" }
                input {
                    key: "{input_key}",
                    r#type: "file",
                    accept: "image/*",
                    multiple: false,
                    disabled: processing(),
                    onchange: handle_change,
                }
            }
        }
    }
}

/// Check, read and compress one selected file.
async fn load_photo(files: Arc<dyn FileEngine>, name: &str) -> ClientResult<String> {
    let size = upload_size(files.file_size(name).await)?;
    let browser_type = files.get_web_file(name).await.map(|file| file.type_());
    check_upload(size, &upload_mime(browser_type, name))?;

    let bytes = files
        .read_file(name)
        .await
        .ok_or(ClientError::FileUnreadable)?;

    compress_to_data_url(&bytes)
}
