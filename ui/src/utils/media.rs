//! Helpers for logo files: MIME inference and blob object URLs.

use wasm_bindgen::JsValue;

/// Infer the MIME type of an image upload from its filename.
///
/// The file input only offers image files, so unknown extensions fall back to
/// `application/octet-stream` rather than failing the selection.
pub fn mime_for_filename(filename: &str) -> &'static str {
    let extension = filename
        .rsplit('.')
        .next()
        .unwrap_or_default()
        .to_ascii_lowercase();
    match extension.as_str() {
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "svg" => "image/svg+xml",
        "webp" => "image/webp",
        _ => "application/octet-stream",
    }
}

/// Build a `blob:` object URL for an in-memory file so it can be rendered in
/// an `img` element before upload.
///
/// The caller owns the URL and must hand it to [`revoke_preview_url`] once it
/// is no longer displayed.
pub fn create_preview_url(bytes: &[u8], mime: &str) -> Result<String, JsValue> {
    let array = js_sys::Uint8Array::from(bytes);
    let parts = js_sys::Array::of1(&array);
    let options = web_sys::BlobPropertyBag::new();
    options.set_type(mime);
    let blob = web_sys::Blob::new_with_u8_array_sequence_and_options(&parts, &options)?;
    web_sys::Url::create_object_url_with_blob(&blob)
}

/// Release an object URL created by [`create_preview_url`].
pub fn revoke_preview_url(url: &str) {
    if let Err(err) = web_sys::Url::revoke_object_url(url) {
        crate::console_warn!("Failed to revoke object URL: {:?}", err);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_image_extensions_map_to_mime_types() {
        assert_eq!(mime_for_filename("logo.png"), "image/png");
        assert_eq!(mime_for_filename("logo.JPG"), "image/jpeg");
        assert_eq!(mime_for_filename("logo.jpeg"), "image/jpeg");
        assert_eq!(mime_for_filename("crest.svg"), "image/svg+xml");
        assert_eq!(mime_for_filename("seal.webp"), "image/webp");
    }

    #[test]
    fn unknown_or_missing_extension_falls_back() {
        assert_eq!(mime_for_filename("logo.bmp"), "application/octet-stream");
        assert_eq!(mime_for_filename("logo"), "application/octet-stream");
    }

    #[test]
    fn only_the_last_extension_counts() {
        assert_eq!(mime_for_filename("logo.svg.png"), "image/png");
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use wasm_bindgen_test::{wasm_bindgen_test, wasm_bindgen_test_configure};

    use super::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn preview_url_can_be_created_and_revoked() {
        let url = create_preview_url(b"not really a png", "image/png").unwrap();
        assert!(url.starts_with("blob:"));
        revoke_preview_url(&url);
    }
}
