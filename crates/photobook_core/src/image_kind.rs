//! Image acceptance rules and MIME resolution.

/// Content types accepted for upload.
const IMAGE_CONTENT_TYPES: &[&str] = &[
    "image/jpg",
    "image/jpeg",
    "image/pjpeg",
    "image/gif",
    "image/x-png",
    "image/png",
];

/// Filename extensions accepted for upload.
const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif"];

/// Lower-cased extension of a filename, without the dot.
pub fn extension_of(file_name: &str) -> Option<String> {
    std::path::Path::new(file_name)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_lowercase())
}

/// Whether the declared content type and the filename extension both
/// identify an accepted image format.
///
/// Both checks are required: a `text/plain` upload named `cat.jpg` fails,
/// and so does an `image/png` upload named `notes.txt`.
///
/// # Examples
///
/// ```
/// use photobook_core::is_image;
///
/// assert!(is_image("image/png", "diagram.PNG"));
/// assert!(!is_image("text/plain", "diagram.png"));
/// assert!(!is_image("image/png", "diagram.txt"));
/// ```
pub fn is_image(content_type: &str, file_name: &str) -> bool {
    let content_type = content_type.to_lowercase();
    if !IMAGE_CONTENT_TYPES.contains(&content_type.as_str()) {
        return false;
    }
    match extension_of(file_name) {
        Some(ext) => IMAGE_EXTENSIONS.contains(&ext.as_str()),
        None => false,
    }
}

/// Resolve the MIME type for a filename from the static extension table,
/// falling back to `application/octet-stream`.
pub fn mime_for_filename(file_name: &str) -> String {
    mime_guess::from_path(file_name)
        .first_raw()
        .unwrap_or("application/octet-stream")
        .to_string()
}
