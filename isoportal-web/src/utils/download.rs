use axum::{
    http::{header, HeaderValue},
    response::{IntoResponse, Response},
};

/// Serve `bytes` as a file attachment.
///
/// Non-ASCII characters in the filename are replaced so the header stays valid.
pub fn file_download(bytes: Vec<u8>, content_type: &'static str, filename: &str) -> Response {
    let safe_name: String = filename
        .chars()
        .map(|c| if c.is_ascii_graphic() && c != '"' { c } else { '_' })
        .collect();
    let disposition = HeaderValue::from_str(&format!("attachment; filename=\"{}\"", safe_name))
        .unwrap_or_else(|_| HeaderValue::from_static("attachment"));

    (
        [
            (header::CONTENT_TYPE, HeaderValue::from_static(content_type)),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        bytes,
    )
        .into_response()
}
