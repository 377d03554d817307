//! Image payload conversion between files and the data URIs the gateway
//! speaks.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;

/// Read an image file and encode it as a `data:` URI, inferring the mime
/// type from the file extension
pub fn file_to_data_uri(path: &Path) -> Result<String> {
    let bytes =
        fs::read(path).with_context(|| format!("Failed to read image: {}", path.display()))?;
    let mime = mime_for_extension(path);
    Ok(format!("data:{};base64,{}", mime, STANDARD.encode(bytes)))
}

/// Decode the base64 payload of an image data URI back to raw bytes
pub fn data_uri_to_bytes(uri: &str) -> Result<Vec<u8>> {
    let Some(rest) = uri.strip_prefix("data:") else {
        bail!("not a data URI");
    };
    let Some((_mime, payload)) = rest.split_once(";base64,") else {
        bail!("data URI is not base64-encoded");
    };
    STANDARD.decode(payload).context("Failed to decode image payload")
}

fn mime_for_extension(path: &Path) -> &'static str {
    match path.extension().and_then(|e| e.to_str()) {
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("webp") => "image/webp",
        Some("gif") => "image/gif",
        _ => "image/png",
    }
}
