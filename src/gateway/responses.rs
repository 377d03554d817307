//! Response parsers for `generateContent` bodies.
//!
//! Parsers only inspect the first candidate, matching how the upstream
//! service is called (no candidate count is requested).

use anyhow::{Result, bail};
use serde_json::Value;

use crate::models::{ResearchFindings, SourceLink};

/// Concatenated text parts of the first candidate
pub fn extract_text(body: &Value) -> Result<String> {
    let text: String = candidate_parts(body)
        .iter()
        .filter_map(|part| part["text"].as_str())
        .collect();
    if text.is_empty() {
        bail!("response contained no text");
    }
    Ok(text)
}

/// First inline image of the first candidate, as a data URI.
///
/// When the model answers with text instead of an image (a refusal or a
/// clarification request), that text becomes the error message.
pub fn extract_image(body: &Value) -> Result<String> {
    let parts = candidate_parts(body);

    for part in parts {
        if let Some(data) = part["inlineData"]["data"].as_str() {
            return Ok(format!("data:image/png;base64,{data}"));
        }
    }

    if let Some(text) = parts.iter().find_map(|part| part["text"].as_str()) {
        bail!("{text}");
    }
    bail!("no image was returned");
}

/// Report text plus grounding sources from a search-grounded response.
/// A response with no text degrades to a fixed notice rather than an
/// error, since grounded queries can legitimately come back empty.
pub fn extract_findings(body: &Value) -> ResearchFindings {
    let text = extract_text(body).unwrap_or_else(|_| "No results found.".to_string());

    let sources = body["candidates"][0]["groundingMetadata"]["groundingChunks"]
        .as_array()
        .map(|chunks| {
            chunks
                .iter()
                .filter_map(|chunk| {
                    let uri = chunk["web"]["uri"].as_str()?;
                    let title = chunk["web"]["title"].as_str().unwrap_or(uri);
                    Some(SourceLink { title: title.to_string(), uri: uri.to_string() })
                })
                .collect()
        })
        .unwrap_or_default();

    ResearchFindings { text, sources }
}

fn candidate_parts(body: &Value) -> &[Value] {
    body["candidates"][0]["content"]["parts"].as_array().map(Vec::as_slice).unwrap_or(&[])
}
