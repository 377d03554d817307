//! Request payload builders, one per capability.
//!
//! Builders are pure: they produce the JSON body for a `generateContent`
//! call and perform no I/O, so they are unit-testable without a network.

use serde_json::{Value, json};

use super::config::STRATEGY_THINKING_BUDGET;
use crate::models::{AspectRatio, ChatTurn, ResearchMode};

pub const ASSISTANT_SYSTEM_PROMPT: &str = "You are the assistant for GlamStride, a platform \
    for building fashion e-commerce stores. Answer in a professional, friendly tone and use \
    Markdown formatting (headings, lists) where it clarifies the answer.";

/// Image generation: text prompt plus aspect-ratio config
pub fn image_request(prompt: &str, aspect_ratio: AspectRatio) -> Value {
    json!({
        "contents": [{ "parts": [{ "text": prompt }] }],
        "generationConfig": {
            "imageConfig": { "aspectRatio": aspect_ratio.as_str() }
        }
    })
}

/// Image editing: the source image as inline data, then the instruction
pub fn edit_request(image_data_uri: &str, instruction: &str) -> Value {
    let (mime_type, data) = split_data_uri(image_data_uri);
    json!({
        "contents": [{ "parts": [
            { "inlineData": { "mimeType": mime_type, "data": data } },
            { "text": instruction }
        ]}]
    })
}

/// Market research with search grounding enabled
pub fn research_request(query: &str, mode: ResearchMode) -> Value {
    json!({
        "contents": [{ "parts": [{ "text": research_prompt(query, mode) }] }],
        "tools": [{ "googleSearch": {} }]
    })
}

/// Long-form strategy draft with a thinking budget
pub fn strategy_request(brief: &str) -> Value {
    json!({
        "contents": [{ "parts": [{ "text": strategy_prompt(brief) }] }],
        "generationConfig": {
            "thinkingConfig": { "thinkingBudget": STRATEGY_THINKING_BUDGET }
        }
    })
}

/// Three short marketing lines for a topic
pub fn copy_request(topic: &str) -> Value {
    let prompt = format!(
        "Write 3 short, catchy marketing taglines for: {topic}. Make them punchy and memorable."
    );
    json!({
        "contents": [{ "parts": [{ "text": prompt }] }]
    })
}

/// Assistant chat: system instruction plus the full turn history and the
/// new user message
pub fn chat_request(turns: &[ChatTurn], message: &str) -> Value {
    let mut contents: Vec<Value> = turns
        .iter()
        .map(|turn| {
            json!({
                "role": turn.role.as_str(),
                "parts": [{ "text": turn.text }]
            })
        })
        .collect();
    contents.push(json!({ "role": "user", "parts": [{ "text": message }] }));

    json!({
        "systemInstruction": { "parts": [{ "text": ASSISTANT_SYSTEM_PROMPT }] },
        "contents": contents
    })
}

/// Split a `data:image/...;base64,` URI into (mime type, raw base64).
/// Anything that doesn't match the image data-URI shape falls back to
/// `image/png` with the input passed through as the payload.
pub fn split_data_uri(uri: &str) -> (String, String) {
    if let Some(rest) = uri.strip_prefix("data:") {
        if let Some((mime, data)) = rest.split_once(";base64,") {
            if mime.starts_with("image/") {
                return (mime.to_string(), data.to_string());
            }
        }
    }
    ("image/png".to_string(), uri.to_string())
}

fn research_prompt(query: &str, mode: ResearchMode) -> String {
    match mode {
        ResearchMode::Product => format!(
            "As a professional product researcher, run a thorough analysis of the product or \
             brand: \"{query}\".\n\n\
             Structure the report in Markdown (headings, bullet lists) with these sections:\n\
             1. **Product overview**: what it is and where it sits in the market.\n\
             2. **Key specifications and features**: functional and technical detail.\n\
             3. **Pricing analysis**: the price range and value comparison.\n\
             4. **Competitor analysis**: the closest rivals and how this product holds up.\n\
             5. **Customer sentiment**: a summary of positive and negative reviews.\n\
             6. **Verdict**: is it worth buying or stocking?"
        ),
        ResearchMode::Trend => format!(
            "As a senior market analyst, prepare a professional report on market trends for: \
             \"{query}\".\n\n\
             Structure the report in Markdown with these sections:\n\
             1. **Executive summary**: the current state of the market at a glance.\n\
             2. **Emerging trends**: a detailed list of patterns gaining traction.\n\
             3. **Consumer behavior**: what customers currently prefer and why.\n\
             4. **Commercial opportunities**: market gaps worth pursuing.\n\
             5. **Strategic recommendations**: practical steps for brands in this market."
        ),
    }
}

fn strategy_prompt(brief: &str) -> String {
    format!(
        "Act as a chief strategy officer and expert business consultant. Develop a \
         comprehensive, highly detailed business strategy for the following request: \
         \"{brief}\".\n\n\
         Format the response clearly in Markdown (headings, subheadings, lists, bold).\n\n\
         Cover these aspects:\n\
         1. **Executive summary**: vision, mission and top-level goals.\n\
         2. **Market and opportunity analysis**: market size, target audience, customer pain \
         points.\n\
         3. **Strategic pillars**: 3-5 key strategic goals to focus on.\n\
         4. **Operational plan**: concrete executable steps.\n\
         5. **Competitive advantage**: what will make this business unique.\n\
         6. **Outlook and risks**: likely challenges and how to mitigate them."
    )
}
