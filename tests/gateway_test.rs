/// Offline gateway tests: request builders and response parsers cover the
/// full wire shapes without a network
use glamstride::gateway::{requests, responses};
use glamstride::models::{AspectRatio, ChatTurn, ResearchMode};
use serde_json::json;

#[test]
fn test_image_round_trip_request_to_parsed_response() {
    let body = requests::image_request("suede ankle boots, studio light", AspectRatio::Portrait3x4);
    assert_eq!(body["generationConfig"]["imageConfig"]["aspectRatio"], "3:4");

    let response = json!({
        "candidates": [{ "content": { "parts": [
            { "inlineData": { "mimeType": "image/png", "data": "aW1hZ2U=" } }
        ] } }]
    });
    let uri = responses::extract_image(&response).unwrap();
    assert_eq!(uri, "data:image/png;base64,aW1hZ2U=");
}

#[test]
fn test_refusal_text_becomes_image_error() {
    let response = json!({
        "candidates": [{ "content": { "parts": [
            { "text": "Please describe the product first." }
        ] } }]
    });
    let err = responses::extract_image(&response).unwrap_err();
    assert_eq!(err.to_string(), "Please describe the product first.");
}

#[test]
fn test_edit_request_reuses_incoming_mime_type() {
    let body = requests::edit_request("data:image/webp;base64,cGF5bG9hZA==", "remove background");
    let parts = body["contents"][0]["parts"].as_array().unwrap();
    assert_eq!(parts.len(), 2);
    assert_eq!(parts[0]["inlineData"]["mimeType"], "image/webp");
    assert_eq!(parts[0]["inlineData"]["data"], "cGF5bG9hZA==");
    assert_eq!(parts[1]["text"], "remove background");
}

#[test]
fn test_research_request_and_grounded_response() {
    let body = requests::research_request("loafer demand in Europe", ResearchMode::Product);
    assert!(body["tools"][0]["googleSearch"].is_object());
    assert!(
        body["contents"][0]["parts"][0]["text"]
            .as_str()
            .unwrap()
            .contains("loafer demand in Europe")
    );

    let response = json!({
        "candidates": [{
            "content": { "parts": [{ "text": "## Overview\nSteady growth." }] },
            "groundingMetadata": { "groundingChunks": [
                { "web": { "uri": "https://retail.example/report", "title": "Retail Report" } }
            ] }
        }]
    });
    let findings = responses::extract_findings(&response);
    assert_eq!(findings.text, "## Overview\nSteady growth.");
    assert_eq!(findings.sources.len(), 1);
    assert_eq!(findings.sources[0].title, "Retail Report");
    assert_eq!(findings.sources[0].uri, "https://retail.example/report");
}

#[test]
fn test_grounded_response_without_metadata() {
    let response = json!({
        "candidates": [{ "content": { "parts": [{ "text": "plain report" }] } }]
    });
    let findings = responses::extract_findings(&response);
    assert_eq!(findings.text, "plain report");
    assert!(findings.sources.is_empty());
}

#[test]
fn test_strategy_request_thinking_config() {
    let body = requests::strategy_request("open a second storefront");
    assert_eq!(body["generationConfig"]["thinkingConfig"]["thinkingBudget"], 32768);
    assert!(
        body["contents"][0]["parts"][0]["text"]
            .as_str()
            .unwrap()
            .contains("open a second storefront")
    );
}

#[test]
fn test_chat_request_preserves_turn_order() {
    let turns = vec![
        ChatTurn::user("what sells best in winter?"),
        ChatTurn::model("Boots and heavy knits."),
        ChatTurn::user("and in summer?"),
        ChatTurn::model("Sandals and linen."),
    ];
    let body = requests::chat_request(&turns, "which should I restock now?");

    let contents = body["contents"].as_array().unwrap();
    assert_eq!(contents.len(), 5);
    let roles: Vec<&str> =
        contents.iter().map(|c| c["role"].as_str().unwrap()).collect();
    assert_eq!(roles, vec!["user", "model", "user", "model", "user"]);
    assert_eq!(contents[4]["parts"][0]["text"], "which should I restock now?");
}

#[test]
fn test_multi_part_text_response_is_concatenated() {
    let response = json!({
        "candidates": [{ "content": { "parts": [
            { "text": "Part one. " },
            { "inlineData": { "mimeType": "image/png", "data": "xx" } },
            { "text": "Part two." }
        ] } }]
    });
    assert_eq!(responses::extract_text(&response).unwrap(), "Part one. Part two.");
}
