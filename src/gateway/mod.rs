//! Thin client layer over the external generative-AI service.
//!
//! Each capability (image generation, image editing, grounded research,
//! strategy drafting, quick copy, assistant chat) is a request builder
//! plus a response parser around one `generateContent` HTTP call. The
//! service itself is an opaque boundary: builders and parsers are pure
//! and tested offline, while [`HttpGateway`] owns transport, retries and
//! the API key.

pub mod client;
pub mod config;
pub mod requests;
pub mod responses;

pub use client::{AiGateway, HttpGateway};
pub use config::GatewayConfig;
