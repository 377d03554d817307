use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Aspect ratios accepted by the image generation endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AspectRatio {
    Square,
    Portrait2x3,
    Landscape3x2,
    Portrait3x4,
    Landscape4x3,
    Portrait9x16,
    Landscape16x9,
    Ultrawide21x9,
}

impl AspectRatio {
    pub fn as_str(&self) -> &'static str {
        match self {
            AspectRatio::Square => "1:1",
            AspectRatio::Portrait2x3 => "2:3",
            AspectRatio::Landscape3x2 => "3:2",
            AspectRatio::Portrait3x4 => "3:4",
            AspectRatio::Landscape4x3 => "4:3",
            AspectRatio::Portrait9x16 => "9:16",
            AspectRatio::Landscape16x9 => "16:9",
            AspectRatio::Ultrawide21x9 => "21:9",
        }
    }
}

impl fmt::Display for AspectRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AspectRatio {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "1:1" => Ok(AspectRatio::Square),
            "2:3" => Ok(AspectRatio::Portrait2x3),
            "3:2" => Ok(AspectRatio::Landscape3x2),
            "3:4" => Ok(AspectRatio::Portrait3x4),
            "4:3" => Ok(AspectRatio::Landscape4x3),
            "9:16" => Ok(AspectRatio::Portrait9x16),
            "16:9" => Ok(AspectRatio::Landscape16x9),
            "21:9" => Ok(AspectRatio::Ultrawide21x9),
            other => Err(format!(
                "unknown aspect ratio '{}' (expected one of 1:1, 2:3, 3:2, 3:4, 4:3, 9:16, 16:9, 21:9)",
                other
            )),
        }
    }
}

/// Whether a research query targets broad market trends or one product
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResearchMode {
    Trend,
    Product,
}

/// One web source cited by a search-grounded response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceLink {
    pub title: String,
    pub uri: String,
}

/// A grounded research result: the report text plus its cited sources
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResearchFindings {
    pub text: String,
    pub sources: Vec<SourceLink>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatRole {
    User,
    Model,
}

impl ChatRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChatRole::User => "user",
            ChatRole::Model => "model",
        }
    }
}

/// One turn of the assistant conversation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatTurn {
    pub role: ChatRole,
    pub text: String,
}

impl ChatTurn {
    pub fn user(text: impl Into<String>) -> Self {
        Self { role: ChatRole::User, text: text.into() }
    }

    pub fn model(text: impl Into<String>) -> Self {
        Self { role: ChatRole::Model, text: text.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aspect_ratio_round_trip() {
        for ratio in [
            AspectRatio::Square,
            AspectRatio::Portrait2x3,
            AspectRatio::Landscape3x2,
            AspectRatio::Portrait3x4,
            AspectRatio::Landscape4x3,
            AspectRatio::Portrait9x16,
            AspectRatio::Landscape16x9,
            AspectRatio::Ultrawide21x9,
        ] {
            assert_eq!(ratio.as_str().parse::<AspectRatio>().unwrap(), ratio);
        }
    }

    #[test]
    fn test_aspect_ratio_rejects_unknown() {
        let err = "5:7".parse::<AspectRatio>().unwrap_err();
        assert!(err.contains("unknown aspect ratio"));
    }

    #[test]
    fn test_chat_role_wire_names() {
        assert_eq!(ChatRole::User.as_str(), "user");
        assert_eq!(ChatRole::Model.as_str(), "model");
    }
}
