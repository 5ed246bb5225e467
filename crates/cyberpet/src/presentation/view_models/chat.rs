use serde::Serialize;
use serde_json::Value;
use std::str::FromStr;

const USER_BUBBLE: &str = "#DCF8C6";

/// Background palette for non-user chat bubbles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BubbleStyle {
    #[default]
    Normal,
    Cute,
    Tech,
    Evil,
}

impl BubbleStyle {
    pub fn color(self) -> &'static str {
        match self {
            BubbleStyle::Normal => "#E8E8E8",
            BubbleStyle::Cute => "#FFE5F0",
            BubbleStyle::Tech => "#E3F2FD",
            BubbleStyle::Evil => "#FFEBEE",
        }
    }

    /// Unknown names fall back to `Normal`.
    pub fn parse_lenient(s: &str) -> Self {
        s.parse().unwrap_or_default()
    }
}

impl FromStr for BubbleStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "normal" => Ok(BubbleStyle::Normal),
            "cute" => Ok(BubbleStyle::Cute),
            "tech" => Ok(BubbleStyle::Tech),
            "evil" => Ok(BubbleStyle::Evil),
            other => Err(format!("unknown bubble style: {}", other)),
        }
    }
}

// --------------------------------------------------------
// Chat bubble
// --------------------------------------------------------

#[derive(Debug, Serialize)]
pub struct ChatBubbleViewModel {
    pub speaker: String,
    pub message: String,
    pub is_user: bool,
    pub style: BubbleStyle,
}

impl ChatBubbleViewModel {
    pub fn background(&self) -> &'static str {
        if self.is_user {
            USER_BUBBLE
        } else {
            self.style.color()
        }
    }
}

// --------------------------------------------------------
// Thinking indicator
// --------------------------------------------------------

#[derive(Debug, Serialize)]
pub struct ThinkingViewModel {
    pub prompt: String,
}

// --------------------------------------------------------
// Simulated request payload
// --------------------------------------------------------

#[derive(Debug, Serialize)]
pub struct PayloadViewModel {
    pub endpoint: String,
    pub payload: Value,
}

// --------------------------------------------------------
// Mindset callout
// --------------------------------------------------------

#[derive(Debug, Serialize)]
pub struct MindsetViewModel {
    pub text: String,
}
