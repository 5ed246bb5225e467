use std::fmt;

use crate::display::DisplayMode;
use crate::presentation::formatters::{Escaped, head};
use crate::presentation::view_models::{
    ChatBubbleViewModel, CreateView, MindsetViewModel, PayloadViewModel, ThinkingViewModel,
};

// --------------------------------------------------------
// Chat bubble
// --------------------------------------------------------

impl CreateView for ChatBubbleViewModel {
    fn create_view<'a>(&'a self, mode: DisplayMode) -> Box<dyn fmt::Display + 'a> {
        match mode {
            DisplayMode::Rich => Box::new(ChatBubbleHtml { data: self }),
            DisplayMode::Plain => Box::new(ChatBubbleText { data: self }),
        }
    }
}

struct ChatBubbleHtml<'a> {
    data: &'a ChatBubbleViewModel,
}

impl fmt::Display for ChatBubbleHtml<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let d = self.data;
        let (items, side, margin_left, margin_right) = if d.is_user {
            ("flex-end", "right", "auto", "0")
        } else {
            ("flex-start", "left", "0", "auto")
        };
        write!(
            f,
            r#"<div class="chat-bubble" data-align="{side}" style="display: flex; flex-direction: column; align-items: {items}; margin-bottom: 10px;"><div style="font-size: 0.8em; color: #666; margin-bottom: 2px; margin-{side}: 5px;">{speaker}</div><div style="background-color: {bg}; padding: 8px 12px; border-radius: 15px; max-width: 70%; box-shadow: 1px 1px 2px rgba(0,0,0,0.1); margin-left: {ml}; margin-right: {mr};">{message}</div></div>"#,
            side = side,
            items = items,
            speaker = Escaped(&d.speaker),
            bg = d.background(),
            ml = margin_left,
            mr = margin_right,
            message = Escaped(&d.message),
        )
    }
}

struct ChatBubbleText<'a> {
    data: &'a ChatBubbleViewModel,
}

impl fmt::Display for ChatBubbleText<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let prefix = if self.data.is_user {
            "You"
        } else {
            self.data.speaker.as_str()
        };
        write!(f, "[{}]: {}", prefix, self.data.message)
    }
}

// --------------------------------------------------------
// Thinking indicator
// --------------------------------------------------------

impl CreateView for ThinkingViewModel {
    fn create_view<'a>(&'a self, mode: DisplayMode) -> Box<dyn fmt::Display + 'a> {
        match mode {
            DisplayMode::Rich => Box::new(ThinkingHtml { data: self }),
            DisplayMode::Plain => Box::new(ThinkingText { data: self }),
        }
    }
}

struct ThinkingHtml<'a> {
    data: &'a ThinkingViewModel,
}

impl fmt::Display for ThinkingHtml<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            r#"<div class="thinking" style="display: flex; align-items: center; color: #888; margin-bottom: 10px;"><span style="margin-right: 10px;">🧠 {}</span><div style="width: 10px; height: 10px; background: #888; border-radius: 50%; animation: pulse 1s infinite;"></div></div>"#,
            Escaped(&self.data.prompt)
        )?;
        f.write_str("<style>@keyframes pulse { 0%, 100% { opacity: 0.3; } 50% { opacity: 1; } }</style>")
    }
}

struct ThinkingText<'a> {
    data: &'a ThinkingViewModel,
}

impl fmt::Display for ThinkingText<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Thinking about: '{}'...", self.data.prompt)
    }
}

// --------------------------------------------------------
// Simulated request payload
// --------------------------------------------------------

impl CreateView for PayloadViewModel {
    fn create_view<'a>(&'a self, mode: DisplayMode) -> Box<dyn fmt::Display + 'a> {
        match mode {
            DisplayMode::Rich => Box::new(PayloadHtml { data: self }),
            DisplayMode::Plain => Box::new(PayloadText { data: self }),
        }
    }
}

struct PayloadHtml<'a> {
    data: &'a PayloadViewModel,
}

impl fmt::Display for PayloadHtml<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let json = self.data.payload.to_string();
        write!(
            f,
            r#"<div class="payload" style="font-family: monospace; color: blue;">Payload: {}</div>"#,
            Escaped(&json)
        )
    }
}

struct PayloadText<'a> {
    data: &'a PayloadViewModel,
}

impl fmt::Display for PayloadText<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Data: {}", self.data.payload)
    }
}

// --------------------------------------------------------
// Mindset callout
// --------------------------------------------------------

const MINDSET_PREVIEW_CHARS: usize = 20;

impl CreateView for MindsetViewModel {
    fn create_view<'a>(&'a self, mode: DisplayMode) -> Box<dyn fmt::Display + 'a> {
        match mode {
            DisplayMode::Rich => Box::new(MindsetHtml { data: self }),
            DisplayMode::Plain => Box::new(MindsetText { data: self }),
        }
    }
}

struct MindsetHtml<'a> {
    data: &'a MindsetViewModel,
}

impl fmt::Display for MindsetHtml<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            r#"<div class="mindset" style="border: 2px dashed #9C27B0; background: #F3E5F5; padding: 10px; border-radius: 8px; color: #4A148C; margin-bottom: 10px;"><strong>🧠 System Mindset Loaded:</strong><br><em>&quot;{}&quot;</em></div>"#,
            Escaped(&self.data.text)
        )
    }
}

struct MindsetText<'a> {
    data: &'a MindsetViewModel,
}

impl fmt::Display for MindsetText<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "[SYSTEM] Updating Mindset: {}...",
            head(&self.data.text, MINDSET_PREVIEW_CHARS)
        )
    }
}
