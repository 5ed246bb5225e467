use serde_json::Value;

use crate::presentation::view_models::{
    BubbleStyle, ChatBubbleViewModel, MindsetViewModel, PayloadViewModel, ThinkingViewModel,
};

pub fn present_chat_bubble(
    speaker: &str,
    message: &str,
    is_user: bool,
    style: BubbleStyle,
) -> ChatBubbleViewModel {
    ChatBubbleViewModel {
        speaker: speaker.to_string(),
        message: message.to_string(),
        is_user,
        style,
    }
}

pub fn present_thinking(prompt: &str) -> ThinkingViewModel {
    ThinkingViewModel {
        prompt: prompt.to_string(),
    }
}

pub fn present_payload(endpoint: &str, payload: &Value) -> PayloadViewModel {
    PayloadViewModel {
        endpoint: endpoint.to_string(),
        payload: payload.clone(),
    }
}

pub fn present_mindset(text: &str) -> MindsetViewModel {
    MindsetViewModel {
        text: text.to_string(),
    }
}
