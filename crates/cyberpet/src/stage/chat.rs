use std::time::Duration;

use serde_json::Value;

use super::Stage;
use crate::pacing::Flow;
use crate::presentation::Renderer;
use crate::presentation::presenters::{
    present_chat_bubble, present_mindset, present_payload, present_thinking,
};
use crate::presentation::view_models::BubbleStyle;

impl Stage {
    /// Chat-app bubble. User bubbles sit on the right in green; others on the
    /// left in the colour of `style`.
    pub fn show_chat_bubble(&mut self, speaker: &str, message: &str, is_user: bool, style: BubbleStyle) {
        let vm = present_chat_bubble(speaker, message, is_user, style);
        self.display.render_view(&vm);
    }

    /// Thinking indicator for the configured time.
    pub fn show_thinking(&mut self, prompt: &str) -> Flow {
        let duration = self.pacing.thinking();
        self.show_thinking_for(prompt, duration)
    }

    /// In rich mode the indicator is cleared once the wait is over.
    pub fn show_thinking_for(&mut self, prompt: &str, duration: Duration) -> Flow {
        let vm = present_thinking(prompt);
        self.display.render_view(&vm);
        let flow = self.pacer.pause(duration);
        self.display.clear();
        flow
    }

    /// Pretend to POST `payload` with the configured latency.
    pub fn simulate_call(&mut self, endpoint: &str, payload: &Value) -> Flow {
        let latency = self.pacing.api_latency();
        self.simulate_call_with_latency(endpoint, payload, latency)
    }

    /// Nothing leaves the process. Rich mode splits the latency around a
    /// "processing" step.
    pub fn simulate_call_with_latency(&mut self, endpoint: &str, payload: &Value, latency: Duration) -> Flow {
        let vm = present_payload(endpoint, payload);

        if !self.display.is_rich() {
            self.display.print_line(format!("POST {endpoint}"));
            self.display.render_view(&vm);
            if self.pacer.pause(latency).is_cancelled() {
                return Flow::Cancelled;
            }
            self.display.print_line("Response: 200 OK");
            return Flow::Continue;
        }

        let half = latency / 2;
        self.display
            .print_line(format!("📡 Sending data to {endpoint}..."));
        self.display.render_view(&vm);
        if self.pacer.pause(half).is_cancelled() {
            return Flow::Cancelled;
        }
        self.display.print_line("☁️ Processing in Cloud...");
        if self.pacer.pause(half).is_cancelled() {
            return Flow::Cancelled;
        }
        self.display.print_line("✅ Response received (200 OK)");
        Flow::Continue
    }

    pub fn show_mindset(&mut self, text: &str) {
        let vm = present_mindset(text);
        self.display.render_view(&vm);
    }
}
