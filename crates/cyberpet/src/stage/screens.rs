use super::Stage;
use crate::presentation::Renderer;
use crate::presentation::presenters::{present_celebration, present_credits};

const CELEBRATION_SOUND: &str = "level_up";
const CREDITS_SOUND: &str = "heal";

impl Stage {
    pub fn celebrate(&mut self) {
        self.display.render_view(&present_celebration());
        self.trigger_sound(CELEBRATION_SOUND);
    }

    pub fn show_credits(&mut self, author: &str) {
        self.display.render_view(&present_credits(author));
        self.trigger_sound(CREDITS_SOUND);
    }
}
