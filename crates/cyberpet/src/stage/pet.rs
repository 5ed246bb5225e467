use cyberpet_types::{DEFAULT_MOOD, PetRecord};

use super::Stage;
use crate::presentation::Renderer;
use crate::presentation::presenters::{
    present_image, present_label, present_record_stats, present_speech, present_stat_panel,
};

pub const DEFAULT_IMAGE_WIDTH: u32 = 200;
const EGG_IMAGE: &str = "egg.png";

impl Stage {
    /// Show an image from the asset roots in a 200px box.
    pub fn show_image(&mut self, filename: &str) {
        self.show_image_sized(filename, DEFAULT_IMAGE_WIDTH);
    }

    /// Rich mode skips images it cannot find or read; plain mode only names
    /// the file.
    pub fn show_image_sized(&mut self, filename: &str, width: u32) {
        let src = if self.display.is_rich() {
            let src = self.assets.load(filename);
            if src.is_none() {
                tracing::warn!(filename, "image skipped");
                return;
            }
            src
        } else {
            None
        };
        let vm = present_image(filename, width, src);
        self.display.render_view(&vm);
    }

    pub fn show_egg(&mut self) {
        if !self.display.is_rich() {
            self.display.print_line("(O) [Mystery Egg]");
            return;
        }
        self.display.print_line("Mystery Egg found!");
        self.show_image(EGG_IMAGE);
    }

    /// Same as [`Stage::show_egg`].
    pub fn summon(&mut self) {
        self.show_egg();
    }

    /// Portrait for a mood tag, `{mood}.png`.
    pub fn show_mood(&mut self, mood: &str) {
        if !self.display.is_rich() {
            self.display
                .print_line(format!("(^.{mood}.^) [Pet is {mood}]"));
            return;
        }
        self.show_image(&format!("{mood}.png"));
    }

    pub fn show_stat_panel(&mut self, name: &str, hp: i64, hunger: i64, happiness: Option<i64>) {
        let vm = present_stat_panel(name, hp, hunger, happiness, self.hunger_scale);
        self.display.render_view(&vm);
    }

    pub fn say(&mut self, speaker: &str, message: &str) {
        let vm = present_speech(speaker, message);
        self.display.render_view(&vm);
    }

    pub fn show_speech(&mut self, speaker: &str, message: &str) {
        self.say(speaker, message);
    }

    pub fn show_label(&mut self, name: &str) {
        let vm = present_label(name);
        self.display.render_view(&vm);
    }

    /// Mood portrait followed by the stat panel.
    pub fn show_pet_record(&mut self, record: &PetRecord) {
        self.show_mood(record.mood().unwrap_or(DEFAULT_MOOD));
        let vm = present_record_stats(record, self.hunger_scale);
        self.display.render_view(&vm);
    }
}
