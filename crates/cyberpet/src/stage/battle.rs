use std::time::Duration;

use cyberpet_core::assets::is_image_frame;
use cyberpet_types::PetRecord;

use super::Stage;
use crate::display::Tone;
use crate::presentation::Renderer;
use crate::presentation::presenters::{present_battle_log, present_dashboard, present_hud};

/// How far an animation got.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Playback {
    Completed,
    /// The pacer was cancelled after `shown` frames.
    Cancelled { shown: usize },
}

/// What [`Stage::trigger_sound`] did with a tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundOutcome {
    /// Handed to the notebook for autoplay.
    Played,
    /// Plain mode: the sound was named on the console.
    Announced,
    /// Not in the sound table; nothing played.
    Unknown,
}

impl Stage {
    pub fn show_hud(&mut self, player: &PetRecord) {
        let vm = present_hud(player);
        self.display.render_view(&vm);
    }

    /// Player and enemy cards above the newest log lines. Without an enemy the
    /// right-hand slot stays empty.
    pub fn show_dashboard<S: AsRef<str>>(
        &mut self,
        player: &PetRecord,
        enemy: Option<&PetRecord>,
        logs: &[S],
    ) {
        let rich = self.display.is_rich();
        let assets = &self.assets;
        let vm = present_dashboard(player, enemy, logs, |mood| {
            if rich {
                assets.load(&format!("{mood}.png"))
            } else {
                None
            }
        });
        self.display.render_view(&vm);
    }

    pub fn show_log<S: AsRef<str>>(&mut self, messages: &[S]) {
        let vm = present_battle_log(messages);
        self.display.render_view(&vm);
    }

    /// Play frames with the configured delay.
    pub fn play_animation<S: AsRef<str>>(&mut self, frames: &[S]) -> Playback {
        let delay = self.pacing.animation_delay();
        self.play_animation_with_delay(frames, delay)
    }

    /// Show each frame in turn, waiting `delay` after each. Frames naming a
    /// `.png`/`.jpg` file are shown as images in rich mode; anything else is
    /// printed as text.
    pub fn play_animation_with_delay<S: AsRef<str>>(
        &mut self,
        frames: &[S],
        delay: Duration,
    ) -> Playback {
        for (index, frame) in frames.iter().enumerate() {
            let frame = frame.as_ref();
            if self.display.is_rich() {
                self.display.clear();
                if is_image_frame(frame) {
                    self.show_image(frame);
                } else {
                    self.display.print_line(frame);
                }
            } else {
                self.display.print_line(frame);
            }

            if self.pacer.pause(delay).is_cancelled() {
                tracing::debug!(shown = index + 1, total = frames.len(), "animation cancelled");
                return Playback::Cancelled { shown: index + 1 };
            }
        }
        Playback::Completed
    }

    /// Play a tag from the sound table.
    pub fn trigger_sound(&mut self, tag: &str) -> SoundOutcome {
        let Some(url) = self.sounds.url(tag) else {
            tracing::warn!(tag, "unknown sound");
            let available: Vec<&str> = self.sounds.tags().collect();
            self.display
                .print_toned(format!("⚠️ Unknown sound: {tag}"), Tone::Warning);
            self.display
                .print_line(format!("Available sounds: {}", available.join(", ")));
            return SoundOutcome::Unknown;
        };

        if self.display.is_rich() {
            self.display.play_audio(url);
            SoundOutcome::Played
        } else {
            self.display.print_line(format!("[SOUND] Playing: {tag}"));
            SoundOutcome::Announced
        }
    }
}
