use std::fmt;

use crate::display::DisplayMode;

pub mod battle;
pub mod chat;
pub mod pet;
pub mod screens;

pub use battle::{BattleLogViewModel, CardViewModel, DashboardViewModel, HudViewModel, Side};
pub use chat::{
    BubbleStyle, ChatBubbleViewModel, MindsetViewModel, PayloadViewModel, ThinkingViewModel,
};
pub use pet::{ImageViewModel, LabelViewModel, SpeechViewModel, StatBarViewModel, StatPanelViewModel};
pub use screens::{CelebrationViewModel, CreditsViewModel};

/// A view model that knows how to show itself in either display mode.
///
/// Rich views produce one HTML fragment; plain views produce text, one
/// console line per `\n`-separated line.
pub trait CreateView {
    fn create_view<'a>(&'a self, mode: DisplayMode) -> Box<dyn fmt::Display + 'a>;
}
