pub mod battle;
pub mod chat;
pub mod pet;
pub mod screens;

pub use battle::{present_battle_log, present_card, present_dashboard, present_hud};
pub use chat::{present_chat_bubble, present_mindset, present_payload, present_thinking};
pub use pet::{
    present_image, present_label, present_record_stats, present_speech, present_stat_panel,
};
pub use screens::{present_celebration, present_credits};
