pub mod battle_log;
pub mod error;
pub mod record;
pub mod stat;

pub use battle_log::BattleLog;
pub use error::{Error, Result};
pub use record::{
    DEFAULT_HP, DEFAULT_HUNGER, DEFAULT_MAX_HP, DEFAULT_MOOD, PetRecord, RecordBuilder,
};
pub use stat::{HpBand, HungerScale, StatLevel, bar_width, percent_of};
