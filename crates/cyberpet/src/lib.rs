//! cyberpet: visualization helpers for the Cyber-Pet course.
//!
//! # Overview
//!
//! Every presenter either emits an inline HTML fragment (stat bars, speech and
//! chat bubbles, battle dashboards, animations, sound widgets) for a notebook
//! cell, or prints plain text when no notebook is around. The choice is made
//! once, when the [`Display`] is built, and every presenter on the [`Stage`]
//! follows it.
//!
//! # Quickstart
//!
//! ```no_run
//! use cyberpet::{Stage, create_record};
//!
//! let mut stage = Stage::detect();
//! stage.show_egg();
//!
//! let pet = create_record("Fluffy");
//! stage.show_pet_record(&pet);
//! stage.say("Fluffy", "Hello!");
//!
//! if stage.save_record(&pet, cyberpet::DEFAULT_SAVE_FILE) {
//!     let again = stage.load_record(cyberpet::DEFAULT_SAVE_FILE);
//!     assert_eq!(again, Some(pet));
//! }
//! ```
//!
//! Tests and hosts that post-process output can build the display over a
//! [`RecordingSurface`] instead:
//!
//! ```
//! use cyberpet::{Display, DisplayMode, RecordingSurface, Stage, create_record};
//!
//! let recorder = RecordingSurface::new();
//! let mut stage = Stage::new(Display::new(DisplayMode::Plain, recorder.clone()));
//! stage.show_hud(&create_record("Byte"));
//! assert_eq!(recorder.lines(), ["--- HUD ---", "Byte | HP: 100/100 | Gold: 0"]);
//! ```
//!
//! # Architecture
//!
//! - `cyberpet-types`: records, stat classification, battle log
//! - `cyberpet-core`: configuration, asset lookup, sound table, version
//! - this crate: the display adapter, the presentation layer, pacing,
//!   persistence and the [`Stage`] facade
//!
//! Diagnostics go through `tracing`; call [`logging::init`] to see them.

pub mod display;
pub mod error;
pub mod logging;
pub mod pacing;
pub mod persistence;
pub mod presentation;
pub mod stage;

pub use display::{
    ConsoleSurface, Display, DisplayMode, Emission, NotebookSurface, RecordingSurface, Surface,
    Tone, detect_mode,
};
pub use error::PersistError;
pub use pacing::{BlockingPacer, CancellablePacer, Flow, InstantPacer, Pacer};
pub use persistence::DEFAULT_SAVE_FILE;
pub use presentation::view_models::BubbleStyle;
pub use stage::{Playback, SoundOutcome, Stage};

pub use cyberpet_core::{
    AssetResolver, Config, DisplayPreference, PacingConfig, SoundLibrary, VERSION,
    check_compatibility, version,
};
pub use cyberpet_types::{BattleLog, HpBand, HungerScale, PetRecord, RecordBuilder, StatLevel};

/// A record seeded with `name`, hp 100, hunger 50 and mood `normal`. Use
/// [`PetRecord::builder`] to change the defaults or add fields.
pub fn create_record(name: impl Into<String>) -> PetRecord {
    PetRecord::create(name)
}
