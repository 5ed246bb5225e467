//! The presenter facade.
//!
//! A [`Stage`] owns everything a presenter needs: the [`Display`] (and with
//! it the mode), the asset roots, the sound table and the pacer used by the
//! presenters that wait. Presenter operations never return errors; every
//! failure degrades to a diagnostic line or a skipped image.

mod battle;
mod chat;
mod pet;
mod records;
mod screens;

pub use battle::{Playback, SoundOutcome};
pub use pet::DEFAULT_IMAGE_WIDTH;

use cyberpet_core::{AssetResolver, Config, PacingConfig, SoundLibrary};
use cyberpet_types::HungerScale;

use crate::display::{Display, DisplayMode};
use crate::pacing::{BlockingPacer, Pacer};

pub struct Stage {
    display: Display,
    assets: AssetResolver,
    sounds: SoundLibrary,
    pacer: Box<dyn Pacer>,
    pacing: PacingConfig,
    hunger_scale: HungerScale,
}

impl Stage {
    /// Stage over an existing display with default assets, pacing and
    /// classification.
    pub fn new(display: Display) -> Self {
        Self {
            display,
            assets: AssetResolver::default(),
            sounds: SoundLibrary::builtin(),
            pacer: Box::new(BlockingPacer),
            pacing: PacingConfig::default(),
            hunger_scale: HungerScale::default(),
        }
    }

    /// Probe the display per `config.display` and take roots, pacing and
    /// hunger scale from the config.
    pub fn from_config(config: &Config) -> Self {
        Self::new(Display::detect(config.display))
            .with_assets(config.asset_resolver())
            .with_pacing(config.pacing.clone())
            .with_hunger_scale(config.hunger_scale)
    }

    /// Load the user config (falling back to defaults when it can't be read)
    /// and build a stage from it.
    pub fn detect() -> Self {
        let config = Config::load().unwrap_or_else(|err| {
            tracing::warn!(error = %err, "could not load config, using defaults");
            Config::default().with_env_overrides()
        });
        Self::from_config(&config)
    }

    pub fn with_assets(mut self, assets: AssetResolver) -> Self {
        self.assets = assets;
        self
    }

    pub fn with_sounds(mut self, sounds: SoundLibrary) -> Self {
        self.sounds = sounds;
        self
    }

    pub fn with_pacer(mut self, pacer: impl Pacer + 'static) -> Self {
        self.pacer = Box::new(pacer);
        self
    }

    pub fn with_pacing(mut self, pacing: PacingConfig) -> Self {
        self.pacing = pacing;
        self
    }

    pub fn with_hunger_scale(mut self, scale: HungerScale) -> Self {
        self.hunger_scale = scale;
        self
    }

    pub fn mode(&self) -> DisplayMode {
        self.display.mode()
    }

    pub fn display(&self) -> &Display {
        &self.display
    }

    pub fn display_mut(&mut self) -> &mut Display {
        &mut self.display
    }

    pub fn assets(&self) -> &AssetResolver {
        &self.assets
    }

    pub fn sounds(&self) -> SoundLibrary {
        self.sounds
    }

    pub fn pacing(&self) -> &PacingConfig {
        &self.pacing
    }

    pub fn hunger_scale(&self) -> HungerScale {
        self.hunger_scale
    }
}
