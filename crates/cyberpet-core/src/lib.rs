pub mod assets;
pub mod config;
pub mod error;
pub mod sound;
pub mod version;

pub use assets::AssetResolver;
pub use config::{Config, DisplayPreference, PacingConfig};
pub use error::{Error, Result};
pub use sound::SoundLibrary;
pub use version::{VERSION, check_compatibility, version};
