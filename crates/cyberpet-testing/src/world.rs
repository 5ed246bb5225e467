//! TestWorld pattern for presenter tests.
//!
//! Provides:
//! - An isolated temp directory with a primary and a fallback asset root
//! - Course images written on demand
//! - Stages wired to a recording surface and an instant pacer

use anyhow::Result;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use cyberpet::{Display, DisplayMode, InstantPacer, RecordingSurface, Stage};
use cyberpet_core::AssetResolver;
use cyberpet_core::assets::COURSE_IMAGES;

use crate::fixtures::TINY_PNG;

/// A stage plus handles on everything it emitted and waited for.
pub struct RecordedStage {
    pub stage: Stage,
    pub output: RecordingSurface,
    pub pacer: InstantPacer,
}

/// Declarative test environment.
///
/// # Example
/// ```no_run
/// use cyberpet::DisplayMode;
/// use cyberpet_testing::TestWorld;
///
/// let world = TestWorld::new().with_course_images();
/// let mut rec = world.stage(DisplayMode::Rich);
/// rec.stage.show_egg();
/// assert_eq!(rec.output.fragments().len(), 1);
/// ```
pub struct TestWorld {
    temp_dir: TempDir,
    asset_root: PathBuf,
    fallback_root: PathBuf,
}

impl Default for TestWorld {
    fn default() -> Self {
        Self::new()
    }
}

impl TestWorld {
    /// Create a new isolated test environment with empty asset roots.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let asset_root = temp_dir.path().join("lesson/assets/images");
        let fallback_root = temp_dir.path().join("shared/assets/images");

        fs::create_dir_all(&asset_root).expect("Failed to create asset root");
        fs::create_dir_all(&fallback_root).expect("Failed to create fallback root");

        Self {
            temp_dir,
            asset_root,
            fallback_root,
        }
    }

    pub fn temp_dir(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn asset_root(&self) -> &Path {
        &self.asset_root
    }

    pub fn fallback_root(&self) -> &Path {
        &self.fallback_root
    }

    /// Default save file inside the world.
    pub fn save_path(&self) -> PathBuf {
        self.temp_dir.path().join(cyberpet::DEFAULT_SAVE_FILE)
    }

    /// Write every course image into the primary root.
    pub fn with_course_images(self) -> Self {
        for name in COURSE_IMAGES {
            self.write_image(&self.asset_root, name)
                .expect("Failed to write course image");
        }
        self
    }

    /// Write one image into the primary root.
    pub fn with_image(self, name: &str) -> Self {
        self.write_image(&self.asset_root, name)
            .expect("Failed to write image");
        self
    }

    /// Write one image into the fallback root only.
    pub fn with_fallback_image(self, name: &str) -> Self {
        self.write_image(&self.fallback_root, name)
            .expect("Failed to write image");
        self
    }

    fn write_image(&self, root: &Path, name: &str) -> Result<()> {
        fs::write(root.join(name), TINY_PNG)?;
        Ok(())
    }

    /// Write a file relative to the world root, creating parent directories.
    pub fn write_file(&self, relative: &str, contents: &str) -> Result<PathBuf> {
        let path = self.temp_dir.path().join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, contents)?;
        Ok(path)
    }

    /// Resolver over the primary root, then the fallback root.
    pub fn asset_resolver(&self) -> AssetResolver {
        AssetResolver::new(&self.asset_root).with_fallback(&self.fallback_root)
    }

    /// A stage in `mode` that records output and never sleeps.
    pub fn stage(&self, mode: DisplayMode) -> RecordedStage {
        let output = RecordingSurface::new();
        let pacer = InstantPacer::new();
        let stage = Stage::new(Display::new(mode, output.clone()))
            .with_assets(self.asset_resolver())
            .with_pacer(pacer.clone());

        RecordedStage {
            stage,
            output,
            pacer,
        }
    }
}
