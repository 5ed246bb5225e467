use base64::{Engine as _, engine::general_purpose::STANDARD};
use std::path::{Path, PathBuf};

use crate::Result;

/// Where the setup step drops the course images, relative to the notebook.
pub const DEFAULT_ASSET_DIR: &str = "assets/images";
/// Same directory seen from a lesson folder two levels down.
pub const DEFAULT_FALLBACK_DIR: &str = "../../assets/images";

/// Image files the course setup step installs.
pub const COURSE_IMAGES: [&str; 5] = ["egg.png", "happy.png", "sad.png", "normal.png", "poop.png"];

/// Finds image files under an ordered list of roots and inlines them as
/// data URIs. Every call goes back to disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetResolver {
    roots: Vec<PathBuf>,
}

impl Default for AssetResolver {
    fn default() -> Self {
        Self::new(DEFAULT_ASSET_DIR).with_fallback(DEFAULT_FALLBACK_DIR)
    }
}

impl AssetResolver {
    pub fn new(primary: impl Into<PathBuf>) -> Self {
        Self {
            roots: vec![primary.into()],
        }
    }

    pub fn with_fallback(mut self, root: impl Into<PathBuf>) -> Self {
        self.roots.push(root.into());
        self
    }

    pub fn roots(&self) -> &[PathBuf] {
        &self.roots
    }

    /// First root containing `filename`, in configuration order.
    pub fn resolve(&self, filename: &str) -> Option<PathBuf> {
        let found = self
            .roots
            .iter()
            .map(|root| root.join(filename))
            .find(|candidate| candidate.exists());

        if found.is_none() {
            tracing::debug!(filename, roots = ?self.roots, "asset not found");
        }
        found
    }

    /// Read `path` and encode it as a data URI. Read failures are logged and
    /// reported as `None`; callers render a placeholder instead.
    pub fn embed(&self, path: &Path) -> Option<String> {
        match try_embed(path) {
            Ok(uri) => Some(uri),
            Err(err) => {
                tracing::warn!(path = %path.display(), error = %err, "failed to load image");
                None
            }
        }
    }

    /// Resolve then embed.
    pub fn load(&self, filename: &str) -> Option<String> {
        self.resolve(filename).and_then(|path| self.embed(&path))
    }
}

/// Read `path` and encode it as a data URI.
pub fn try_embed(path: &Path) -> Result<String> {
    let bytes = std::fs::read(path)?;
    Ok(data_uri(mime_type(path), &bytes))
}

pub fn data_uri(mime: &str, bytes: &[u8]) -> String {
    format!("data:{};base64,{}", mime, STANDARD.encode(bytes))
}

/// MIME type by file extension.
pub fn mime_type(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());

    match ext.as_deref() {
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        _ => "application/octet-stream",
    }
}

/// Whether an animation frame names an image file rather than literal text.
pub fn is_image_frame(frame: &str) -> bool {
    frame.ends_with(".png") || frame.ends_with(".jpg")
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_resolve_prefers_primary_root() -> anyhow::Result<()> {
        let temp = TempDir::new()?;
        let primary = temp.path().join("primary");
        let fallback = temp.path().join("fallback");
        std::fs::create_dir_all(&primary)?;
        std::fs::create_dir_all(&fallback)?;
        std::fs::write(primary.join("happy.png"), b"one")?;
        std::fs::write(fallback.join("happy.png"), b"two")?;
        std::fs::write(fallback.join("sad.png"), b"three")?;

        let resolver = AssetResolver::new(&primary).with_fallback(&fallback);
        assert_eq!(resolver.resolve("happy.png"), Some(primary.join("happy.png")));
        assert_eq!(resolver.resolve("sad.png"), Some(fallback.join("sad.png")));
        assert_eq!(resolver.resolve("poop.png"), None);
        Ok(())
    }

    #[test]
    fn test_embed_encodes_data_uri() -> anyhow::Result<()> {
        let temp = TempDir::new()?;
        let path = temp.path().join("egg.png");
        std::fs::write(&path, b"egg")?;

        let resolver = AssetResolver::new(temp.path());
        assert_eq!(
            resolver.embed(&path).as_deref(),
            Some("data:image/png;base64,ZWdn")
        );
        assert_eq!(
            resolver.load("egg.png").as_deref(),
            Some("data:image/png;base64,ZWdn")
        );
        Ok(())
    }

    #[test]
    fn test_embed_unreadable_is_none() {
        let resolver = AssetResolver::default();
        assert_eq!(resolver.embed(Path::new("/definitely/not/here.png")), None);
    }

    #[test]
    fn test_mime_and_frame_kind() {
        assert_eq!(mime_type(Path::new("a.PNG")), "image/png");
        assert_eq!(mime_type(Path::new("a.jpeg")), "image/jpeg");
        assert_eq!(mime_type(Path::new("a")), "application/octet-stream");
        assert!(is_image_frame("happy.png"));
        assert!(is_image_frame("walk.jpg"));
        assert!(!is_image_frame("(>_<)"));
    }
}
