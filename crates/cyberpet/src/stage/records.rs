use std::path::Path;

use cyberpet_types::PetRecord;

use super::Stage;
use crate::display::Tone;
use crate::error::PersistError;
use crate::persistence;

impl Stage {
    /// Save and report the outcome on the console. Returns whether the file
    /// was written.
    pub fn save_record(&mut self, record: &PetRecord, path: impl AsRef<Path>) -> bool {
        let path = path.as_ref();
        match persistence::save(record, path) {
            Ok(()) => {
                self.display
                    .print_toned(format!("✅ Record saved to {}", path.display()), Tone::Success);
                true
            }
            Err(err) => {
                tracing::warn!(path = %path.display(), error = %err, "save failed");
                self.display
                    .print_toned(format!("❌ Save failed: {}", err), Tone::Error);
                false
            }
        }
    }

    /// Load and report the outcome on the console. A missing file and a
    /// malformed one get different messages; both return `None`.
    pub fn load_record(&mut self, path: impl AsRef<Path>) -> Option<PetRecord> {
        let path = path.as_ref();
        match persistence::load(path) {
            Ok(record) => {
                self.display
                    .print_toned(format!("✅ Loaded {}", path.display()), Tone::Success);
                Some(record)
            }
            Err(PersistError::NotFound(_)) => {
                tracing::info!(path = %path.display(), "no save file");
                self.display.print_toned(
                    format!("⚠️ Save file not found: {}", path.display()),
                    Tone::Warning,
                );
                None
            }
            Err(err) => {
                tracing::warn!(path = %path.display(), error = %err, "load failed");
                self.display
                    .print_toned(format!("❌ Load failed: {}", err), Tone::Error);
                None
            }
        }
    }
}
