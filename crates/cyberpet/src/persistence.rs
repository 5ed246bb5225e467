//! Saving and loading a [`PetRecord`] as a pretty-printed JSON object.

use std::fs;
use std::io;
use std::path::Path;

use cyberpet_types::PetRecord;

use crate::error::{PersistError, Result};

pub const DEFAULT_SAVE_FILE: &str = "save.json";

/// Write `record` to `path`, replacing any existing file.
pub fn save(record: &PetRecord, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let mut body = serde_json::to_vec_pretty(record).map_err(PersistError::Encode)?;
    body.push(b'\n');

    fs::write(path, body).map_err(|source| PersistError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::debug!(path = %path.display(), "record saved");
    Ok(())
}

/// Read a record back. A missing file and a file that is not a JSON object are
/// reported separately.
pub fn load(path: impl AsRef<Path>) -> Result<PetRecord> {
    let path = path.as_ref();
    let bytes = fs::read(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => PersistError::NotFound(path.to_path_buf()),
        _ => PersistError::Io {
            path: path.to_path_buf(),
            source,
        },
    })?;

    let record = serde_json::from_slice(&bytes).map_err(|source| PersistError::Malformed {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::debug!(path = %path.display(), "record loaded");
    Ok(record)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    #[test]
    fn test_round_trip_keeps_extras() -> anyhow::Result<()> {
        let dir = TempDir::new()?;
        let path = dir.path().join(DEFAULT_SAVE_FILE);

        let record = PetRecord::builder("小雞")
            .hp(80)
            .field("attack", 12)
            .field("skills", json!(["peck", "nap"]))
            .build();
        save(&record, &path)?;

        let text = fs::read_to_string(&path)?;
        assert!(text.contains("\"name\": \"小雞\""));
        assert_eq!(load(&path)?, record);
        Ok(())
    }

    #[test]
    fn test_save_overwrites() -> anyhow::Result<()> {
        let dir = TempDir::new()?;
        let path = dir.path().join("pet.json");

        save(&PetRecord::create("First"), &path)?;
        save(&PetRecord::create("Second"), &path)?;
        assert_eq!(load(&path)?.name(), Some("Second"));
        Ok(())
    }

    #[test]
    fn test_missing_file_is_not_found() -> anyhow::Result<()> {
        let dir = TempDir::new()?;
        let path = dir.path().join("nope.json");
        let err = load(&path).unwrap_err();
        assert!(matches!(err, PersistError::NotFound(_)));
        assert_eq!(err.path(), Some(&path));
        Ok(())
    }

    #[test]
    fn test_bad_content_is_malformed() -> anyhow::Result<()> {
        let dir = TempDir::new()?;
        for (name, content) in [
            ("broken.json", b"{\"name\": ".as_slice()),
            ("array.json", b"[1, 2, 3]".as_slice()),
            ("binary.json", b"\xff\xfe\x00".as_slice()),
        ] {
            let path = dir.path().join(name);
            fs::write(&path, content)?;
            let err = load(&path).unwrap_err();
            assert!(
                matches!(err, PersistError::Malformed { .. }),
                "{}: {:?}",
                name,
                err
            );
        }
        Ok(())
    }

    #[test]
    fn test_save_into_missing_directory_is_io() -> anyhow::Result<()> {
        let dir = TempDir::new()?;
        let path = dir.path().join("no/such/dir/save.json");
        let err = save(&PetRecord::create("Fluffy"), &path).unwrap_err();
        assert!(matches!(err, PersistError::Io { .. }));
        Ok(())
    }
}
