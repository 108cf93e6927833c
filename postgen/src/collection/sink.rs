use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::collection::Collection;
use crate::error::{Error, Result};

/// Writes the collection as indented JSON and returns the absolute path.
///
/// The parent directory must exist. A failed write may leave a partial file.
pub fn write_collection(collection: &Collection, path: &Path) -> Result<PathBuf> {
    let json = collection.to_json_pretty()?;
    fs::write(path, json).map_err(|e| Error::write(path, e))?;

    let absolute = std::path::absolute(path).map_err(|e| Error::write(path, e))?;
    info!(
        path = %absolute.display(),
        items = collection.len(),
        "Postman collection created successfully"
    );
    Ok(absolute)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_collection_creates_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("postman_collection.json");

        let written = write_collection(&Collection::new("app"), &path).unwrap();

        assert!(written.is_absolute());
        let text = fs::read_to_string(&written).unwrap();
        let parsed: Collection = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed.info.name, "app");
    }

    #[test]
    fn test_write_collection_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.json");
        fs::write(&path, "stale").unwrap();

        write_collection(&Collection::new("fresh"), &path).unwrap();

        let text = fs::read_to_string(&path).unwrap();
        assert!(text.contains("\"fresh\""));
    }

    #[test]
    fn test_write_collection_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("out.json");

        let err = write_collection(&Collection::new("app"), &path).unwrap_err();
        match err {
            Error::Write { path: failed, .. } => assert_eq!(failed, path),
            other => panic!("unexpected error: {other}"),
        }
    }
}
