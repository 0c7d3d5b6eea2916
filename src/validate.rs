//! Single-file validation: open, read, decode as generic JSON.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};

/// Check that `path` holds well-formed JSON.
///
/// Stops at the first failing stage: open, read, or decode. The decoded
/// value is discarded; only well-formedness matters. The handle is dropped
/// on every exit path.
pub fn validate_file(path: &Path) -> Result<()> {
    let mut file = File::open(path).with_context(|| format!("open {}", path.display()))?;

    let mut contents = Vec::new();
    file.read_to_end(&mut contents)
        .with_context(|| format!("read {}", path.display()))?;

    let _: serde_json::Value = serde_json::from_slice(&contents)
        .with_context(|| format!("parse {} as JSON", path.display()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn well_formed_json_passes() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("ok.json");
        fs::write(&path, r#"{"a":1,"b":[2,3]}"#).expect("write");

        validate_file(&path).expect("should validate");
    }

    #[test]
    fn scalar_json_passes() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("scalar.json");
        fs::write(&path, "42").expect("write");

        validate_file(&path).expect("should validate");
    }

    #[test]
    fn malformed_json_fails_with_path_in_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("broken.json");
        fs::write(&path, r#"{"a":"#).expect("write");

        let err = validate_file(&path).expect_err("should fail");
        let rendered = format!("{err:#}");
        assert!(rendered.contains("parse"));
        assert!(rendered.contains(path.display().to_string().as_str()));
    }

    #[test]
    fn missing_file_fails_at_open() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("absent.json");

        let err = validate_file(&path).expect_err("should fail");
        let rendered = format!("{err:#}");
        assert!(rendered.contains("open"));
        assert!(rendered.contains(path.display().to_string().as_str()));
    }

    #[test]
    fn directory_fails_before_decode() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("subdir.json");
        fs::create_dir(&path).expect("mkdir");

        let err = validate_file(&path).expect_err("should fail");
        let rendered = format!("{err:#}");
        assert!(rendered.contains(path.display().to_string().as_str()));
        assert!(!rendered.contains("parse"));
    }
}
