use std::path::Path;

use anyhow::Context;
use bytes::Bytes;

/// Reads a picked or dropped archive into memory, returning its display name and contents.
pub fn read_package(path: &Path) -> anyhow::Result<(String, Bytes)> {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default();
    let data = std::fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;
    Ok((name, Bytes::from(data)))
}

/// Name and contents of a file dropped onto the window.
///
/// Native drops carry a path; web-style drops carry the bytes directly.
pub fn from_dropped(file: &egui::DroppedFile) -> anyhow::Result<(String, Bytes)> {
    if let Some(bytes) = &file.bytes {
        return Ok((file.name.clone(), Bytes::copy_from_slice(bytes)));
    }
    match &file.path {
        Some(path) => read_package(path),
        None => anyhow::bail!("Dropped file {} has no readable content", file.name),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_name_and_bytes_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pick_place.zip");
        std::fs::write(&path, b"PK\x03\x04").unwrap();

        let (name, data) = read_package(&path).unwrap();
        assert_eq!(name, "pick_place.zip");
        assert_eq!(data.as_ref(), b"PK\x03\x04");
    }

    #[test]
    fn missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_package(&dir.path().join("gone.zip")).unwrap_err();
        assert!(err.to_string().contains("gone.zip"));
    }

    #[test]
    fn dropped_bytes_take_precedence_over_path() {
        let file = egui::DroppedFile {
            name: "web.zip".into(),
            bytes: Some(std::sync::Arc::from(&b"PK"[..])),
            ..Default::default()
        };
        let (name, data) = from_dropped(&file).unwrap();
        assert_eq!(name, "web.zip");
        assert_eq!(data.as_ref(), b"PK");
    }
}
