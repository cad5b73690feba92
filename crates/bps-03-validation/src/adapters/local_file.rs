//! Build a [`FileCandidate`] from a path on disk.

use std::io;
use std::path::Path;

use crate::domain::FileCandidate;

/// MIME type guessed from the file extension.
///
/// Unknown extensions map to `application/octet-stream`, which no form accepts.
pub fn mime_for_extension(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);

    match ext.as_deref() {
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("png") => "image/png",
        Some("webp") => "image/webp",
        Some("gif") => "image/gif",
        Some("bmp") => "image/bmp",
        _ => "application/octet-stream",
    }
}

/// Read the metadata of `path` and describe it for the cover gate.
pub fn inspect_file(path: &Path) -> io::Result<FileCandidate> {
    let metadata = std::fs::metadata(path)?;
    if !metadata.is_file() {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("{} is not a regular file", path.display()),
        ));
    }

    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    Ok(FileCandidate::new(name, mime_for_extension(path), metadata.len()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_mime_for_extension() {
        assert_eq!(mime_for_extension(Path::new("a/SAMPUL.JPG")), "image/jpeg");
        assert_eq!(mime_for_extension(Path::new("b.webp")), "image/webp");
        assert_eq!(mime_for_extension(Path::new("c")), "application/octet-stream");
    }

    #[test]
    fn test_inspect_file_reads_size() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cover.png");
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(&[0u8; 2048]).unwrap();

        let candidate = inspect_file(&path).unwrap();
        assert_eq!(candidate.name, "cover.png");
        assert_eq!(candidate.mime, "image/png");
        assert_eq!(candidate.size, 2048);
    }

    #[test]
    fn test_inspect_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        assert!(inspect_file(dir.path()).is_err());
    }
}
