use crate::error::{Result, ScoreError};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

const RESUME_EXTENSIONS: [&str; 2] = ["txt", "md"];

/// A file path yields itself; a directory yields its `.txt`/`.md` files, sorted.
pub fn collect_resume_files(root: &Path) -> Result<Vec<PathBuf>> {
    if !root.exists() {
        return Err(ScoreError::PathNotFound(root.display().to_string()));
    }
    if root.is_file() {
        return Ok(vec![root.to_path_buf()]);
    }

    let mut files: Vec<PathBuf> = WalkDir::new(root)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| entry.path().to_path_buf())
        .filter(|path| has_resume_extension(path))
        .collect();
    files.sort();
    Ok(files)
}

fn has_resume_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            RESUME_EXTENSIONS
                .iter()
                .any(|wanted| ext.eq_ignore_ascii_case(wanted))
        })
        .unwrap_or(false)
}

/// Undecodable content is treated as a failed extraction and scored as empty text.
pub fn read_resume_text(path: &Path) -> Result<String> {
    match std::fs::read_to_string(path) {
        Ok(text) => Ok(text),
        Err(e) if e.kind() == ErrorKind::NotFound => {
            Err(ScoreError::PathNotFound(path.display().to_string()))
        }
        Err(e) if e.kind() == ErrorKind::InvalidData => {
            tracing::warn!(path = %path.display(), "resume is not valid UTF-8; scoring empty text");
            Ok(String::new())
        }
        Err(e) => Err(ScoreError::Io(e)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn collect_walks_directory_for_text_resumes() {
        let dir = TempDir::new().expect("temp dir should be created");
        fs::create_dir_all(dir.path().join("nested")).expect("nested dir should create");
        fs::write(dir.path().join("b.txt"), "b").expect("b should write");
        fs::write(dir.path().join("nested/a.MD"), "a").expect("a should write");
        fs::write(dir.path().join("photo.png"), [0u8, 1]).expect("png should write");

        let files = collect_resume_files(dir.path()).expect("walk should succeed");
        assert_eq!(files.len(), 2);
        assert!(files[0].ends_with("b.txt"));
        assert!(files[1].ends_with("nested/a.MD"));
    }

    #[test]
    fn collect_rejects_missing_path() {
        let dir = TempDir::new().expect("temp dir should be created");
        let err = collect_resume_files(&dir.path().join("nope")).expect_err("should fail");
        assert!(matches!(err, ScoreError::PathNotFound(_)));
    }

    #[test]
    fn invalid_utf8_reads_as_empty_text() {
        let dir = TempDir::new().expect("temp dir should be created");
        let path = dir.path().join("resume.txt");
        fs::write(&path, [0xffu8, 0xfe, 0x00]).expect("binary should write");
        assert_eq!(read_resume_text(&path).expect("read should absorb"), "");
    }
}
