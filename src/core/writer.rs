//! Create-exclusive file writer
//!
//! Files are never overwritten. A document is first written in full to a
//! uniquely named temporary file beside its target, then published with a hard
//! link. Linking fails with `AlreadyExists` if the target is present, which
//! makes "check and create" a single atomic step: of two concurrent writers
//! for the same path exactly one wins, and a reader sees either no file or the
//! complete contents.

use std::io::{self, ErrorKind};
use std::path::{Path, PathBuf};
use tokio::fs::{self, OpenOptions};
use tokio::io::AsyncWriteExt;
use uuid::Uuid;

/// Result of a create-exclusive write that did not hit an I/O error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteStatus {
    /// The file was created with the given contents
    Written,
    /// A file already existed at the target and was left untouched
    AlreadyExists,
}

/// Write `contents` to `root/relative` unless a file already exists there
///
/// Parent directories are created as needed; existing directories are fine.
///
/// # Errors
///
/// Returns any I/O error other than a regular file already existing at the
/// target (permission denied, disk full, invalid path, ...). A directory or
/// other non-file at the target is an error, not a skip.
///
/// # Example
///
/// ```no_run
/// use quire::core::writer::{write_exclusive, WriteStatus};
/// use std::path::Path;
///
/// # async fn example() -> std::io::Result<()> {
/// let status = write_exclusive(Path::new("outputs"), Path::new("2023/hello.md"), "---\n---\n\nHi").await?;
/// assert_eq!(status, WriteStatus::Written);
/// # Ok(())
/// # }
/// ```
pub async fn write_exclusive(
    root: &Path,
    relative: &Path,
    contents: &str,
) -> io::Result<WriteStatus> {
    let target = root.join(relative);
    let parent = target.parent().unwrap_or(root).to_path_buf();
    let file_name = target.file_name().ok_or_else(|| {
        io::Error::new(
            ErrorKind::InvalidInput,
            format!("target path has no file name: {}", target.display()),
        )
    })?;

    fs::create_dir_all(&parent).await?;

    match fs::metadata(&target).await {
        Ok(meta) if meta.is_file() => return Ok(WriteStatus::AlreadyExists),
        Ok(_) => {
            return Err(io::Error::new(
                ErrorKind::Other,
                format!("target exists and is not a regular file: {}", target.display()),
            ))
        }
        Err(e) if e.kind() == ErrorKind::NotFound => {}
        Err(e) => return Err(e),
    }

    let temp = parent.join(format!(
        ".{}.{}.tmp",
        file_name.to_string_lossy(),
        Uuid::new_v4().simple()
    ));

    let result = publish(&temp, &target, contents).await;

    if let Err(e) = fs::remove_file(&temp).await {
        if e.kind() != ErrorKind::NotFound {
            tracing::warn!(
                temp_path = %temp.display(),
                error = %e,
                "Failed to remove temporary file"
            );
        }
    }

    result
}

async fn publish(temp: &Path, target: &Path, contents: &str) -> io::Result<WriteStatus> {
    write_new_file(temp, contents).await?;

    match fs::hard_link(temp, target).await {
        Ok(()) => Ok(WriteStatus::Written),
        Err(e) if e.kind() == ErrorKind::AlreadyExists => Ok(WriteStatus::AlreadyExists),
        Err(e) if link_unavailable(e.kind()) => {
            tracing::debug!(
                target_path = %target.display(),
                error = %e,
                "Hard link unavailable, falling back to direct exclusive create"
            );
            write_direct(target, contents).await
        }
        Err(e) => Err(e),
    }
}

/// Link errors after which a direct exclusive create is attempted instead
fn link_unavailable(kind: ErrorKind) -> bool {
    matches!(kind, ErrorKind::Unsupported | ErrorKind::PermissionDenied)
}

/// Exclusive create straight at the target
///
/// Still refuses to overwrite, but a reader may observe the file before
/// all of its contents are written.
async fn write_direct(target: &Path, contents: &str) -> io::Result<WriteStatus> {
    match write_new_file(target, contents).await {
        Ok(()) => Ok(WriteStatus::Written),
        Err(e) if e.kind() == ErrorKind::AlreadyExists => Ok(WriteStatus::AlreadyExists),
        Err(e) => Err(e),
    }
}

async fn write_new_file(path: &Path, contents: &str) -> io::Result<()> {
    let mut file = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path)
        .await?;

    let written = async {
        file.write_all(contents.as_bytes()).await?;
        file.flush().await?;
        file.sync_all().await
    }
    .await;

    if let Err(e) = written {
        drop(file);
        let _ = fs::remove_file(path).await;
        return Err(e);
    }

    Ok(())
}

/// Absolute target path for a relative output path
pub fn target_path(root: &Path, relative: &Path) -> PathBuf {
    root.join(relative)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_write_creates_parent_directories() {
        let dir = TempDir::new().unwrap();
        let status = write_exclusive(dir.path(), Path::new("2022/hello.md"), "content")
            .await
            .unwrap();

        assert_eq!(status, WriteStatus::Written);
        let written = std::fs::read_to_string(dir.path().join("2022/hello.md")).unwrap();
        assert_eq!(written, "content");
    }

    #[tokio::test]
    async fn test_existing_file_is_left_untouched() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("hello.md"), "original").unwrap();

        let status = write_exclusive(dir.path(), Path::new("hello.md"), "replacement")
            .await
            .unwrap();

        assert_eq!(status, WriteStatus::AlreadyExists);
        let on_disk = std::fs::read_to_string(dir.path().join("hello.md")).unwrap();
        assert_eq!(on_disk, "original");
    }

    #[tokio::test]
    async fn test_existing_directory_is_not_an_error() {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir_all(dir.path().join("2021")).unwrap();

        let status = write_exclusive(dir.path(), Path::new("2021/a.md"), "a")
            .await
            .unwrap();
        assert_eq!(status, WriteStatus::Written);
    }

    #[tokio::test]
    async fn test_no_temporary_files_left_behind() {
        let dir = TempDir::new().unwrap();
        write_exclusive(dir.path(), Path::new("a.md"), "a")
            .await
            .unwrap();
        write_exclusive(dir.path(), Path::new("a.md"), "b")
            .await
            .unwrap();

        let names: Vec<String> = std::fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().to_string())
            .collect();
        assert_eq!(names, vec!["a.md".to_string()]);
    }

    #[tokio::test]
    async fn test_concurrent_writers_exactly_one_wins() {
        let dir = Arc::new(TempDir::new().unwrap());
        let mut handles = Vec::new();

        for i in 0..8 {
            let dir = dir.clone();
            handles.push(tokio::spawn(async move {
                let contents = format!("writer-{i}-").repeat(4096);
                let status = write_exclusive(dir.path(), Path::new("race/same.md"), &contents)
                    .await
                    .unwrap();
                (status, contents)
            }));
        }

        let mut winners = Vec::new();
        for handle in handles {
            let (status, contents) = handle.await.unwrap();
            if status == WriteStatus::Written {
                winners.push(contents);
            }
        }

        assert_eq!(winners.len(), 1);
        let on_disk = std::fs::read_to_string(dir.path().join("race/same.md")).unwrap();
        assert_eq!(on_disk, winners[0]);
    }

    #[tokio::test]
    async fn test_parent_is_a_file_fails() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("2020"), "not a directory").unwrap();

        let result = write_exclusive(dir.path(), Path::new("2020/a.md"), "a").await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_directory_at_target_fails() {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir_all(dir.path().join("hello.md")).unwrap();

        let result = write_exclusive(dir.path(), Path::new("hello.md"), "a").await;
        assert!(result.is_err());
        assert!(dir.path().join("hello.md").is_dir());
    }

    #[test]
    fn test_link_fallback_kinds() {
        assert!(link_unavailable(ErrorKind::Unsupported));
        assert!(link_unavailable(ErrorKind::PermissionDenied));
        assert!(!link_unavailable(ErrorKind::AlreadyExists));
        assert!(!link_unavailable(ErrorKind::NotFound));
    }

    #[tokio::test]
    async fn test_write_direct_creates_file() {
        let dir = TempDir::new().unwrap();
        let target = dir.path().join("direct.md");

        let status = write_direct(&target, "contents").await.unwrap();

        assert_eq!(status, WriteStatus::Written);
        assert_eq!(std::fs::read_to_string(&target).unwrap(), "contents");
    }

    #[tokio::test]
    async fn test_write_direct_keeps_existing_file() {
        let dir = TempDir::new().unwrap();
        let target = dir.path().join("direct.md");
        std::fs::write(&target, "first").unwrap();

        let status = write_direct(&target, "second").await.unwrap();

        assert_eq!(status, WriteStatus::AlreadyExists);
        assert_eq!(std::fs::read_to_string(&target).unwrap(), "first");
    }

    #[test]
    fn test_target_path() {
        assert_eq!(
            target_path(Path::new("outputs"), Path::new("2022/a.md")),
            Path::new("outputs/2022/a.md")
        );
    }
}
