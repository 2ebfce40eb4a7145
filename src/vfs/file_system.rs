use std::io;
use std::path::Path;
use std::path::PathBuf;

#[cfg(test)]
use mockall::automock;
use tracing::debug;

/// Basic metadata for a filesystem entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileInfo {
    pub is_dir: bool,
    pub len: u64,
}

/// Filesystem operations the store registry depends on.
///
/// A missing entry is reported through `io::ErrorKind::NotFound`; every
/// other error kind is treated as a real failure by callers.
#[cfg_attr(test, automock)]
pub trait FileSystem: Send + Sync {
    /// Returns metadata for the entry at `path`
    fn stat(&self, path: &Path) -> io::Result<FileInfo>;

    /// Creates `path` together with any missing parent directories
    fn mkdir_all(&self, path: &Path) -> io::Result<()>;

    /// Joins `name` onto `base` using the platform separator
    fn path_join(&self, base: &Path, name: &str) -> PathBuf;
}

/// Production filesystem backed by `std::fs`
#[derive(Debug, Default, Clone, Copy)]
pub struct StdFileSystem;

impl FileSystem for StdFileSystem {
    fn stat(&self, path: &Path) -> io::Result<FileInfo> {
        let meta = std::fs::metadata(path)?;
        Ok(FileInfo {
            is_dir: meta.is_dir(),
            len: meta.len(),
        })
    }

    fn mkdir_all(&self, path: &Path) -> io::Result<()> {
        debug!("mkdir_all: {:?}", path);

        std::fs::create_dir_all(path)?;
        sync_parent_dir(path)
    }

    fn path_join(&self, base: &Path, name: &str) -> PathBuf {
        base.join(name)
    }
}

/// Flushes the parent directory entry of a freshly created directory so
/// the entry itself survives a crash.
#[cfg(unix)]
fn sync_parent_dir(path: &Path) -> io::Result<()> {
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    let dir = std::fs::File::open(parent)?;
    dir.sync_all()
}

#[cfg(not(unix))]
fn sync_parent_dir(_path: &Path) -> io::Result<()> {
    Ok(())
}
