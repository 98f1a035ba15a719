//! File-write capability.

use std::io;
use std::path::Path;

/// Capability for writing generated document bytes to a path.
///
/// Injected so tests (and non-filesystem targets) can capture output instead
/// of touching disk.
pub trait FileSink {
    fn write(&self, path: &Path, bytes: &[u8]) -> io::Result<()>;
}

/// Standard filesystem sink; creates missing parent directories.
#[derive(Debug, Default)]
pub struct FsSink;

impl FileSink for FsSink {
    fn write(&self, path: &Path, bytes: &[u8]) -> io::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fs_sink_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/out/sitemap.xml");

        FsSink.write(&path, b"<urlset/>").unwrap();

        assert_eq!(std::fs::read(&path).unwrap(), b"<urlset/>");
    }
}
