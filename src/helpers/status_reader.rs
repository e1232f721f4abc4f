use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use log::debug;

/// Supplier of the raw status dump text.
///
/// The dump is written by an external monitoring process; the summary engine
/// only needs a completed read of its current contents.
pub trait StatusSource: Send + Sync {
    /// Read the whole current dump
    fn read_status(&self) -> io::Result<String>;

    /// Human readable origin for log messages
    fn describe(&self) -> String;
}

/// Status dump stored in a file that is rewritten in place by its producer
#[derive(Debug, Clone)]
pub struct FileStatusSource {
    path: PathBuf,
}

impl FileStatusSource {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl StatusSource for FileStatusSource {
    fn read_status(&self) -> io::Result<String> {
        let text = fs::read_to_string(&self.path)?;
        debug!("Read {} bytes from {}", text.len(), self.path.display());
        Ok(text)
    }

    fn describe(&self) -> String {
        format!("'{}'", self.path.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_read_file_contents() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "[Playing]\nTitle\n").unwrap();

        let source = FileStatusSource::new(file.path());
        assert_eq!(source.read_status().unwrap(), "[Playing]\nTitle\n");
        assert!(source.describe().contains(&file.path().display().to_string()));
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let source = FileStatusSource::new(dir.path().join("absent"));
        let err = source.read_status().unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }
}
