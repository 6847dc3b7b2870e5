use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tempfile::{Builder, NamedTempFile};

const FILE_PREFIX: &str = "parlance-";
const FILE_SUFFIX: &str = ".audio";

/// A temporary audio artifact on local storage.
///
/// The backing file lives until [`AudioResource::release`] is called or the
/// value is dropped, whichever comes first. Dropping covers early returns,
/// panics and cancelled futures, so a request can never leave its scratch
/// files behind.
#[derive(Debug)]
pub struct AudioResource {
    file: Option<NamedTempFile>,
    path: PathBuf,
    len: u64,
}

impl AudioResource {
    /// Writes `bytes` to a fresh, uniquely named file under `dir`.
    pub fn materialize(dir: &Path, bytes: &[u8]) -> Result<Self, AudioResourceError> {
        if bytes.is_empty() {
            return Err(AudioResourceError::Empty);
        }

        let mut file = Builder::new()
            .prefix(FILE_PREFIX)
            .suffix(FILE_SUFFIX)
            .tempfile_in(dir)
            .map_err(AudioResourceError::Write)?;
        file.write_all(bytes).map_err(AudioResourceError::Write)?;
        file.flush().map_err(AudioResourceError::Write)?;

        let path = file.path().to_path_buf();
        tracing::trace!(path = %path.display(), bytes = bytes.len(), "Audio resource created");

        Ok(Self {
            file: Some(file),
            path,
            len: bytes.len() as u64,
        })
    }

    /// Async wrapper around [`AudioResource::materialize`] that keeps file
    /// I/O off the runtime worker threads.
    pub async fn materialize_async(
        dir: PathBuf,
        bytes: Vec<u8>,
    ) -> Result<Self, AudioResourceError> {
        tokio::task::spawn_blocking(move || Self::materialize(&dir, &bytes))
            .await
            .map_err(|e| AudioResourceError::Write(io::Error::other(e.to_string())))?
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn len(&self) -> u64 {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub async fn read_bytes(&self) -> Result<Vec<u8>, AudioResourceError> {
        tokio::fs::read(&self.path)
            .await
            .map_err(AudioResourceError::Read)
    }

    /// Deletes the backing file. Consumes the resource so it cannot be
    /// released twice.
    pub fn release(mut self) -> Result<(), AudioResourceError> {
        match self.file.take() {
            Some(file) => file.close().map_err(AudioResourceError::Cleanup),
            None => Ok(()),
        }
    }
}

impl Drop for AudioResource {
    fn drop(&mut self) {
        if let Some(file) = self.file.take() {
            if let Err(e) = file.close() {
                tracing::warn!(
                    path = %self.path.display(),
                    error = %e,
                    "Failed to remove audio resource on drop"
                );
            }
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AudioResourceError {
    #[error("audio payload is empty")]
    Empty,
    #[error("failed to write audio artifact: {0}")]
    Write(io::Error),
    #[error("failed to read audio artifact: {0}")]
    Read(io::Error),
    #[error("failed to remove audio artifact: {0}")]
    Cleanup(io::Error),
}
