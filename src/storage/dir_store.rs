//! File-backed text store.
//!
//! Texts live as `text_<id>.txt` files inside one directory. Reading a file
//! pays the configured artificial delay first, modelling a slow disk.

use std::fs;
use std::path::{Path, PathBuf};
use std::thread;
use std::time::Duration;

use crate::common::{Error, Result, TextId};
use crate::storage::TextStore;

/// Reads texts from a directory of `text_<id>.txt` files.
///
/// # Errors
/// A missing file surfaces as `Error::TextNotFound`; any other read failure
/// propagates as `Error::Io`.
pub struct DirStore {
    dir: PathBuf,
    delay: Duration,
}

impl DirStore {
    /// Open a text directory.
    ///
    /// # Errors
    /// Returns an error if the path does not exist or is not a directory.
    pub fn open<P: AsRef<Path>>(dir: P, delay: Duration) -> Result<Self> {
        let dir = dir.as_ref().to_path_buf();

        if !dir.is_dir() {
            return Err(Error::Config(format!(
                "text directory {} does not exist",
                dir.display()
            )));
        }

        Ok(Self { dir, delay })
    }

    /// Path of the file backing one text.
    fn text_path(&self, id: TextId) -> PathBuf {
        self.dir.join(format!("text_{}.txt", id.0))
    }
}

impl TextStore for DirStore {
    fn fetch(&mut self, id: TextId) -> Result<String> {
        if !self.delay.is_zero() {
            thread::sleep(self.delay);
        }

        let path = self.text_path(id);
        if !path.exists() {
            return Err(Error::TextNotFound(id));
        }

        Ok(fs::read_to_string(path)?)
    }
}
