//! Environment abstractions for persistence and OS preference.
//!
//! The manager never talks to the filesystem, browser storage or the OS
//! directly. It goes through [`ThemeStorage`] and [`ColorSchemeSource`],
//! so the same logic runs on a desktop, in a browser (see the `web`
//! module on wasm32) and in tests.

use std::collections::BTreeMap;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::theme::detect_color_mode;

/// Abstraction over a persistent string key-value store.
pub trait ThemeStorage {
    /// Read the value stored under `key`.
    fn get(&self, key: &str) -> io::Result<Option<String>>;

    /// Store `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: &str) -> io::Result<()>;

    /// Delete `key`. Deleting a missing key is not an error.
    fn remove(&mut self, key: &str) -> io::Result<()>;
}

/// Abstraction over the OS "prefers dark color scheme" signal.
pub trait ColorSchemeSource {
    /// Returns true if the user currently prefers a dark color scheme.
    fn prefers_dark(&self) -> bool;
}

// === Storage implementations ===

/// Volatile storage backed by a map.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: BTreeMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate an entry.
    pub fn with_entry(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.entries.insert(key.into(), value.into());
        self
    }

    /// Direct read without the `io::Result` wrapper.
    pub fn entry(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }
}

impl ThemeStorage for MemoryStorage {
    fn get(&self, key: &str) -> io::Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> io::Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> io::Result<()> {
        self.entries.remove(key);
        Ok(())
    }
}

/// Storage persisted as a single JSON object on disk.
///
/// The file is re-read on every access, so changes made by other processes
/// are picked up. A missing file reads as empty; parent directories are
/// created on the first write.
#[derive(Debug, Clone)]
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> io::Result<BTreeMap<String, String>> {
        match std::fs::read_to_string(&self.path) {
            Ok(content) if content.trim().is_empty() => Ok(BTreeMap::new()),
            Ok(content) => serde_json::from_str(&content)
                .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(BTreeMap::new()),
            Err(e) => Err(e),
        }
    }

    fn save(&self, entries: &BTreeMap<String, String>) -> io::Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let content = serde_json::to_string_pretty(entries)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        std::fs::write(&self.path, content)
    }
}

impl ThemeStorage for FileStorage {
    fn get(&self, key: &str) -> io::Result<Option<String>> {
        Ok(self.load()?.remove(key))
    }

    fn set(&mut self, key: &str, value: &str) -> io::Result<()> {
        let mut entries = self.load()?;
        entries.insert(key.to_string(), value.to_string());
        self.save(&entries)
    }

    fn remove(&mut self, key: &str) -> io::Result<()> {
        let mut entries = self.load()?;
        if entries.remove(key).is_some() {
            self.save(&entries)?;
        }
        Ok(())
    }
}

// === Color scheme implementations ===

/// OS preference via [`detect_color_mode`].
#[derive(Debug, Default, Clone, Copy)]
pub struct OsColorScheme;

impl ColorSchemeSource for OsColorScheme {
    fn prefers_dark(&self) -> bool {
        detect_color_mode().is_dark()
    }
}

/// Mock preference for testing.
///
/// Clones share the flag, so a test can keep one handle and flip the
/// preference after handing another to a manager.
#[derive(Debug, Clone, Default)]
pub struct MockColorScheme {
    dark: Arc<AtomicBool>,
}

impl MockColorScheme {
    pub fn light() -> Self {
        Self::default()
    }

    pub fn dark() -> Self {
        Self {
            dark: Arc::new(AtomicBool::new(true)),
        }
    }

    pub fn set_prefers_dark(&self, dark: bool) {
        self.dark.store(dark, Ordering::SeqCst);
    }
}

impl ColorSchemeSource for MockColorScheme {
    fn prefers_dark(&self) -> bool {
        self.dark.load(Ordering::SeqCst)
    }
}
