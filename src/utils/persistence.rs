//! Durable key-value storage under ~/.yaiba/.
//!
//! The game only needs a single named entry (the best score), stored the way a
//! browser would keep it in local storage: a string value under a fixed key.

use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Storage file holding every key-value entry.
pub const STORAGE_FILE: &str = "storage.json";

/// Key the best score is stored under.
pub const HIGH_SCORE_KEY: &str = "wingNoYaibaHighScore";

/// Get the ~/.yaiba/ directory path, creating it if needed.
pub fn yaiba_dir() -> io::Result<PathBuf> {
    let home_dir = dirs::home_dir().ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::NotFound,
            "Could not determine home directory",
        )
    })?;
    let dir = home_dir.join(".yaiba");
    fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// Get the full path for a file in ~/.yaiba/.
pub fn save_path(filename: &str) -> io::Result<PathBuf> {
    Ok(yaiba_dir()?.join(filename))
}

/// Load a JSON file, returning `T::default()` if missing or invalid.
pub fn load_json_or_default<T: Default + serde::de::DeserializeOwned>(path: &Path) -> T {
    match fs::read_to_string(path) {
        Ok(json) => serde_json::from_str(&json).unwrap_or_else(|e| {
            tracing::warn!(path = %path.display(), error = %e, "ignoring unreadable file");
            T::default()
        }),
        Err(_) => T::default(),
    }
}

/// Save a value as pretty-printed JSON.
pub fn save_json<T: serde::Serialize>(path: &Path, data: &T) -> io::Result<()> {
    let json = serde_json::to_string_pretty(data)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    fs::write(path, json)
}

/// A string key-value store.
pub trait ScoreStore {
    fn read(&self, key: &str) -> Option<String>;
    fn write(&mut self, key: &str, value: &str) -> io::Result<()>;
    fn remove(&mut self, key: &str) -> io::Result<()>;
}

impl<T: ScoreStore + ?Sized> ScoreStore for Box<T> {
    fn read(&self, key: &str) -> Option<String> {
        (**self).read(key)
    }

    fn write(&mut self, key: &str, value: &str) -> io::Result<()> {
        (**self).write(key, value)
    }

    fn remove(&mut self, key: &str) -> io::Result<()> {
        (**self).remove(key)
    }
}

/// Read the best score. Absent or unparseable values count as 0.
pub fn load_best_score(store: &dyn ScoreStore) -> u32 {
    let Some(raw) = store.read(HIGH_SCORE_KEY) else {
        return 0;
    };
    match raw.trim().parse::<u32>() {
        Ok(score) => score,
        Err(_) => {
            tracing::warn!(value = %raw, "stored best score is not a number, using 0");
            0
        }
    }
}

/// Write the best score.
pub fn save_best_score(store: &mut dyn ScoreStore, score: u32) -> io::Result<()> {
    store.write(HIGH_SCORE_KEY, &score.to_string())
}

/// JSON-file backed store. Every write rewrites the whole file.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl FileStore {
    /// Open ~/.yaiba/storage.json.
    pub fn open_default() -> io::Result<Self> {
        Ok(Self::open(save_path(STORAGE_FILE)?))
    }

    /// Open a store at an explicit path. A missing or corrupt file starts empty.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let entries = load_json_or_default(&path);
        Self { path, entries }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ScoreStore for FileStore {
    fn read(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn write(&mut self, key: &str, value: &str) -> io::Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        save_json(&self.path, &self.entries)
    }

    fn remove(&mut self, key: &str) -> io::Result<()> {
        if self.entries.remove(key).is_some() {
            save_json(&self.path, &self.entries)?;
        }
        Ok(())
    }
}

/// In-memory store, used when no home directory is available and in tests.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ScoreStore for MemoryStore {
    fn read(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn write(&mut self, key: &str, value: &str) -> io::Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> io::Result<()> {
        self.entries.remove(key);
        Ok(())
    }
}
