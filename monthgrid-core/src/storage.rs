//! Named-slot key-value storage.
//!
//! Event persistence goes through the [`Storage`] trait so the rest of the
//! crate never reaches for a global. [`FileStorage`] keeps one file per slot
//! in a directory; [`MemoryStorage`] keeps slots in a map.

use std::cell::RefCell;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::error::{MonthGridError, MonthGridResult};

/// A synchronous string store addressed by slot name.
pub trait Storage {
    /// Read a slot. `Ok(None)` when the slot has never been written.
    fn get(&self, slot: &str) -> MonthGridResult<Option<String>>;

    /// Replace a slot's content in a single write.
    fn set(&self, slot: &str, value: &str) -> MonthGridResult<()>;
}

impl<S: Storage + ?Sized> Storage for &S {
    fn get(&self, slot: &str) -> MonthGridResult<Option<String>> {
        (**self).get(slot)
    }

    fn set(&self, slot: &str, value: &str) -> MonthGridResult<()> {
        (**self).set(slot, value)
    }
}

/// Slots stored as `<dir>/<slot>.json`.
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        FileStorage { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, slot: &str) -> MonthGridResult<PathBuf> {
        let valid = !slot.is_empty()
            && slot
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if !valid {
            return Err(MonthGridError::Storage(format!("Invalid slot name '{}'", slot)));
        }
        Ok(self.dir.join(format!("{}.json", slot)))
    }
}

impl Storage for FileStorage {
    fn get(&self, slot: &str) -> MonthGridResult<Option<String>> {
        let path = self.path_for(slot)?;

        match std::fs::read_to_string(&path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set(&self, slot: &str, value: &str) -> MonthGridResult<()> {
        let path = self.path_for(slot)?;
        std::fs::create_dir_all(&self.dir).map_err(|e| {
            MonthGridError::Storage(format!("Could not create {}: {e}", self.dir.display()))
        })?;

        // Write then rename so readers never see a half-written slot.
        let temp = path.with_extension("json.tmp");
        std::fs::write(&temp, value).map_err(|e| {
            MonthGridError::Storage(format!("Could not write {}: {e}", temp.display()))
        })?;
        std::fs::rename(&temp, &path).map_err(|e| {
            MonthGridError::Storage(format!("Could not replace {}: {e}", path.display()))
        })?;

        Ok(())
    }
}

/// In-process storage, mostly for tests and previews.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    slots: RefCell<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Storage for MemoryStorage {
    fn get(&self, slot: &str) -> MonthGridResult<Option<String>> {
        Ok(self.slots.borrow().get(slot).cloned())
    }

    fn set(&self, slot: &str, value: &str) -> MonthGridResult<()> {
        self.slots
            .borrow_mut()
            .insert(slot.to_string(), value.to_string());
        Ok(())
    }
}
