use std::{fs, io, marker::PhantomData, path::PathBuf, sync::Arc};

use parking_lot::RwLock;
use serde::{Serialize, de::DeserializeOwned};

use crate::repository::entities::Result;

/// A whole-document JSON file on disk.
///
/// Every operation reads the complete file and every mutation rewrites it. A
/// missing file reads as `D::default()`. The embedded lock serializes
/// read-modify-write cycles within this process only; concurrent writers in
/// other processes race with last-writer-wins semantics, and callers that need
/// stronger guarantees must serialize around the [`Repository`] themselves.
///
/// [`Repository`]: crate::Repository
#[derive(Debug)]
pub(crate) struct JsonFile<D> {
    path: PathBuf,
    guard: Arc<RwLock<()>>,
    kind: PhantomData<fn() -> D>,
}

// Derived Clone would demand D: Clone
impl<D> Clone for JsonFile<D> {
    fn clone(&self) -> Self {
        Self {
            path: self.path.clone(),
            guard: self.guard.clone(),
            kind: PhantomData,
        }
    }
}

impl<D> JsonFile<D>
where
    D: Default + Serialize + DeserializeOwned,
{
    pub fn open(path: PathBuf) -> Self {
        Self {
            path,
            guard: Arc::new(RwLock::new(())),
            kind: PhantomData,
        }
    }

    pub fn read(&self) -> Result<D> {
        let _shared = self.guard.read();

        self.read_unlocked()
    }

    /// Run `op` against the current document and persist whatever it leaves
    /// behind, returning its result.
    pub fn modify<R>(&self, op: impl FnOnce(&mut D) -> R) -> Result<R> {
        let _exclusive = self.guard.write();

        let mut document = self.read_unlocked()?;
        let out = op(&mut document);

        let text = serde_json::to_string_pretty(&document)?;
        fs::write(&self.path, text)?;

        Ok(out)
    }

    fn read_unlocked(&self) -> Result<D> {
        match fs::read_to_string(&self.path) {
            Ok(text) => Ok(serde_json::from_str(&text)?),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(D::default()),
            Err(err) => Err(err.into()),
        }
    }
}
