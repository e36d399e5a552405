// Flat-file JSON persistence for the record collections.
//
// Every collection lives in its own file as a pretty-printed JSON array
// and is rewritten in full on mutation. Each file has a dedicated
// read-write lock: readers share, writers serialize, and a reader never
// observes a half-written file. Cross-file consistency is out of scope —
// a failure between two related writes leaves the files inconsistent.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;
use tokio::sync::RwLock;

use crate::core::{AppError, Result};

/// The flat files backing the service
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataFile {
    Products,
    Inventory,
    Orders,
    Cart,
}

impl DataFile {
    pub const ALL: [DataFile; 4] = [
        DataFile::Products,
        DataFile::Inventory,
        DataFile::Orders,
        DataFile::Cart,
    ];

    pub fn file_name(self) -> &'static str {
        match self {
            DataFile::Products => "product.json",
            DataFile::Inventory => "inventory.json",
            DataFile::Orders => "orders.json",
            DataFile::Cart => "cart.json",
        }
    }
}

struct FileLocks {
    products: RwLock<()>,
    inventory: RwLock<()>,
    orders: RwLock<()>,
    cart: RwLock<()>,
}

/// JSON-array store over a data directory
pub struct JsonFileStore {
    root: PathBuf,
    locks: FileLocks,
}

impl JsonFileStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            locks: FileLocks {
                products: RwLock::new(()),
                inventory: RwLock::new(()),
                orders: RwLock::new(()),
                cart: RwLock::new(()),
            },
        }
    }

    /// Create any missing data file as an empty collection
    pub async fn ensure_files(&self) -> Result<()> {
        for file in DataFile::ALL {
            let path = self.path_for(file);
            match tokio::fs::try_exists(&path).await {
                Ok(true) => {}
                Ok(false) => {
                    tracing::info!("Creating empty data file {}", file.file_name());
                    tokio::fs::write(&path, b"[]").await?;
                }
                Err(err) => return Err(AppError::Io(err)),
            }
        }

        Ok(())
    }

    /// Load the full collection from the named file
    pub async fn load<T: DeserializeOwned>(&self, file: DataFile) -> Result<Vec<T>> {
        let _guard = self.lock_for(file).read().await;
        self.read_records(file).await
    }

    /// Read-modify-write the named file under its write lock
    ///
    /// The closure mutates the loaded collection and returns a value for
    /// the caller. If the closure fails, nothing is written back.
    pub async fn mutate<T, R, F>(&self, file: DataFile, apply: F) -> Result<R>
    where
        T: DeserializeOwned + Serialize,
        F: FnOnce(&mut Vec<T>) -> Result<R>,
    {
        let _guard = self.lock_for(file).write().await;
        let mut records = self.read_records(file).await?;
        let outcome = apply(&mut records)?;
        self.write_records(file, &records).await?;

        Ok(outcome)
    }

    fn lock_for(&self, file: DataFile) -> &RwLock<()> {
        match file {
            DataFile::Products => &self.locks.products,
            DataFile::Inventory => &self.locks.inventory,
            DataFile::Orders => &self.locks.orders,
            DataFile::Cart => &self.locks.cart,
        }
    }

    fn path_for(&self, file: DataFile) -> PathBuf {
        self.root.join(file.file_name())
    }

    async fn read_records<T: DeserializeOwned>(&self, file: DataFile) -> Result<Vec<T>> {
        let path = self.path_for(file);
        let bytes = tokio::fs::read(&path).await.map_err(|err| {
            if err.kind() == ErrorKind::NotFound {
                AppError::MissingDataFile(file.file_name().to_string())
            } else {
                AppError::Io(err)
            }
        })?;

        serde_json::from_slice(&bytes).map_err(|err| AppError::CorruptDataFile {
            file: file.file_name().to_string(),
            detail: err.to_string(),
        })
    }

    async fn write_records<T: Serialize>(&self, file: DataFile, records: &[T]) -> Result<()> {
        // Pretty-printed with 2-space indent, matching the legacy files
        let bytes = serde_json::to_vec_pretty(records)?;
        tokio::fs::write(self.path_for(file), bytes).await?;

        Ok(())
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

/// Next id for an append-only collection: max(existing) + 1, 1 when empty
pub fn next_record_id(ids: impl Iterator<Item = i64>) -> i64 {
    ids.max().map_or(1, |max| max + 1)
}
