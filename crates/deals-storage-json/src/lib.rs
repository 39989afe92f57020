//! deals-storage-json
//!
//! File-backed [`ListingStore`]: every accepted listing is appended to a
//! single pretty-printed `listings.json` array, rewritten atomically.

use std::{
    fs::{self, File},
    io::{self, Write},
    path::{Path, PathBuf},
    sync::{Mutex, PoisonError},
};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use deals_core::{ListingStore, StoreError};
use deals_domain::{ListingId, ListingRecord};
use serde::{Deserialize, Serialize};

const LISTINGS_FILE: &str = "listings.json";
const TMP_SUFFIX: &str = "tmp";

/// One persisted listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredListing {
    pub id: ListingId,
    pub created_at: DateTime<Utc>,
    pub listing: ListingRecord,
}

pub struct JsonListingStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl JsonListingStore {
    pub fn new(data_dir: PathBuf) -> Result<Self, StoreError> {
        fs::create_dir_all(&data_dir).map_err(io_error)?;
        Ok(Self {
            path: data_dir.join(LISTINGS_FILE),
            write_lock: Mutex::new(()),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// All listings written so far, oldest first.
    pub fn list(&self) -> Result<Vec<StoredListing>, StoreError> {
        let _lock = self.write_lock.lock().unwrap_or_else(PoisonError::into_inner);
        read_entries(&self.path)
    }

    fn append(&self, listing: ListingRecord) -> Result<ListingId, StoreError> {
        let _lock = self.write_lock.lock().unwrap_or_else(PoisonError::into_inner);
        let mut entries = read_entries(&self.path)?;
        let id = ListingId::new();
        entries.push(StoredListing {
            id,
            created_at: Utc::now(),
            listing,
        });
        let json = serde_json::to_string_pretty(&entries)
            .map_err(|err| StoreError::Serialization(err.to_string()))?;
        let tmp = tmp_path(&self.path);
        write_atomic(&tmp, &json).map_err(io_error)?;
        fs::rename(&tmp, &self.path).map_err(io_error)?;
        Ok(id)
    }
}

#[async_trait]
impl ListingStore for JsonListingStore {
    async fn submit_listing(&self, record: ListingRecord) -> Result<ListingId, StoreError> {
        let kind = record.kind();
        match self.append(record) {
            Ok(id) => {
                tracing::debug!(%id, kind, path = %self.path.display(), "listing written");
                Ok(id)
            }
            Err(err) => {
                tracing::warn!(
                    kind,
                    path = %self.path.display(),
                    error = %err,
                    "listing write failed"
                );
                Err(err)
            }
        }
    }
}

fn read_entries(path: &Path) -> Result<Vec<StoredListing>, StoreError> {
    if !path.exists() {
        return Ok(Vec::new());
    }
    let data = fs::read_to_string(path).map_err(io_error)?;
    if data.trim().is_empty() {
        return Ok(Vec::new());
    }
    serde_json::from_str(&data).map_err(|err| StoreError::Serialization(err.to_string()))
}

fn io_error(err: io::Error) -> StoreError {
    StoreError::Io(err.to_string())
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

fn write_atomic(path: &Path, data: &str) -> io::Result<()> {
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    Ok(())
}
