use std::path::{Path, PathBuf};

use chrono::Utc;
use log::{info, warn};
use uuid::Uuid;
use walkdir::WalkDir;

use crate::constants;

lazy_static::lazy_static! {
    // {unix_millis}-{uuid}.pdf, the only shape this service ever writes
    static ref STORED_NAME_RE: regex::Regex =
        regex::Regex::new(r"^\d+-[0-9a-f-]{36}\.pdf$").unwrap();
}

/// Storage strategy for incoming uploads: owns the destination directory,
/// assigns stored filenames and removes files once a request is done.
#[derive(Clone)]
pub struct UploadStore {
    upload_dir: PathBuf,
    max_file_size: usize,
}

impl UploadStore {
    pub fn new(upload_dir: PathBuf, max_file_size: usize) -> Self {
        Self {
            upload_dir,
            max_file_size,
        }
    }

    pub fn get_upload_dir(&self) -> &PathBuf {
        &self.upload_dir
    }

    pub fn max_file_size(&self) -> usize {
        self.max_file_size
    }

    /// Destination for one incoming file. The millisecond prefix keeps
    /// names sortable by arrival, the uuid keeps concurrent requests from
    /// colliding.
    pub fn assign_path(&self) -> PathBuf {
        let name = format!(
            "{}-{}.{}",
            Utc::now().timestamp_millis(),
            Uuid::new_v4(),
            constants::UPLOAD_EXT
        );
        self.upload_dir.join(name)
    }

    pub async fn ensure_dir(&self) -> std::io::Result<()> {
        tokio::fs::create_dir_all(&self.upload_dir).await
    }

    /// Removing an already-gone file is fine; any other failure is logged
    /// and swallowed so cleanup never masks the request outcome.
    pub async fn remove(&self, path: &Path) {
        match tokio::fs::remove_file(path).await {
            Ok(()) => info!("Removed upload {:?}", path),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => warn!("Failed to remove upload {:?}: {}", path, e),
        }
    }

    /// Deletes files left behind by a crash mid-request. Only names this
    /// service itself assigns are touched.
    pub fn sweep_stale(&self) -> usize {
        let mut removed = 0;

        for entry in WalkDir::new(&self.upload_dir)
            .min_depth(1)
            .max_depth(1)
            .into_iter()
            .filter_map(|e| e.ok())
        {
            let path = entry.path();
            if !path.is_file() {
                continue;
            }
            let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
                continue;
            };
            if !STORED_NAME_RE.is_match(name) {
                continue;
            }

            match std::fs::remove_file(path) {
                Ok(()) => {
                    warn!("Removed stale upload {:?}", path);
                    removed += 1;
                }
                Err(e) => warn!("Failed to remove stale upload {:?}: {}", path, e),
            }
        }

        removed
    }
}
