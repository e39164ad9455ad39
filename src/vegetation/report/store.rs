//! Filesystem store for uploads and result documents, keyed by session id.
//!
//! Layout under the store root:
//! - `uploads/{session_id}_{before|after}_{original file name}`
//! - `results/{session_id}_results.json`

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, info};
use uuid::Uuid;
use crate::vegetation::common::error::{AnalysisError, Result};
use crate::vegetation::report::document::AnalysisReport;

const UPLOADS_DIR: &str = "uploads";
const RESULTS_DIR: &str = "results";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadRole {
    Before,
    After,
}

impl UploadRole {
    pub fn as_str(self) -> &'static str {
        match self {
            UploadRole::Before => "before",
            UploadRole::After => "after",
        }
    }
}

#[derive(Debug, Clone)]
pub struct ResultStore {
    uploads_dir: PathBuf,
    results_dir: PathBuf,
}

impl ResultStore {
    /// Opens a store rooted at `root`, creating its directories if needed.
    pub fn open<P: AsRef<Path>>(root: P) -> Result<Self> {
        let root = root.as_ref();
        let store = Self {
            uploads_dir: root.join(UPLOADS_DIR),
            results_dir: root.join(RESULTS_DIR),
        };
        std::fs::create_dir_all(&store.uploads_dir)?;
        std::fs::create_dir_all(&store.results_dir)?;
        debug!("Opened result store at {}", root.display());
        Ok(store)
    }

    pub fn new_session_id() -> String {
        Uuid::new_v4().to_string()
    }

    /// Canonical hyphenated form; anything that is not a UUID is never a stored session.
    fn canonical_session_id(session_id: &str) -> Result<String> {
        Uuid::parse_str(session_id)
            .map(|id| id.hyphenated().to_string())
            .map_err(|_| AnalysisError::SessionNotFound(session_id.to_string()))
    }

    pub fn results_path(&self, session_id: &str) -> Result<PathBuf> {
        let session_id = Self::canonical_session_id(session_id)?;
        Ok(self.results_dir.join(format!("{}_results.json", session_id)))
    }

    /// Copies an input image into the uploads directory and returns the stored file name.
    pub fn stage_upload(&self, session_id: &str, role: UploadRole, source: &Path) -> Result<String> {
        let session_id = Self::canonical_session_id(session_id)?;
        let original = source
            .file_name()
            .and_then(|name| name.to_str())
            .ok_or_else(|| {
                AnalysisError::InputReadError(format!("{}: no file name", source.display()))
            })?;

        let file_name = format!("{}_{}_{}", session_id, role.as_str(), original);
        let destination = self.uploads_dir.join(&file_name);
        std::fs::copy(source, &destination).map_err(|e| {
            AnalysisError::OutputWriteError(format!("{}: {}", destination.display(), e))
        })?;

        debug!("Staged {} as {}", source.display(), destination.display());
        Ok(file_name)
    }

    pub fn upload_path(&self, file_name: &str) -> PathBuf {
        self.uploads_dir.join(file_name)
    }

    /// Writes `report` under its session id, overwriting an earlier document.
    pub fn save(&self, report: &AnalysisReport) -> Result<PathBuf> {
        let session_id = report.session_id.as_deref().ok_or_else(|| {
            AnalysisError::OutputWriteError("report has no session id".to_string())
        })?;
        let path = self.results_path(session_id)?;

        let file = File::create(&path)
            .map_err(|e| AnalysisError::OutputWriteError(format!("{}: {}", path.display(), e)))?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, report)?;
        writer.flush()?;

        info!(path = %path.display(), "Results saved");
        Ok(path)
    }

    pub fn load(&self, session_id: &str) -> Result<AnalysisReport> {
        let path = self.results_path(session_id)?;
        if !path.exists() {
            return Err(AnalysisError::SessionNotFound(session_id.to_string()));
        }

        let text = std::fs::read_to_string(&path)
            .map_err(|e| AnalysisError::InputReadError(format!("{}: {}", path.display(), e)))?;
        Ok(serde_json::from_str(&text)?)
    }
}
