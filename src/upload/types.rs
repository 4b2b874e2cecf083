use crate::utils::file_size::FileSizeUtils;
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Messages attached to an item whose simulated validation failed.
pub const VALIDATION_ERRORS: [&str; 3] = [
    "Missing supervisor name in row 5",
    "Invalid zip code format in row 12",
    "Missing material description in row 8",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct UploadId(pub(crate) u64);

impl fmt::Display for UploadId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadStatus {
    Pending,
    Processing,
    Success,
    Error,
}

impl UploadStatus {
    pub fn label(self) -> &'static str {
        match self {
            UploadStatus::Pending => "Pending",
            UploadStatus::Processing => "Processing",
            UploadStatus::Success => "Success",
            UploadStatus::Error => "Error",
        }
    }

    pub fn is_terminal(self) -> bool {
        matches!(self, UploadStatus::Success | UploadStatus::Error)
    }
}

/// A file the user picked. Only metadata is captured; content is never read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    pub path: PathBuf,
    pub name: String,
    pub size_bytes: u64,
}

impl SelectedFile {
    pub fn new(path: impl Into<PathBuf>, size_bytes: u64) -> Self {
        let path = path.into();
        let name = path
            .file_name()
            .unwrap_or_default()
            .to_string_lossy()
            .to_string();
        Self {
            path,
            name,
            size_bytes,
        }
    }

    pub fn from_path(path: &Path) -> io::Result<Self> {
        let metadata = fs::metadata(path)?;
        Ok(Self::new(path, metadata.len()))
    }

    pub fn display_size(&self) -> String {
        FileSizeUtils::format_megabytes(self.size_bytes)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadItem {
    pub(crate) id: UploadId,
    pub(crate) file: SelectedFile,
    pub(crate) status: UploadStatus,
    pub(crate) progress: u8,
    pub(crate) errors: Vec<String>,
}

impl UploadItem {
    pub(crate) fn pending(id: UploadId, file: SelectedFile) -> Self {
        Self {
            id,
            file,
            status: UploadStatus::Pending,
            progress: 0,
            errors: Vec::new(),
        }
    }

    pub fn id(&self) -> UploadId {
        self.id
    }

    pub fn file(&self) -> &SelectedFile {
        &self.file
    }

    pub fn status(&self) -> UploadStatus {
        self.status
    }

    pub fn progress(&self) -> u8 {
        self.progress
    }

    pub fn errors(&self) -> &[String] {
        &self.errors
    }
}

/// Terminal result drawn for an item once its progress reaches 100.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BatchEvent {
    Progress { id: UploadId, percent: u8 },
    Finished { id: UploadId, status: UploadStatus },
    /// Emitted once per run, after the last queued item settles.
    Completed { processed: usize },
}
