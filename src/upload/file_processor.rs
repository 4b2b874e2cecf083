use crate::upload::types::SelectedFile;
use glob::{MatchOptions, Pattern};
use ignore::Walk;
use rfd::FileDialog;
use std::path::Path;

/// Advertised spreadsheet formats. Used to narrow what the user is offered,
/// never to reject a file that was picked explicitly.
#[derive(Debug, Clone)]
pub struct FileProcessor {
    extensions: Vec<String>,
    patterns: Vec<Pattern>,
}

impl FileProcessor {
    pub fn new<I, S>(extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let extensions: Vec<String> = extensions
            .into_iter()
            .map(|ext| ext.as_ref().trim().trim_start_matches('.').to_lowercase())
            .filter(|ext| !ext.is_empty())
            .collect();

        let patterns = extensions
            .iter()
            .filter_map(|ext| match Pattern::new(&format!("*.{}", ext)) {
                Ok(pattern) => Some(pattern),
                Err(e) => {
                    log::warn!("Ignoring extension '{}': {}", ext, e);
                    None
                }
            })
            .collect();

        Self {
            extensions,
            patterns,
        }
    }

    pub fn extensions(&self) -> &[String] {
        &self.extensions
    }

    /// Comma separated list as shown next to the file picker, e.g. `.xlsx, .xls, .csv`.
    pub fn accept_hint(&self) -> String {
        self.extensions
            .iter()
            .map(|ext| format!(".{}", ext))
            .collect::<Vec<_>>()
            .join(", ")
    }

    pub fn is_supported_file(&self, path: &Path) -> bool {
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            return false;
        };
        let options = MatchOptions {
            case_sensitive: false,
            ..MatchOptions::new()
        };
        self.patterns
            .iter()
            .any(|pattern| pattern.matches_with(name, options))
    }

    /// Collects supported files below `folder`, honouring ignore files.
    pub fn collect_folder(&self, folder: &Path) -> Vec<SelectedFile> {
        let mut files = Vec::new();
        for entry in Walk::new(folder) {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    log::warn!("Skipping unreadable entry under {:?}: {}", folder, e);
                    continue;
                }
            };
            let path = entry.path();
            if !path.is_file() || !self.is_supported_file(path) {
                continue;
            }
            match SelectedFile::from_path(path) {
                Ok(file) => files.push(file),
                Err(e) => log::warn!("Could not read metadata for {:?}: {}", path, e),
            }
        }
        files.sort_by(|a, b| a.path.cmp(&b.path));
        log::info!("Found {} supported file(s) in {:?}", files.len(), folder);
        files
    }

    /// Opens the native picker filtered to the advertised formats.
    pub fn pick_files(&self) -> Vec<SelectedFile> {
        let Some(paths) = FileDialog::new()
            .add_filter("Spreadsheets", self.extensions.as_slice())
            .pick_files()
        else {
            return Vec::new();
        };

        paths
            .iter()
            .filter_map(|path| match SelectedFile::from_path(path) {
                Ok(file) => Some(file),
                Err(e) => {
                    log::warn!("Could not read metadata for {:?}: {}", path, e);
                    None
                }
            })
            .collect()
    }

    pub fn pick_folder(&self) -> Vec<SelectedFile> {
        match FileDialog::new().pick_folder() {
            Some(folder) => self.collect_folder(&folder),
            None => Vec::new(),
        }
    }
}

impl Default for FileProcessor {
    fn default() -> Self {
        Self::new(["xlsx", "xls", "csv"])
    }
}
