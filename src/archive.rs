//! Archive extraction and scratch storage for an evaluation run.

use crate::error::{Result, VocEvalError};
use std::ffi::OsStr;
use std::fs::{self, File};
use std::io::BufReader;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use tracing::debug;

const SCRATCH_PREFIX: &str = "voc-eval-";
const MACOS_RESOURCE_DIR: &str = "__MACOSX";

/// Scratch directories for the two sides of one run.
///
/// The whole tree is removed when the value is dropped, on success and on
/// every error path alike.
#[derive(Debug)]
pub struct ScratchSpace {
    root: TempDir,
    ground_truth_dir: PathBuf,
    prediction_dir: PathBuf,
}

impl ScratchSpace {
    /// Create a uniquely named scratch directory with `gt/` and `pred/` inside.
    ///
    /// When `parent` is `None` the system temp directory is used.
    pub fn new(parent: Option<&Path>) -> Result<Self> {
        let mut builder = tempfile::Builder::new();
        builder.prefix(SCRATCH_PREFIX);
        let root = match parent {
            Some(parent) => builder.tempdir_in(parent)?,
            None => builder.tempdir()?,
        };

        let ground_truth_dir = root.path().join("gt");
        let prediction_dir = root.path().join("pred");
        fs::create_dir_all(&ground_truth_dir)?;
        fs::create_dir_all(&prediction_dir)?;

        debug!("Created scratch space at {}", root.path().display());

        Ok(Self {
            root,
            ground_truth_dir,
            prediction_dir,
        })
    }

    pub fn path(&self) -> &Path {
        self.root.path()
    }

    pub fn ground_truth_dir(&self) -> &Path {
        &self.ground_truth_dir
    }

    pub fn prediction_dir(&self) -> &Path {
        &self.prediction_dir
    }
}

/// Extract a ZIP archive into `dest`.
///
/// # Errors
///
/// Returns an `Archive` error if the file is missing, unreadable, or not a
/// valid ZIP container.
pub fn extract_archive(archive: &Path, dest: &Path) -> Result<()> {
    let file = File::open(archive).map_err(|e| VocEvalError::archive(archive, e))?;
    let mut zip = zip::ZipArchive::new(BufReader::new(file))
        .map_err(|e| VocEvalError::archive(archive, e))?;

    debug!("Extracting {} entries from {}", zip.len(), archive.display());

    zip.extract(dest).map_err(|e| VocEvalError::archive(archive, e))?;
    Ok(())
}

/// Collect annotation files below `dir`, walking nested directories.
///
/// Paths are returned relative to `dir` and sorted, so that iteration order
/// is reproducible. The extension is compared case-sensitively. Hidden
/// entries and macOS resource-fork folders are skipped.
pub fn collect_annotation_files(dir: &Path, extension: &str) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    let mut pending = vec![dir.to_path_buf()];

    while let Some(current) = pending.pop() {
        for entry in fs::read_dir(&current)? {
            let entry = entry?;
            if is_archive_metadata(&entry.file_name()) {
                continue;
            }
            let path = entry.path();
            let file_type = entry.file_type()?;

            if file_type.is_dir() {
                pending.push(path);
            } else if file_type.is_file() && path.extension().is_some_and(|ext| ext == extension) {
                if let Ok(relative) = path.strip_prefix(dir) {
                    files.push(relative.to_path_buf());
                }
            }
        }
    }

    files.sort();
    Ok(files)
}

/// Names archivers add next to the real content, such as `.DS_Store`,
/// AppleDouble `._<name>` files, and the `__MACOSX` folder.
fn is_archive_metadata(name: &OsStr) -> bool {
    let name = name.to_string_lossy();
    name.starts_with('.') || name == MACOS_RESOURCE_DIR
}
