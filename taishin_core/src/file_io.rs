//! # File I/O Module
//!
//! Reads and writes diagnosis project files:
//! - **Atomic saves**: Write to a `.tmp` sibling, sync, then rename over the target
//! - **Version validation**: Refuse files written by an incompatible schema
//!
//! Project files are plain pretty-printed JSON.
//!
//! ## Example
//!
//! ```rust,no_run
//! use taishin_core::file_io::{load_project, save_project};
//! use std::path::Path;
//!
//! let path = Path::new("house.json");
//! let mut project = load_project(path).unwrap();
//! project.touch();
//! save_project(&project, path).unwrap();
//! ```

use std::ffi::OsString;
use std::fs::{self, File};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use log::debug;

use crate::errors::{CalcError, CalcResult};
use crate::project::{DiagnosisProject, SCHEMA_VERSION};

/// Save a project with atomic write semantics.
///
/// The save process:
/// 1. Serialize project to JSON
/// 2. Write to `<file>.tmp`
/// 3. Sync to disk (fsync)
/// 4. Rename over the target
///
/// An interrupted save leaves the previous file intact.
pub fn save_project(project: &DiagnosisProject, path: &Path) -> CalcResult<()> {
    let json = serde_json::to_string_pretty(project)?;

    let tmp_path = tmp_path_for(path);

    let mut tmp_file = File::create(&tmp_path).map_err(|e| {
        CalcError::file_error("create temp file", tmp_path.display().to_string(), e.to_string())
    })?;

    tmp_file.write_all(json.as_bytes()).map_err(|e| {
        CalcError::file_error("write temp file", tmp_path.display().to_string(), e.to_string())
    })?;

    tmp_file.sync_all().map_err(|e| {
        CalcError::file_error("sync temp file", tmp_path.display().to_string(), e.to_string())
    })?;

    fs::rename(&tmp_path, path).map_err(|e| {
        let _ = fs::remove_file(&tmp_path);
        CalcError::file_error("rename to final", path.display().to_string(), e.to_string())
    })?;

    debug!("saved project {} to {}", project.meta.id, path.display());
    Ok(())
}

/// Load a project from a file.
///
/// # Returns
///
/// * `Ok(DiagnosisProject)` - Successfully loaded project
/// * `Err(CalcError::VersionMismatch)` - File version is incompatible
/// * `Err(CalcError::SerializationError)` - Invalid JSON or unknown enum code
/// * `Err(CalcError::FileError)` - I/O error
///
/// # Example
///
/// ```rust,no_run
/// use taishin_core::file_io::load_project;
/// use std::path::Path;
///
/// let project = load_project(Path::new("house.json"))?;
/// println!("Diagnostician: {}", project.meta.diagnostician);
/// # Ok::<(), taishin_core::errors::CalcError>(())
/// ```
pub fn load_project(path: &Path) -> CalcResult<DiagnosisProject> {
    let mut file = File::open(path)
        .map_err(|e| CalcError::file_error("open", path.display().to_string(), e.to_string()))?;

    let mut contents = String::new();
    file.read_to_string(&mut contents)
        .map_err(|e| CalcError::file_error("read", path.display().to_string(), e.to_string()))?;

    let project: DiagnosisProject =
        serde_json::from_str(&contents).map_err(|e| CalcError::SerializationError {
            reason: format!("Invalid JSON in {}: {}", path.display(), e),
        })?;

    validate_version(&project.meta.version)?;

    debug!(
        "loaded project {} ({} walls) from {}",
        project.meta.id,
        project.walls.len(),
        path.display()
    );
    Ok(project)
}

/// `house.json` → `house.json.tmp`
fn tmp_path_for(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(OsString::from)
        .unwrap_or_else(|| OsString::from("project"));
    name.push(".tmp");
    path.with_file_name(name)
}

/// Validate that a file version is compatible with the current schema.
///
/// Major versions must match. While the schema is 0.x, files from a newer
/// minor version are refused as well.
fn validate_version(file_version: &str) -> CalcResult<()> {
    let mismatch = || CalcError::VersionMismatch {
        file_version: file_version.to_string(),
        expected_version: SCHEMA_VERSION.to_string(),
    };

    let parse = |v: &str| -> Option<Vec<u32>> { v.split('.').map(|p| p.parse().ok()).collect() };

    let file_parts = parse(file_version).ok_or_else(mismatch)?;
    let current_parts = parse(SCHEMA_VERSION).ok_or_else(mismatch)?;

    let (Some(&file_major), Some(&current_major)) = (file_parts.first(), current_parts.first()) else {
        return Err(mismatch());
    };

    if file_major != current_major {
        return Err(mismatch());
    }

    if current_major == 0 {
        let file_minor = file_parts.get(1).copied().unwrap_or(0);
        let current_minor = current_parts.get(1).copied().unwrap_or(0);
        if file_minor > current_minor {
            return Err(mismatch());
        }
    }

    Ok(())
}
