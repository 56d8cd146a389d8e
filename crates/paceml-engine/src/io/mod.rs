use crate::models::Workout;
use crate::parsing::{ParseError, parse_workout};
use std::fs;
use std::path::{Path, PathBuf};

/// File extension of PaceML documents.
pub const WORKOUT_EXTENSION: &str = "paceml";

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("File not found: {}", .0.display())]
    NotFound(PathBuf),
    #[error("IO error")]
    Io(#[from] std::io::Error),
    #[error("Invalid workouts directory: {} is not a directory", .0.display())]
    InvalidWorkoutsDir(PathBuf),
}

/// Failure to turn a file into a [`Workout`].
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error(transparent)]
    Io(#[from] IoError),
    #[error("Failed to parse {}", .path.display())]
    Parse { path: PathBuf, source: ParseError },
}

impl LoadError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, LoadError::Io(IoError::NotFound(_)))
    }
}

/// Read a workout file and return its content
pub fn read_file(path: &Path) -> Result<String, IoError> {
    if !path.exists() {
        return Err(IoError::NotFound(path.to_path_buf()));
    }
    fs::read_to_string(path).map_err(IoError::Io)
}

/// Read and parse a workout file
pub fn load_workout(path: &Path) -> Result<Workout, LoadError> {
    let text = read_file(path)?;
    log::info!("Parsing {}", path.display());
    parse_workout(&text).map_err(|source| LoadError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Scan for workout files in the workouts directory
pub fn scan_workout_files(workouts_root: &Path) -> Result<Vec<PathBuf>, IoError> {
    validate_workouts_dir(workouts_root)?;

    let mut files = Vec::new();
    scan_directory_recursive(workouts_root, &mut files)?;
    files.sort();
    Ok(files)
}

fn scan_directory_recursive(dir: &Path, files: &mut Vec<PathBuf>) -> Result<(), IoError> {
    let entries = fs::read_dir(dir).map_err(IoError::Io)?;

    for entry in entries {
        let entry = entry.map_err(IoError::Io)?;
        let path = entry.path();

        if path.is_dir() {
            scan_directory_recursive(&path, files)?;
        } else if let Some(ext) = path.extension()
            && ext == WORKOUT_EXTENSION
        {
            files.push(path);
        }
    }

    Ok(())
}

pub fn validate_workouts_dir(path: &Path) -> Result<(), IoError> {
    if !path.exists() || !path.is_dir() {
        return Err(IoError::InvalidWorkoutsDir(path.to_path_buf()));
    }

    Ok(())
}
