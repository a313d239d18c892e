use crate::domain::WaypointSet;
use crate::extensions::path_ext::FileName;
use futures::stream::FuturesUnordered;
use std::io;
use std::path::PathBuf;
use thiserror::Error;
use tokio::fs;
use tokio::task::{self, JoinError};
use tokio_stream::StreamExt;
use tokio_stream::wrappers::ReadDirStream;
use tracing::{info, instrument, warn};

/// Loads every waypoint set in `directory`, ordered by file name. Files that fail to load are logged and skipped.
#[instrument]
pub async fn load_waypoint_sets_from(directory: &str, extension: &str) -> Result<Vec<WaypointSet>, LoaderError> {
    info!("📁 Loading waypoints...");
    let files = list_files(directory, extension)
        .await
        .map_err(|e| LoaderError::Io { source: e, path: None })?;

    let mut results = load_files(files).await;
    results.sort_by(|(a, _), (b, _)| a.cmp(b));
    let (sets, errors): (Vec<_>, Vec<_>) = results.into_iter().map(|(_, result)| result).partition(Result::is_ok);

    for error in errors.iter().filter_map(|res| res.as_ref().err()) {
        log_error(error);
    }

    let sets = sets.into_iter().filter_map(Result::ok).collect::<Vec<_>>();
    let num_waypoints = sets.iter().map(|set| set.waypoints.len()).sum::<usize>();
    info!(
        "📁 Loading waypoints... OK, {} set(s) with {} waypoint(s) loaded, {} failed",
        sets.len(),
        num_waypoints,
        errors.len()
    );
    Ok(sets)
}

#[instrument]
async fn list_files(directory: &str, extension: &str) -> io::Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    let dir = fs::read_dir(directory).await?;
    let mut entries = ReadDirStream::new(dir);

    while let Some(entry) = entries.next().await {
        match entry {
            Ok(entry) => {
                let path = entry.path();
                if path.is_file() && path.extension().and_then(|e| e.to_str()) == Some(extension) {
                    files.push(path);
                }
            }
            Err(err) => warn!("⚠️ Unable to read directory entry: {}", err),
        }
    }

    Ok(files)
}

#[instrument(skip_all)]
async fn load_files(paths: Vec<PathBuf>) -> Vec<(PathBuf, Result<WaypointSet, LoaderError>)> {
    FuturesUnordered::from_iter(paths.into_iter().map(|path| async move {
        let result = match fs::read_to_string(&path).await {
            Ok(content) => {
                let parse_path = path.clone();
                task::spawn_blocking(move || {
                    serde_json::from_str::<WaypointSet>(&content).map_err(|e| LoaderError::Parse { source: e, path: parse_path })
                })
                .await
                .unwrap_or_else(|e| Err(LoaderError::JoinError(e)))
            }
            Err(err) => Err(LoaderError::Io {
                source: err,
                path: Some(path.clone()),
            }),
        };
        (path, result)
    }))
    .collect()
    .await
}

#[instrument(skip_all)]
fn log_error(error: &LoaderError) {
    match error {
        LoaderError::Parse { source, path } => warn!("⚠️ Failed to load '{}': {}", path.string_file_name(), source),
        LoaderError::Io { source, path } => match path {
            Some(path) => warn!("⚠️ Failed to load '{}': {}", path.string_file_name(), source),
            None => warn!("⚠️ {}", source),
        },
        LoaderError::JoinError(err) => warn!("⚠️ {}", err),
    }
}

#[derive(Error, Debug)]
pub enum LoaderError {
    #[error("{}", source)]
    Parse { source: serde_json::Error, path: PathBuf },
    #[error("{}", source)]
    Io { source: io::Error, path: Option<PathBuf> },
    #[error(transparent)]
    JoinError(#[from] JoinError),
}
