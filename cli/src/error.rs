use std::path::PathBuf;

use gridstar_core::GridError;
use gridstar_paths::SearchError;

use crate::map::MapError;

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("cannot read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("bad config file {path}: {source}")]
    Config {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("cannot encode report: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Map(#[from] MapError),

    #[error(transparent)]
    Grid(#[from] GridError),

    #[error(transparent)]
    Search(#[from] SearchError),

    #[error("no map given: pass --map or --random")]
    NoMap,

    #[error("no {0} given: pass --{1} or mark it in the map")]
    MissingEndpoint(&'static str, &'static str),
}

pub type CliResult<T> = Result<T, CliError>;
