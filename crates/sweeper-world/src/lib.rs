//! External collaborators for the sweeper simulation: the grid data store
//! and the operating configuration.

#![forbid(unsafe_code)]

use std::path::PathBuf;

use thiserror::Error;

pub mod config;
pub mod grid;

pub use config::{Pressure, SuctionCapacity, SweeperConfig};
pub use grid::{Cell, Grid, Position};

/// Errors raised while loading external data. Malformed input is fatal at
/// load time; nothing in the decision engine ever sees these.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("cell table error: {0}")]
    Table(#[from] csv::Error),

    #[error("failed to read {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("malformed config {path:?}: {source}")]
    Config {
        path: PathBuf,
        source: serde_yaml::Error,
    },
}
