//! Error types for the terminal host.
//!
//! [`EngineError`] wraps every failure mode during startup and the render
//! loop so `main` can propagate with `?`.

/// Top-level error for the `life-engine` binary.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// Configuration loading failed.
    #[error("config error: {source}")]
    Config {
        /// The underlying config error.
        #[from]
        source: life_core::ConfigError,
    },

    /// The simulation core rejected its configuration or a tick failed.
    #[error("simulation error: {source}")]
    Simulation {
        /// The underlying core error.
        #[from]
        source: life_core::LifeError,
    },

    /// Terminal or log file I/O failed.
    #[error("terminal I/O error: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },
}
