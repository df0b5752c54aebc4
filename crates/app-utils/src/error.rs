use core_suites::SelectionError;
use thiserror::Error;

/// Errores principales para el crate `app-utils`.
#[derive(Error, Debug)]
pub enum Error {
    /// Rule string variable is set but unusable
    #[error("Environment variable {var} is not valid UTF-8")]
    Env {
        /// Variable name
        var: String,
    },

    /// Fallo al parsear YAML
    #[error("YAML parsing failed: {0}")]
    YamlParseError(String),

    /// Rule string or policy rejected by the engine
    #[error(transparent)]
    Selection(#[from] SelectionError),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;
