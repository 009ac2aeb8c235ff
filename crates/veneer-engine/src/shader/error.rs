use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShaderError {
    #[error("shader `{0}` not found")]
    NotFound(String),

    #[error("`{name}` included from `{included_from}` not found")]
    MissingInclude { name: String, included_from: String },

    #[error("include cycle: {0}")]
    IncludeCycle(String),

    #[error("vertex shader `{0}` has no `main` to wrap")]
    MissingMain(String),
}
