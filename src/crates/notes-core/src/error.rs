use thiserror::Error;

pub type Result<T> = std::result::Result<T, CoreError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error("ticks per beat must be greater than zero")]
    ZeroTicksPerBeat,

    #[error("unknown duration symbol '{0}'")]
    UnknownDurationSymbol(String),
}
