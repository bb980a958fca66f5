use crate::backend::Backend;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Backend `{backend}` is not supported by this processor")]
    Unsupported { backend: Backend },

    #[error("Unknown backend: {0:?}")]
    UnknownBackend(String),
}

pub type Result<T> = std::result::Result<T, Error>;
