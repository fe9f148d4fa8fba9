use thiserror::Error;

#[derive(Error, Debug)]
pub enum SessionError {
    #[error("Runtime error: {0}")]
    Runtime(#[from] core_runtime::Error),

    #[error("Library error: {0}")]
    Library(#[from] core_library::LibraryError),

    #[error("Provider error: {0}")]
    Provider(#[from] provider_lrclib::LrclibError),
}

pub type Result<T> = std::result::Result<T, SessionError>;
