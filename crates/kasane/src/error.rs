use thiserror::Error;

#[derive(Error, Debug)]
pub enum KasaneError {
    #[error(transparent)]
    Base64DecodeError(#[from] base64::DecodeError),

    #[error(transparent)]
    Utf8Error(#[from] std::string::FromUtf8Error),

    #[error(transparent)]
    JsonError(#[from] serde_json::Error),
}

pub type KasaneResult<T> = Result<T, KasaneError>;
