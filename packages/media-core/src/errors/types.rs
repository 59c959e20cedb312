use std::time::Duration;

use thiserror::Error;

/// メディア処理の統合エラー型
#[derive(Debug, Error)]
pub enum MediaError {
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("transform error: {0}")]
    Transform(#[from] TransformError),

    #[error("encoded image is {size} bytes (limit {limit})")]
    PayloadTooLarge { size: usize, limit: usize },

    #[error("transform task failed: {0}")]
    Task(String),
}

/// クエリパラメータの検証エラー
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("no query parameters")]
    NoQuery,

    #[error("image parameter is missing")]
    MissingImage,

    #[error("image key is not valid UTF-8 after decoding: {0}")]
    InvalidKey(String),
}

/// ストレージアクセスエラー
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("object not found: {key}")]
    NotFound { key: String, status: Option<u16> },

    #[error("object has no body: {key}")]
    EmptyBody { key: String },

    #[error("storage error ({status:?}): {message}")]
    Backend { status: Option<u16>, message: String },

    #[error("storage fetch timed out after {0:?}")]
    Timeout(Duration),
}

/// 画像変換エラー
#[derive(Debug, Error)]
pub enum TransformError {
    #[error("unsupported output format: {0}")]
    UnsupportedFormat(String),

    #[error("unknown fit mode: {0}")]
    UnknownFit(String),

    #[error("unknown position: {0}")]
    UnknownPosition(String),

    #[error("image resolution exceeds maximum ({width}x{height})")]
    ResolutionTooLarge { width: u32, height: u32 },

    #[error("processing failed: {0}")]
    ProcessingFailed(String),
}
