use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use bytes::Bytes;
use serde_json::json;

use media_core::{MediaError, StorageError, ValidationError, MAX_PAYLOAD_BYTES};

pub const NO_QUERY_MESSAGE: &str = "No query provided.";
pub const NO_IMAGE_MESSAGE: &str = "No Image Was Provided.";
pub const NOT_FOUND_MESSAGE: &str = "Image not found.";
pub const EMPTY_BODY_MESSAGE: &str = "No image data was returned.";
pub const TOO_LARGE_MESSAGE: &str = "The converted image is too large to return.";
pub const TIMEOUT_MESSAGE: &str = "Timed out fetching image.";
pub const INTERNAL_MESSAGE: &str = "Internal Server Error";

/// 失敗の分類
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    NoQuery,
    MissingParameter,
    NotFound,
    EmptyBody,
    TooLarge,
    Storage,
    Timeout,
    Internal,
}

/// 利用者に返す失敗
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Failure {
    pub kind: FailureKind,
    pub status: u16,
    pub message: String,
}

impl Failure {
    pub fn new(kind: FailureKind, status: u16, message: impl Into<String>) -> Self {
        Self {
            kind,
            status,
            message: message.into(),
        }
    }

    pub fn internal() -> Self {
        Self::new(FailureKind::Internal, 500, INTERNAL_MESSAGE)
    }

    /// `{"status":"error","message":...}`
    pub fn body(&self) -> serde_json::Value {
        json!({ "status": "error", "message": self.message })
    }

    /// クエリ不備と内部エラーは `statusCode` + 文字列化した `body` で包んで返す
    pub fn is_enveloped(&self) -> bool {
        matches!(
            self.kind,
            FailureKind::NoQuery | FailureKind::MissingParameter | FailureKind::Internal
        )
    }

    /// サーバートランスポート用のレスポンスボディ
    pub fn server_body(&self) -> serde_json::Value {
        if self.is_enveloped() {
            json!({ "statusCode": self.status, "body": self.body().to_string() })
        } else {
            self.body()
        }
    }

    pub fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }
}

impl From<MediaError> for Failure {
    fn from(err: MediaError) -> Self {
        match err {
            MediaError::Validation(ValidationError::NoQuery) => {
                tracing::warn!("request has no query parameters");
                Failure::new(FailureKind::NoQuery, 500, NO_QUERY_MESSAGE)
            }
            MediaError::Validation(ValidationError::MissingImage) => {
                tracing::warn!("image parameter is missing");
                Failure::new(FailureKind::MissingParameter, 500, NO_IMAGE_MESSAGE)
            }
            MediaError::Validation(ValidationError::InvalidKey(detail)) => {
                tracing::error!(error = %detail, "image key could not be decoded");
                Failure::internal()
            }
            MediaError::Storage(storage_err) => storage_err.into(),
            MediaError::Transform(transform_err) => {
                tracing::error!(error = %transform_err, "image processing failed");
                Failure::internal()
            }
            MediaError::PayloadTooLarge { size, limit } => {
                tracing::warn!(size, limit, "converted image exceeds payload limit");
                Failure::new(FailureKind::TooLarge, 413, TOO_LARGE_MESSAGE)
            }
            MediaError::Task(detail) => {
                tracing::error!(error = %detail, "transform task did not complete");
                Failure::internal()
            }
        }
    }
}

impl From<StorageError> for Failure {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::NotFound { key, status } => {
                tracing::warn!(key = %key, status = ?status, "object not found");
                Failure::new(FailureKind::NotFound, status.unwrap_or(404), NOT_FOUND_MESSAGE)
            }
            StorageError::EmptyBody { key } => {
                tracing::error!(key = %key, "storage returned no body");
                Failure::new(FailureKind::EmptyBody, 500, EMPTY_BODY_MESSAGE)
            }
            StorageError::Backend { status, message } => {
                tracing::error!(status = ?status, error = %message, "storage error");
                Failure::new(FailureKind::Storage, status.unwrap_or(500), message)
            }
            StorageError::Timeout(after) => {
                tracing::error!(after_ms = after.as_millis() as u64, "storage fetch timed out");
                Failure::new(FailureKind::Timeout, 504, TIMEOUT_MESSAGE)
            }
        }
    }
}

/// 1 リクエストの結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransformOutcome {
    Success { body: Bytes, mime_type: String },
    Failure(Failure),
}

impl TransformOutcome {
    pub fn status(&self) -> u16 {
        match self {
            Self::Success { .. } => 200,
            Self::Failure(failure) => failure.status,
        }
    }
}

impl From<Failure> for TransformOutcome {
    fn from(failure: Failure) -> Self {
        Self::Failure(failure)
    }
}

impl From<MediaError> for TransformOutcome {
    fn from(err: MediaError) -> Self {
        Self::Failure(err.into())
    }
}

/// 変換後のサイズがペイロード上限を超えていないか確認する（ちょうど上限までは許可）
pub fn check_payload_size(size: usize) -> Result<(), MediaError> {
    if size > MAX_PAYLOAD_BYTES {
        return Err(MediaError::PayloadTooLarge {
            size,
            limit: MAX_PAYLOAD_BYTES,
        });
    }
    Ok(())
}

impl IntoResponse for TransformOutcome {
    fn into_response(self) -> Response {
        match self {
            Self::Success { body, mime_type } => {
                (StatusCode::OK, [(header::CONTENT_TYPE, mime_type)], body).into_response()
            }
            Self::Failure(failure) => {
                (failure.status_code(), axum::Json(failure.server_body())).into_response()
            }
        }
    }
}
