pub mod s3;

use async_trait::async_trait;
use bytes::Bytes;

pub use crate::errors::StorageError;
pub use s3::{S3ObjectStore, S3Settings};

/// 元画像を取得するストレージ
///
/// 実装はリクエスト間で共有されるため、リクエスト固有の状態を持たないこと
#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// キーを指定してオブジェクトを取得する。存在しなければ [`StorageError::NotFound`]
    async fn get_object(&self, key: &str) -> Result<Bytes, StorageError>;
}
