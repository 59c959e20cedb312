use crate::errors::StorageError;
use crate::storage::ObjectStore;
use async_trait::async_trait;
use aws_sdk_s3::Client;
use aws_sdk_s3::config::retry::RetryConfig;
use aws_sdk_s3::config::{BehaviorVersion, Credentials, Region};
use aws_sdk_s3::error::{DisplayErrorContext, ProvideErrorMetadata, SdkError};
use aws_sdk_s3::operation::get_object::GetObjectError;
use bytes::Bytes;

/// 認証情報の出どころとして SDK に渡す名前
const CREDENTIALS_PROVIDER: &str = "media-processor-env";

/// S3 接続設定
#[derive(Debug, Clone)]
pub struct S3Settings {
    pub bucket: String,
    pub region: String,
    /// 空文字の場合は空の認証情報でそのままアクセスを試みる
    pub access_key_id: String,
    pub secret_access_key: String,
    /// S3 互換ストレージ用のエンドポイント（パス形式でアクセス）
    pub endpoint: Option<String>,
}

/// 固定バケットから画像を取得する S3 クライアント
#[derive(Clone)]
pub struct S3ObjectStore {
    client: Client,
    bucket: String,
}

impl S3ObjectStore {
    pub fn new(client: Client, bucket: impl Into<String>) -> Self {
        Self {
            client,
            bucket: bucket.into(),
        }
    }

    /// 設定から S3ObjectStore を作成する
    pub fn from_settings(settings: &S3Settings) -> Self {
        let credentials = Credentials::new(
            &settings.access_key_id,
            &settings.secret_access_key,
            None,
            None,
            CREDENTIALS_PROVIDER,
        );

        let mut builder = aws_sdk_s3::config::Builder::new()
            .behavior_version(BehaviorVersion::latest())
            .region(Region::new(settings.region.clone()))
            .credentials_provider(credentials)
            // 失敗は即座に呼び出し元へ返す（SDK 標準の自動リトライは使わない）
            .retry_config(RetryConfig::disabled());

        if let Some(endpoint) = &settings.endpoint {
            builder = builder.endpoint_url(endpoint).force_path_style(true);
        }

        tracing::debug!(
            bucket = %settings.bucket,
            region = %settings.region,
            endpoint = ?settings.endpoint,
            anonymous = settings.access_key_id.is_empty(),
            "initializing S3 client"
        );

        Self::new(Client::from_conf(builder.build()), settings.bucket.clone())
    }

    pub fn bucket(&self) -> &str {
        &self.bucket
    }
}

#[async_trait]
impl ObjectStore for S3ObjectStore {
    async fn get_object(&self, key: &str) -> Result<Bytes, StorageError> {
        tracing::debug!(bucket = %self.bucket, key = %key, "fetching object from S3");

        let output = self
            .client
            .get_object()
            .bucket(&self.bucket)
            .key(key)
            .send()
            .await
            .map_err(|e| classify_get_error(key, e))?;

        let data = output
            .body
            .collect()
            .await
            .map_err(|e| StorageError::Backend {
                status: None,
                message: e.to_string(),
            })?
            .into_bytes();

        tracing::debug!(key = %key, size = data.len(), "fetched object from S3");
        Ok(data)
    }
}

/// GetObject のエラーを StorageError に振り分ける
///
/// NoSuchKey は NotFound、それ以外は S3 が返したステータスとメッセージを保持する
fn classify_get_error(key: &str, err: SdkError<GetObjectError>) -> StorageError {
    let status = err.raw_response().map(|r| r.status().as_u16());

    let no_such_key = matches!(&err, SdkError::ServiceError(e) if e.err().is_no_such_key())
        || err.code() == Some("NoSuchKey");
    if no_such_key {
        return StorageError::NotFound {
            key: key.to_string(),
            status,
        };
    }

    let message = err
        .message()
        .map(str::to_string)
        .unwrap_or_else(|| DisplayErrorContext(&err).to_string());

    StorageError::Backend { status, message }
}
