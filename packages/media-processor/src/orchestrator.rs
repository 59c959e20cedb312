use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use bytes::Bytes;
use media_core::{normalize, MediaError, ObjectStore, StorageError, TransformRequest};

use crate::outcome::{check_payload_size, TransformOutcome};
use crate::transform::transform;

/// 取得 → 変換 → サイズ確認 を順番に実行する
///
/// 外部呼び出しの失敗はリトライせず、そのまま失敗レスポンスにする
#[derive(Clone)]
pub struct Orchestrator {
    store: Arc<dyn ObjectStore>,
    fetch_timeout: Option<Duration>,
}

impl Orchestrator {
    pub fn new(store: Arc<dyn ObjectStore>) -> Self {
        Self {
            store,
            fetch_timeout: None,
        }
    }

    /// ストレージ取得のタイムアウト。None なら外部呼び出しの完了まで待つ
    pub fn with_fetch_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.fetch_timeout = timeout;
        self
    }

    /// 生のクエリから結果までを処理する（両トランスポート共通の入口）
    pub async fn respond(&self, query: Option<&HashMap<String, String>>) -> TransformOutcome {
        match normalize(query) {
            Ok(request) => self.handle(&request).await,
            Err(err) => MediaError::from(err).into(),
        }
    }

    pub async fn handle(&self, request: &TransformRequest) -> TransformOutcome {
        tracing::info!(
            key = %request.source_key,
            format = %request.output_format,
            width = ?request.width,
            height = ?request.height,
            fit = %request.fit,
            position = %request.position,
            quality = request.quality,
            "resizing image"
        );

        match self.run(request).await {
            Ok(body) => TransformOutcome::Success {
                body,
                mime_type: request.mime_type(),
            },
            Err(err) => err.into(),
        }
    }

    async fn run(&self, request: &TransformRequest) -> Result<Bytes, MediaError> {
        let source = self.fetch(&request.source_key).await?;
        if source.is_empty() {
            return Err(StorageError::EmptyBody {
                key: request.source_key.clone(),
            }
            .into());
        }

        // デコード・エンコードは CPU を占有するためブロッキングプールで実行する
        let req = request.clone();
        let output = tokio::task::spawn_blocking(move || transform(&source, &req))
            .await
            .map_err(|e| MediaError::Task(e.to_string()))??;

        check_payload_size(output.len())?;

        tracing::info!(
            key = %request.source_key,
            size = output.len(),
            "image converted"
        );
        Ok(output)
    }

    async fn fetch(&self, key: &str) -> Result<Bytes, StorageError> {
        match self.fetch_timeout {
            Some(limit) => tokio::time::timeout(limit, self.store.get_object(key))
                .await
                .map_err(|_| StorageError::Timeout(limit))?,
            None => self.store.get_object(key).await,
        }
    }
}
