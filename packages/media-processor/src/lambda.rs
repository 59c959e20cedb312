use std::collections::HashMap;

use lambda_http::http::header::CONTENT_TYPE;
use lambda_http::{service_fn, Body, Error, Request, RequestExt, Response};

use crate::AppState;
use crate::outcome::TransformOutcome;

/// 関数実行環境のイベントを 1 件処理する
///
/// 成功時は `Body::Binary` で返し、base64 化はランタイムに任せる（1 回だけ）。
/// 失敗時はこのレスポンス自体が `statusCode` + `body` の封筒になる
pub async fn handle_event(state: &AppState, event: Request) -> Result<Response<Body>, Error> {
    let params: HashMap<String, String> = event
        .query_string_parameters()
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    let params = (!params.is_empty()).then_some(&params);

    let outcome = state.orchestrator.respond(params).await;

    let response = match outcome {
        TransformOutcome::Success { body, mime_type } => Response::builder()
            .status(200)
            .header(CONTENT_TYPE, mime_type)
            .body(Body::Binary(body.to_vec()))?,
        TransformOutcome::Failure(failure) => Response::builder()
            .status(failure.status)
            .header(CONTENT_TYPE, "application/json")
            .body(Body::Text(failure.body().to_string()))?,
    };

    Ok(response)
}

/// Lambda ランタイムのイベントループを開始する
pub async fn run(state: AppState) -> Result<(), Error> {
    lambda_http::run(service_fn(move |event: Request| {
        let state = state.clone();
        async move { handle_event(&state, event).await }
    }))
    .await
}
