use std::collections::HashMap;

use crate::constants::{DEFAULT_FIT, DEFAULT_FORMAT, DEFAULT_POSITION, DEFAULT_QUALITY};
use crate::errors::ValidationError;
use crate::transform::TransformRequest;
use crate::validation::key::decode_key;

/// 生のクエリパラメータから変換リクエストを組み立てる
///
/// `None`（クエリなし）と `image` 未指定だけがエラーになる。
/// 数値として解釈できない値はエラーにせずデフォルトに戻す
pub fn normalize(
    query: Option<&HashMap<String, String>>,
) -> Result<TransformRequest, ValidationError> {
    let query = match query {
        Some(q) if !q.is_empty() => q,
        _ => return Err(ValidationError::NoQuery),
    };

    let image = first_present(query, &["image"]).ok_or(ValidationError::MissingImage)?;
    let source_key = decode_key(image)?;

    let width = first_present(query, &["width", "w"]).and_then(parse_dimension);
    let height = first_present(query, &["height", "h"]).and_then(parse_dimension);

    let output_format = first_present(query, &["format", "fm"])
        .unwrap_or(DEFAULT_FORMAT)
        .to_string();
    let fit = first_present(query, &["fit"]).unwrap_or(DEFAULT_FIT).to_string();
    let position = first_present(query, &["position"])
        .unwrap_or(DEFAULT_POSITION)
        .to_string();

    let quality = first_present(query, &["quality", "q"])
        .and_then(parse_quality)
        .unwrap_or(DEFAULT_QUALITY);

    Ok(TransformRequest {
        source_key,
        output_format,
        width,
        height,
        fit,
        position,
        quality,
    })
}

/// 空文字でない最初の値を返す
fn first_present<'a>(query: &'a HashMap<String, String>, keys: &[&str]) -> Option<&'a str> {
    keys.iter()
        .filter_map(|k| query.get(*k))
        .map(String::as_str)
        .find(|v| !v.is_empty())
}

/// 先頭の整数部分だけを読む（"100px" は 100）
fn parse_leading_int(s: &str) -> Option<i64> {
    let s = s.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }

    // 桁あふれは i64::MAX に丸める（どのみち u32 の範囲外）
    let value = digits[..end].parse::<i64>().unwrap_or(i64::MAX);
    Some(if negative { -value } else { value })
}

/// 0 以下と u32 に収まらない値は未指定として扱う
fn parse_dimension(s: &str) -> Option<u32> {
    parse_leading_int(s)
        .filter(|v| *v > 0)
        .and_then(|v| u32::try_from(v).ok())
}

fn parse_quality(s: &str) -> Option<i64> {
    let s = s.trim();
    if let Ok(v) = s.parse::<i64>() {
        return Some(v);
    }

    s.parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .map(|v| v.round() as i64)
}
