use crate::errors::ValidationError;

/// `image` パラメータをオブジェクトキーに変換する
///
/// トランスポート側で一度デコード済みの値をさらに URL デコードする。
/// デコード後に空になるキーは未指定として扱う
pub fn decode_key(raw: &str) -> Result<String, ValidationError> {
    if raw.is_empty() {
        return Err(ValidationError::MissingImage);
    }

    check_escapes(raw)?;

    let decoded = urlencoding::decode(raw)
        .map_err(|e| ValidationError::InvalidKey(e.to_string()))?;

    if decoded.is_empty() {
        return Err(ValidationError::MissingImage);
    }

    Ok(decoded.into_owned())
}

/// `%` の後に 16 進数 2 桁が続かない場合はエラー
fn check_escapes(raw: &str) -> Result<(), ValidationError> {
    let bytes = raw.as_bytes();
    for (i, _) in raw.match_indices('%') {
        let valid = bytes
            .get(i + 1..i + 3)
            .is_some_and(|hex| hex.iter().all(u8::is_ascii_hexdigit));
        if !valid {
            return Err(ValidationError::InvalidKey(format!(
                "malformed percent escape at byte {i}"
            )));
        }
    }
    Ok(())
}
