use bytes::Bytes;

use media_core::{
    apply_plan, auto_orient, decode_image, encode_image, plan_resize, FitMode, OutputFormat,
    Position, TransformError, TransformRequest,
};

/// リクエストに従って画像バイト列を変換する。
///
/// 文字列パラメータの解釈はデコード前に行い、不正な値では重い処理をしない。
/// 寸法指定がなくても必ずデコード→エンコードを行う（フォーマット変換のため）。
pub fn transform(input: &[u8], request: &TransformRequest) -> Result<Bytes, TransformError> {
    let format = OutputFormat::from_str(&request.output_format)
        .ok_or_else(|| TransformError::UnsupportedFormat(request.output_format.clone()))?;
    let fit = FitMode::from_str(&request.fit)
        .ok_or_else(|| TransformError::UnknownFit(request.fit.clone()))?;
    let position = Position::from_str(&request.position)
        .ok_or_else(|| TransformError::UnknownPosition(request.position.clone()))?;

    let img = decode_image(input)?;
    let img = auto_orient(img, input);

    let (src_w, src_h) = (img.width(), img.height());
    let plan = plan_resize(src_w, src_h, request.width, request.height, fit, position);
    tracing::debug!(src_w, src_h, plan = ?plan, "resize plan");

    let resized = apply_plan(img, plan)?;
    let output = encode_image(&resized, format, request.quality)?;

    Ok(Bytes::from(output))
}
