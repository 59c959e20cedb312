use crate::errors::TransformError;
use crate::transform::params::OutputFormat;
use image::codecs::avif::AvifEncoder;
use image::codecs::jpeg::JpegEncoder;
use image::{DynamicImage, ImageError, ImageFormat};
use std::io::Cursor;

/// AVIF エンコード速度（1-10、小さいほど高圧縮）
const AVIF_SPEED: u8 = 4;

/// 品質値をエンコーダが受け付ける 1-100 に丸める
pub fn clamp_quality(quality: i64) -> u8 {
    quality.clamp(1, 100) as u8
}

fn encode_failed(label: &'static str) -> impl FnOnce(ImageError) -> TransformError {
    move |e| TransformError::ProcessingFailed(format!("{label} encode failed: {e}"))
}

/// 画像をエンコードする
///
/// 同じ入力と引数からは常に同じバイト列を返す
pub fn encode_image(
    img: &DynamicImage,
    format: OutputFormat,
    quality: i64,
) -> Result<Vec<u8>, TransformError> {
    let quality = clamp_quality(quality);
    let mut out = Cursor::new(Vec::new());

    match format {
        // JPEG はアルファを持てないので RGB に落とす
        OutputFormat::Jpeg => img
            .to_rgb8()
            .write_with_encoder(JpegEncoder::new_with_quality(&mut out, quality))
            .map_err(encode_failed("JPEG"))?,
        OutputFormat::Png => img
            .write_to(&mut out, ImageFormat::Png)
            .map_err(encode_failed("PNG"))?,
        OutputFormat::WebP => {
            let rgba = img.to_rgba8();
            let encoded = webp::Encoder::from_rgba(&rgba, rgba.width(), rgba.height())
                .encode(f32::from(quality));
            out.get_mut().extend_from_slice(&encoded);
        }
        OutputFormat::Avif => img
            .to_rgba8()
            .write_with_encoder(AvifEncoder::new_with_speed_quality(
                &mut out,
                AVIF_SPEED,
                quality,
            ))
            .map_err(encode_failed("AVIF"))?,
        OutputFormat::Gif => img
            .to_rgba8()
            .write_to(&mut out, ImageFormat::Gif)
            .map_err(encode_failed("GIF"))?,
    }

    Ok(out.into_inner())
}
