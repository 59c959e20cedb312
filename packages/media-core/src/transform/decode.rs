use crate::constants::MAX_PIXELS;
use crate::errors::TransformError;
use image::{DynamicImage, ImageReader};
use std::io::Cursor;

/// バイト列から画像をデコードする（フォーマットは内容から推測）
pub fn decode_image(data: &[u8]) -> Result<DynamicImage, TransformError> {
    let reader = ImageReader::new(Cursor::new(data))
        .with_guessed_format()
        .map_err(|e| TransformError::ProcessingFailed(format!("failed to guess format: {e}")))?;

    let (width, height) = reader
        .into_dimensions()
        .map_err(|e| TransformError::ProcessingFailed(format!("failed to read dimensions: {e}")))?;

    // デコード前に総ピクセル数を確認し、メモリ枯渇を防ぐ
    if width as u64 * height as u64 > MAX_PIXELS {
        return Err(TransformError::ResolutionTooLarge { width, height });
    }

    ImageReader::new(Cursor::new(data))
        .with_guessed_format()
        .map_err(|e| TransformError::ProcessingFailed(format!("failed to guess format: {e}")))?
        .decode()
        .map_err(|e| TransformError::ProcessingFailed(format!("decode failed: {e}")))
}
