use crate::constants::MAX_PIXELS;
use crate::errors::TransformError;
use crate::transform::dimensions::ResizePlan;
use fast_image_resize::{images::Image, FilterType, PixelType, ResizeAlg, ResizeOptions, Resizer};
use image::{imageops, DynamicImage, Rgba, RgbaImage};

/// contain の余白色（不透明の黒）
const PAD_COLOR: Rgba<u8> = Rgba([0, 0, 0, 255]);

fn check_pixels(width: u32, height: u32) -> Result<(), TransformError> {
    let total_pixels = width as u64 * height as u64;
    if total_pixels > MAX_PIXELS {
        return Err(TransformError::ResolutionTooLarge { width, height });
    }
    Ok(())
}

/// 画像をリサイズする
///
/// fast_image_resize の Lanczos3 で RGBA8 のままリサイズする（アルファを保持）
pub fn resize_image(
    img: &DynamicImage,
    target_w: u32,
    target_h: u32,
) -> Result<DynamicImage, TransformError> {
    check_pixels(target_w, target_h)?;

    if img.width() == target_w && img.height() == target_h {
        return Ok(img.clone());
    }

    let rgba = img.to_rgba8();
    let (width, height) = rgba.dimensions();

    let src_image = Image::from_vec_u8(width, height, rgba.into_raw(), PixelType::U8x4)
        .map_err(|e| TransformError::ProcessingFailed(format!("failed to create source image: {e}")))?;

    let mut dst_image = Image::new(target_w, target_h, PixelType::U8x4);

    let mut resizer = Resizer::new();
    resizer
        .resize(
            &src_image,
            &mut dst_image,
            &ResizeOptions::new().resize_alg(ResizeAlg::Convolution(FilterType::Lanczos3)),
        )
        .map_err(|e| TransformError::ProcessingFailed(format!("resize failed: {e}")))?;

    let resized = RgbaImage::from_raw(target_w, target_h, dst_image.into_vec()).ok_or_else(|| {
        TransformError::ProcessingFailed("failed to convert resized image".to_string())
    })?;

    Ok(DynamicImage::ImageRgba8(resized))
}

/// リサイズ手順を画像に適用する
pub fn apply_plan(img: DynamicImage, plan: ResizePlan) -> Result<DynamicImage, TransformError> {
    match plan {
        ResizePlan::Keep => Ok(img),
        ResizePlan::Scale { width, height } => resize_image(&img, width, height),
        ResizePlan::ScaleThenCrop {
            width,
            height,
            x,
            y,
            target_w,
            target_h,
        } => {
            let scaled = resize_image(&img, width, height)?;
            Ok(scaled.crop_imm(x, y, target_w, target_h))
        }
        ResizePlan::ScaleThenPad {
            width,
            height,
            x,
            y,
            target_w,
            target_h,
        } => {
            check_pixels(target_w, target_h)?;
            let scaled = resize_image(&img, width, height)?;
            let mut canvas =
                DynamicImage::ImageRgba8(RgbaImage::from_pixel(target_w, target_h, PAD_COLOR));
            imageops::overlay(&mut canvas, &scaled, x as i64, y as i64);
            Ok(canvas)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::GenericImageView;

    #[test]
    fn test_resize_image() {
        let img = DynamicImage::new_rgb8(1000, 1000);
        let resized = resize_image(&img, 500, 500).unwrap();

        assert_eq!(resized.width(), 500);
        assert_eq!(resized.height(), 500);
    }

    #[test]
    fn test_resize_keeps_alpha_channel() {
        let img = DynamicImage::ImageRgba8(RgbaImage::from_pixel(40, 40, Rgba([10, 20, 30, 0])));
        let resized = resize_image(&img, 20, 20).unwrap();

        assert_eq!(resized.get_pixel(10, 10)[3], 0);
    }

    #[test]
    fn test_resize_exceeds_max_pixels() {
        let img = DynamicImage::new_rgb8(100, 100);
        let result = resize_image(&img, 100_000, 100_000);

        match result.unwrap_err() {
            TransformError::ResolutionTooLarge { width, height } => {
                assert_eq!(width, 100_000);
                assert_eq!(height, 100_000);
            }
            other => panic!("expected ResolutionTooLarge error, got {other:?}"),
        }
    }

    #[test]
    fn test_apply_crop_plan() {
        let img = DynamicImage::new_rgb8(1000, 500);
        let plan = ResizePlan::ScaleThenCrop {
            width: 800,
            height: 400,
            x: 200,
            y: 0,
            target_w: 400,
            target_h: 400,
        };
        let out = apply_plan(img, plan).unwrap();

        assert_eq!(out.dimensions(), (400, 400));
    }

    #[test]
    fn test_apply_pad_plan_fills_with_black() {
        let img = DynamicImage::ImageRgba8(RgbaImage::from_pixel(50, 100, Rgba([255, 255, 255, 255])));
        let plan = ResizePlan::ScaleThenPad {
            width: 50,
            height: 100,
            x: 25,
            y: 0,
            target_w: 100,
            target_h: 100,
        };
        let out = apply_plan(img, plan).unwrap();

        assert_eq!(out.dimensions(), (100, 100));
        assert_eq!(out.get_pixel(0, 50), Rgba([0, 0, 0, 255]));
        assert_eq!(out.get_pixel(50, 50), Rgba([255, 255, 255, 255]));
    }
}
