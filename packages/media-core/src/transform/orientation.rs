use image::DynamicImage;

/// EXIF Orientation タグの値
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Normal,
    FlipHorizontal,
    Rotate180,
    FlipVertical,
    Transpose,
    Rotate90,
    Transverse,
    Rotate270,
}

impl Orientation {
    fn from_tag(value: u32) -> Option<Self> {
        Some(match value {
            1 => Self::Normal,
            2 => Self::FlipHorizontal,
            3 => Self::Rotate180,
            4 => Self::FlipVertical,
            5 => Self::Transpose,
            6 => Self::Rotate90,
            7 => Self::Transverse,
            8 => Self::Rotate270,
            _ => return None,
        })
    }

    /// 元のバイト列から Orientation を読み取る。EXIF がなければ None
    pub fn read(data: &[u8]) -> Option<Self> {
        let mut cursor = std::io::Cursor::new(data);
        let exif = exif::Reader::new().read_from_container(&mut cursor).ok()?;
        let field = exif.get_field(exif::Tag::Orientation, exif::In::PRIMARY)?;

        Self::from_tag(field.value.get_uint(0)?)
    }

    pub fn apply(self, img: DynamicImage) -> DynamicImage {
        match self {
            Self::Normal => img,
            Self::FlipHorizontal => img.fliph(),
            Self::Rotate180 => img.rotate180(),
            Self::FlipVertical => img.flipv(),
            Self::Transpose => img.rotate90().fliph(),
            Self::Rotate90 => img.rotate90(),
            Self::Transverse => img.rotate270().fliph(),
            Self::Rotate270 => img.rotate270(),
        }
    }
}

/// 再エンコードでメタデータが落ちるため、向きはピクセルに焼き込んでおく
pub fn auto_orient(img: DynamicImage, data: &[u8]) -> DynamicImage {
    match Orientation::read(data) {
        Some(orientation) => orientation.apply(img),
        None => img,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::ImageFormat;
    use std::io::Cursor;

    /// Orientation タグだけを持つ EXIF (APP1) を SOI の直後に差し込んだ JPEG
    fn jpeg_with_orientation(width: u32, height: u32, tag: u16) -> Vec<u8> {
        let mut buf = Cursor::new(Vec::new());
        DynamicImage::new_rgb8(width, height)
            .write_to(&mut buf, ImageFormat::Jpeg)
            .unwrap();
        let jpeg = buf.into_inner();

        let mut payload = b"Exif\0\0MM\0\x2a\0\0\0\x08".to_vec();
        payload.extend_from_slice(&[0x00, 0x01]);
        payload.extend_from_slice(&[0x01, 0x12, 0x00, 0x03, 0x00, 0x00, 0x00, 0x01]);
        payload.extend_from_slice(&tag.to_be_bytes());
        payload.extend_from_slice(&[0x00, 0x00]);
        payload.extend_from_slice(&[0x00, 0x00, 0x00, 0x00]);

        let mut out = jpeg[..2].to_vec();
        out.extend_from_slice(&[0xFF, 0xE1]);
        out.extend_from_slice(&((payload.len() + 2) as u16).to_be_bytes());
        out.extend_from_slice(&payload);
        out.extend_from_slice(&jpeg[2..]);
        out
    }

    #[test]
    fn test_from_tag() {
        assert_eq!(Orientation::from_tag(1), Some(Orientation::Normal));
        assert_eq!(Orientation::from_tag(6), Some(Orientation::Rotate90));
        assert_eq!(Orientation::from_tag(9), None);
    }

    #[test]
    fn test_rotate90_swaps_axes() {
        let img = Orientation::Rotate90.apply(DynamicImage::new_rgb8(10, 20));
        assert_eq!((img.width(), img.height()), (20, 10));
    }

    #[test]
    fn test_auto_orient_without_exif_is_noop() {
        let img = auto_orient(DynamicImage::new_rgb8(10, 20), b"no exif here");
        assert_eq!((img.width(), img.height()), (10, 20));
    }

    #[test]
    fn test_read_orientation_from_jpeg() {
        let data = jpeg_with_orientation(40, 20, 6);
        assert_eq!(Orientation::read(&data), Some(Orientation::Rotate90));
    }

    #[test]
    fn test_auto_orient_applies_exif_rotation() {
        let data = jpeg_with_orientation(40, 20, 6);
        let img = image::load_from_memory_with_format(&data, ImageFormat::Jpeg).unwrap();
        assert_eq!((img.width(), img.height()), (40, 20));

        let img = auto_orient(img, &data);
        assert_eq!((img.width(), img.height()), (20, 40));
    }
}
