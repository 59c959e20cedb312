/// 正規化済みの変換リクエスト
///
/// `output_format` / `fit` / `position` は文字列のまま保持し、
/// 解釈はコーデック側（[`OutputFormat`] / [`FitMode`] / [`Position`]）で行う
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransformRequest {
    pub source_key: String,
    pub output_format: String,
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub fit: String,
    pub position: String,
    pub quality: i64,
}

impl TransformRequest {
    /// レスポンスの Content-Type（`image/<format>` をそのまま返す）
    pub fn mime_type(&self) -> String {
        format!("image/{}", self.output_format)
    }
}

/// 出力フォーマット
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Jpeg,
    Png,
    WebP,
    Avif,
    Gif,
}

impl OutputFormat {
    /// 文字列から OutputFormat を作成
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "jpeg" | "jpg" => Some(Self::Jpeg),
            "png" => Some(Self::Png),
            "webp" => Some(Self::WebP),
            "avif" => Some(Self::Avif),
            "gif" => Some(Self::Gif),
            _ => None,
        }
    }
}

/// 幅・高さの両方が指定されたときの合わせ方
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FitMode {
    /// 領域を覆うように拡縮し、はみ出した部分を切り取る
    Cover,
    /// 領域に収まるように拡縮し、余白を塗りつぶす
    Contain,
    /// アスペクト比を無視して引き伸ばす
    Fill,
    /// 領域に収まるように拡縮する（余白なし）
    Inside,
    /// 領域を覆うように拡縮する（切り取りなし）
    Outside,
}

impl FitMode {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "cover" => Some(Self::Cover),
            "contain" => Some(Self::Contain),
            "fill" => Some(Self::Fill),
            "inside" => Some(Self::Inside),
            "outside" => Some(Self::Outside),
            _ => None,
        }
    }
}

/// 切り取り・余白配置の基準点
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Position {
    Centre,
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
}

impl Position {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            // 内容解析による位置指定は中央として扱う
            "centre" | "center" | "entropy" | "attention" => Some(Self::Centre),
            "top" | "north" => Some(Self::North),
            "right top" | "northeast" => Some(Self::NorthEast),
            "right" | "east" => Some(Self::East),
            "right bottom" | "southeast" => Some(Self::SouthEast),
            "bottom" | "south" => Some(Self::South),
            "left bottom" | "southwest" => Some(Self::SouthWest),
            "left" | "west" => Some(Self::West),
            "left top" | "northwest" => Some(Self::NorthWest),
            _ => None,
        }
    }

    /// 余り（free_w x free_h）の中での左上オフセットを返す
    pub fn offset(&self, free_w: u32, free_h: u32) -> (u32, u32) {
        let x = match self {
            Self::West | Self::NorthWest | Self::SouthWest => 0,
            Self::East | Self::NorthEast | Self::SouthEast => free_w,
            Self::Centre | Self::North | Self::South => free_w / 2,
        };
        let y = match self {
            Self::North | Self::NorthEast | Self::NorthWest => 0,
            Self::South | Self::SouthEast | Self::SouthWest => free_h,
            Self::Centre | Self::East | Self::West => free_h / 2,
        };
        (x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(format: &str) -> TransformRequest {
        TransformRequest {
            source_key: "icon.png".to_string(),
            output_format: format.to_string(),
            width: None,
            height: None,
            fit: "cover".to_string(),
            position: "centre".to_string(),
            quality: 80,
        }
    }

    #[test]
    fn test_mime_type_uses_requested_format_verbatim() {
        assert_eq!(request("webp").mime_type(), "image/webp");
        assert_eq!(request("jpg").mime_type(), "image/jpg");
    }

    #[test]
    fn test_output_format_from_str() {
        assert_eq!(OutputFormat::from_str("jpeg"), Some(OutputFormat::Jpeg));
        assert_eq!(OutputFormat::from_str("JPG"), Some(OutputFormat::Jpeg));
        assert_eq!(OutputFormat::from_str("png"), Some(OutputFormat::Png));
        assert_eq!(OutputFormat::from_str("webp"), Some(OutputFormat::WebP));
        assert_eq!(OutputFormat::from_str("avif"), Some(OutputFormat::Avif));
        assert_eq!(OutputFormat::from_str("gif"), Some(OutputFormat::Gif));
        assert_eq!(OutputFormat::from_str("bmp"), None);
    }

    #[test]
    fn test_fit_mode_from_str() {
        assert_eq!(FitMode::from_str("cover"), Some(FitMode::Cover));
        assert_eq!(FitMode::from_str("Contain"), Some(FitMode::Contain));
        assert_eq!(FitMode::from_str("fill"), Some(FitMode::Fill));
        assert_eq!(FitMode::from_str("inside"), Some(FitMode::Inside));
        assert_eq!(FitMode::from_str("outside"), Some(FitMode::Outside));
        assert_eq!(FitMode::from_str("crop"), None);
    }

    #[test]
    fn test_position_aliases() {
        assert_eq!(Position::from_str("centre"), Some(Position::Centre));
        assert_eq!(Position::from_str("center"), Some(Position::Centre));
        assert_eq!(Position::from_str("right top"), Some(Position::NorthEast));
        assert_eq!(Position::from_str("southwest"), Some(Position::SouthWest));
        assert_eq!(Position::from_str("middle"), None);
    }

    #[test]
    fn test_content_strategies_fall_back_to_centre() {
        assert_eq!(Position::from_str("entropy"), Some(Position::Centre));
        assert_eq!(Position::from_str("Attention"), Some(Position::Centre));
    }

    #[test]
    fn test_position_offset() {
        assert_eq!(Position::Centre.offset(100, 50), (50, 25));
        assert_eq!(Position::NorthWest.offset(100, 50), (0, 0));
        assert_eq!(Position::SouthEast.offset(100, 50), (100, 50));
        assert_eq!(Position::North.offset(100, 0), (50, 0));
        assert_eq!(Position::West.offset(0, 50), (0, 25));
    }
}
