/// レスポンスとして返せる最大バイト数（実行環境のペイロード上限、変更不可）
pub const MAX_PAYLOAD_BYTES: usize = 6 * 1024 * 1024;

/// 画像の最大ピクセル数（0x3FFF * 0x3FFF、入力・出力の両方に適用）
pub const MAX_PIXELS: u64 = 0x3FFF * 0x3FFF;

/// デフォルト品質
pub const DEFAULT_QUALITY: i64 = 80;

/// デフォルト出力フォーマット
pub const DEFAULT_FORMAT: &str = "png";

/// デフォルトのフィットモード
pub const DEFAULT_FIT: &str = "cover";

/// デフォルトの配置
pub const DEFAULT_POSITION: &str = "centre";
