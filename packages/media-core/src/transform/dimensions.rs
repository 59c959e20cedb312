use crate::transform::params::{FitMode, Position};

/// リサイズ手順
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResizePlan {
    /// 寸法指定なし
    Keep,
    /// 指定寸法へ拡縮するだけ
    Scale { width: u32, height: u32 },
    /// 拡縮後に target 寸法へ切り取る
    ScaleThenCrop {
        width: u32,
        height: u32,
        x: u32,
        y: u32,
        target_w: u32,
        target_h: u32,
    },
    /// 拡縮後に target 寸法のキャンバスへ配置する
    ScaleThenPad {
        width: u32,
        height: u32,
        x: u32,
        y: u32,
        target_w: u32,
        target_h: u32,
    },
}

impl ResizePlan {
    /// 最終的な出力寸法
    pub fn output_dimensions(&self, src_w: u32, src_h: u32) -> (u32, u32) {
        match *self {
            Self::Keep => (src_w, src_h),
            Self::Scale { width, height } => (width, height),
            Self::ScaleThenCrop {
                target_w, target_h, ..
            }
            | Self::ScaleThenPad {
                target_w, target_h, ..
            } => (target_w, target_h),
        }
    }
}

/// 倍率を適用して新しい寸法を計算する（最小1px）
fn apply_scale(src_w: u32, src_h: u32, scale: f64) -> (u32, u32) {
    let new_w = (src_w as f64 * scale).round() as u32;
    let new_h = (src_h as f64 * scale).round() as u32;

    (new_w.max(1), new_h.max(1))
}

/// 領域に収まる倍率
fn fit_within_scale(src_w: u32, src_h: u32, target_w: u32, target_h: u32) -> f64 {
    let scale_w = target_w as f64 / src_w as f64;
    let scale_h = target_h as f64 / src_h as f64;
    scale_w.min(scale_h)
}

/// 領域を覆う倍率
fn cover_scale(src_w: u32, src_h: u32, target_w: u32, target_h: u32) -> f64 {
    let scale_w = target_w as f64 / src_w as f64;
    let scale_h = target_h as f64 / src_h as f64;
    scale_w.max(scale_h)
}

/// 元画像の寸法と指定寸法からリサイズ手順を決める
///
/// 片方の軸だけ指定された場合はフィットモードに関係なくアスペクト比を維持する。
/// 拡大も許可する
pub fn plan_resize(
    src_w: u32,
    src_h: u32,
    target_w: Option<u32>,
    target_h: Option<u32>,
    fit: FitMode,
    position: Position,
) -> ResizePlan {
    match (target_w, target_h) {
        (None, None) => ResizePlan::Keep,
        (Some(w), None) => {
            let (_, height) = apply_scale(src_w, src_h, w as f64 / src_w as f64);
            ResizePlan::Scale { width: w, height }
        }
        (None, Some(h)) => {
            let (width, _) = apply_scale(src_w, src_h, h as f64 / src_h as f64);
            ResizePlan::Scale { width, height: h }
        }
        (Some(w), Some(h)) => plan_both_axes(src_w, src_h, w, h, fit, position),
    }
}

fn plan_both_axes(
    src_w: u32,
    src_h: u32,
    target_w: u32,
    target_h: u32,
    fit: FitMode,
    position: Position,
) -> ResizePlan {
    match fit {
        FitMode::Fill => ResizePlan::Scale {
            width: target_w,
            height: target_h,
        },
        FitMode::Inside => {
            let (width, height) =
                apply_scale(src_w, src_h, fit_within_scale(src_w, src_h, target_w, target_h));
            ResizePlan::Scale {
                width: width.min(target_w),
                height: height.min(target_h),
            }
        }
        FitMode::Outside => {
            let (width, height) =
                apply_scale(src_w, src_h, cover_scale(src_w, src_h, target_w, target_h));
            ResizePlan::Scale {
                width: width.max(target_w),
                height: height.max(target_h),
            }
        }
        FitMode::Cover => {
            let (width, height) =
                apply_scale(src_w, src_h, cover_scale(src_w, src_h, target_w, target_h));
            let (width, height) = (width.max(target_w), height.max(target_h));
            let (x, y) = position.offset(width - target_w, height - target_h);
            ResizePlan::ScaleThenCrop {
                width,
                height,
                x,
                y,
                target_w,
                target_h,
            }
        }
        FitMode::Contain => {
            let (width, height) =
                apply_scale(src_w, src_h, fit_within_scale(src_w, src_h, target_w, target_h));
            let (width, height) = (width.min(target_w), height.min(target_h));
            let (x, y) = position.offset(target_w - width, target_h - height);
            ResizePlan::ScaleThenPad {
                width,
                height,
                x,
                y,
                target_w,
                target_h,
            }
        }
    }
}
