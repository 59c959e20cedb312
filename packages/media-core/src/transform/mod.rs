pub mod decode;
pub mod dimensions;
pub mod encode;
pub mod orientation;
pub mod params;
pub mod resize;

pub use decode::decode_image;
pub use dimensions::{plan_resize, ResizePlan};
pub use encode::encode_image;
pub use orientation::{auto_orient, Orientation};
pub use params::{FitMode, OutputFormat, Position, TransformRequest};
pub use resize::{apply_plan, resize_image};
