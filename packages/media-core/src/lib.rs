pub mod constants;
pub mod errors;
pub mod storage;
pub mod transform;
pub mod validation;

// 公開API
pub use constants::{
    DEFAULT_FIT, DEFAULT_FORMAT, DEFAULT_POSITION, DEFAULT_QUALITY, MAX_PAYLOAD_BYTES, MAX_PIXELS,
};
pub use errors::{MediaError, StorageError, TransformError, ValidationError};
pub use storage::{ObjectStore, S3ObjectStore, S3Settings};
pub use transform::{
    apply_plan, auto_orient, decode_image, encode_image, plan_resize, resize_image, FitMode,
    Orientation, OutputFormat, Position, ResizePlan, TransformRequest,
};
pub use validation::{decode_key, normalize};
