pub const DEFAULT_IMAGE_DIR: &str = "imgs";
pub const DEFAULT_MAX_WIDTH: u32 = 1200;
pub const DEFAULT_JPEG_QUALITY: u8 = 85;

pub const MIN_QUALITY: u8 = 1;
pub const MAX_QUALITY: u8 = 100;

/// Input formats accepted during directory scans. Output is JPEG or PNG only.
pub const SUPPORTED_IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "bmp", "gif", "webp"];

/// oxipng preset used when PNG optimization is enabled (maximum effort).
pub const OXIPNG_MAX_PRESET: u8 = 6;
