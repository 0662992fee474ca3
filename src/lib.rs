pub mod batch;
pub mod cli;
pub mod constants;
pub mod error;
pub mod formats;
pub mod logger;
pub mod optimizer;
pub mod utils;

pub use batch::{collect_image_files, optimize_directory, BatchSummary};
pub use error::{OptimizeError, Result};
pub use formats::{resolve_output, OutputFormat};
pub use optimizer::{
    flatten_to_rgb, optimize_image, resize_to_max_width, validate_file_exists, OptimizeOptions,
    OptimizeReport,
};
pub use utils::{compression_ratio, format_file_size, is_image_file};
