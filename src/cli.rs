use crate::constants::{DEFAULT_IMAGE_DIR, DEFAULT_JPEG_QUALITY, DEFAULT_MAX_WIDTH};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "imgopt",
    about = "Optimize a directory of images for fast mobile loading",
    long_about = "imgopt batch-processes a directory of images for mobile delivery. \
                  Oversized images are downscaled to a maximum width with the aspect \
                  ratio preserved, transparency is flattened onto white, and every \
                  image is re-encoded as JPEG or PNG with measurable size savings.",
    version,
    after_help = "EXAMPLES:\n  \
    imgopt\n  \
    imgopt -d photos -o optimized\n  \
    imgopt -d imgs -w 800 -q 75\n  \
    imgopt --no-png-optimize"
)]
pub struct Args {
    #[arg(
        short = 'd',
        long = "dir",
        default_value = DEFAULT_IMAGE_DIR,
        help = "Directory of images to optimize"
    )]
    pub dir: PathBuf,

    #[arg(
        short = 'o',
        long = "output",
        help = "Output directory (default: overwrite originals in place)",
        long_help = "Write optimized images into this directory, creating it if \
                     missing. Without it, each input file is overwritten in place \
                     and the original bytes are lost."
    )]
    pub output: Option<PathBuf>,

    #[arg(
        short = 'w',
        long = "max-width",
        default_value_t = DEFAULT_MAX_WIDTH,
        help = "Maximum width in pixels",
        long_help = "Images wider than this are downscaled to exactly this width, \
                     with the height reduced proportionally. Narrower images are \
                     left at their original dimensions regardless of height."
    )]
    pub max_width: u32,

    #[arg(
        short = 'q',
        long = "quality",
        default_value_t = DEFAULT_JPEG_QUALITY,
        help = "JPEG quality (1-100)"
    )]
    pub quality: u8,

    #[arg(
        long = "no-png-optimize",
        help = "Disable the extra PNG optimization pass",
        long_help = "PNG outputs normally get a maximum-effort oxipng pass. This \
                     switch falls back to the default PNG encoder, trading file \
                     size for processing time."
    )]
    pub no_png_optimize: bool,

    #[arg(long, help = "Suppress progress output")]
    pub quiet: bool,

    #[arg(long, help = "Print per-file decode details")]
    pub verbose: bool,
}
