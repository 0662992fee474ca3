use crate::constants::{MAX_QUALITY, MIN_QUALITY, OXIPNG_MAX_PRESET};
use crate::error::{OptimizeError, Result};
use crate::formats::{resolve_output, OutputFormat};
use crate::utils::compression_ratio;
use crate::{info, verbose};
use image::{ColorType, DynamicImage, GenericImageView, ImageFormat, ImageReader, Rgb, RgbImage};
use oxipng::{InFile, Options, OutFile};
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Per-run optimization parameters. Built once from the CLI and read-only
/// for the rest of the run.
#[derive(Debug, Clone)]
pub struct OptimizeOptions {
    pub max_width: u32,
    pub jpeg_quality: u8,
    pub png_optimize: bool,
}

impl OptimizeOptions {
    pub fn new(max_width: u32, jpeg_quality: u8, png_optimize: bool) -> Result<Self> {
        if !(MIN_QUALITY..=MAX_QUALITY).contains(&jpeg_quality) {
            return Err(OptimizeError::InvalidQuality(jpeg_quality));
        }
        if max_width == 0 {
            return Err(OptimizeError::InvalidMaxWidth(max_width));
        }

        Ok(Self {
            max_width,
            jpeg_quality,
            png_optimize,
        })
    }
}

/// Outcome of one successfully optimized file. Failures are reported as
/// `Err` and carry no sizes.
#[derive(Debug, Clone)]
pub struct OptimizeReport {
    pub original_size: u64,
    pub new_size: u64,
    pub format: OutputFormat,
    pub width: u32,
    pub height: u32,
    pub output_path: PathBuf,
}

pub fn validate_file_exists(path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(OptimizeError::FileNotFound(path.to_path_buf()));
    }
    Ok(())
}

/// Optimize a single image file.
///
/// Decodes the input, flattens transparency onto white, converts to RGB,
/// downscales to `max_width` if wider (aspect preserved), and re-encodes
/// as JPEG or PNG depending on the output path's extension. When `output`
/// is `None` the input file is overwritten in place; the original bytes
/// are gone after that.
pub fn optimize_image(
    input: &Path,
    output: Option<&Path>,
    options: &OptimizeOptions,
) -> Result<OptimizeReport> {
    validate_file_exists(input)?;

    // Stat before decoding so the reported size is the on-disk original,
    // even when the output overwrites the input.
    let original_size = fs::metadata(input)?.len();

    let img = ImageReader::open(input)?.decode()?;
    let (original_width, original_height) = img.dimensions();
    verbose!(
        "decoded {:?}: {}x{}, color type {:?}",
        input,
        original_width,
        original_height,
        img.color()
    );

    let mut img = flatten_to_rgb(img);

    if resize_to_max_width(&mut img, options.max_width) {
        info!(
            "  🔄 Resized: {}x{} (original: {}x{})",
            img.width(),
            img.height(),
            original_width,
            original_height
        );
    }

    let requested = output.unwrap_or(input);
    let (output_path, format) = resolve_output(requested);

    save_image(&img, &output_path, format, options)?;

    let new_size = fs::metadata(&output_path)?.len();
    let ratio = compression_ratio(original_size, new_size);

    info!(
        "  ✅ Optimized: {:?}",
        output_path.file_name().unwrap_or_default()
    );
    info!("    Format: {}", format);
    info!("    Original size: {:.2} KB", original_size as f64 / 1024.0);
    info!("    New size: {:.2} KB", new_size as f64 / 1024.0);
    info!("    Compression: {:.1}%", ratio);

    Ok(OptimizeReport {
        original_size,
        new_size,
        format,
        width: img.width(),
        height: img.height(),
        output_path,
    })
}

/// Normalize any decoded color mode to plain RGB8.
///
/// Images with a true per-pixel alpha channel are composited onto an
/// opaque white canvas, alpha as the blend mask. Transparent pixels
/// become white; this is a fixed policy, not configurable. Grayscale-
/// with-alpha converts directly to RGB with the alpha dropped.
pub fn flatten_to_rgb(img: DynamicImage) -> DynamicImage {
    match img.color() {
        ColorType::Rgba8 | ColorType::Rgba16 | ColorType::Rgba32F => {
            let rgba = img.to_rgba8();
            let (width, height) = rgba.dimensions();
            let mut canvas = RgbImage::from_pixel(width, height, Rgb([255, 255, 255]));
            for (x, y, pixel) in rgba.enumerate_pixels() {
                let [r, g, b, a] = pixel.0;
                let a = a as u16;
                // c * a + 255 * (255 - a) stays within u16.
                let blend = |c: u8| ((c as u16 * a + 255 * (255 - a)) / 255) as u8;
                canvas.put_pixel(x, y, Rgb([blend(r), blend(g), blend(b)]));
            }
            DynamicImage::ImageRgb8(canvas)
        }
        ColorType::Rgb8 => img,
        _ => DynamicImage::ImageRgb8(img.to_rgb8()),
    }
}

/// Downscale to `max_width` when the image is wider, preserving aspect
/// ratio with floor rounding on the height. Height alone never triggers a
/// resize. Returns whether a resize happened.
pub fn resize_to_max_width(img: &mut DynamicImage, max_width: u32) -> bool {
    let (width, height) = img.dimensions();
    if width <= max_width {
        return false;
    }

    let new_height = ((height as u64 * max_width as u64) / width as u64) as u32;
    *img = img.resize_exact(max_width, new_height, image::imageops::FilterType::Lanczos3);
    true
}

fn save_image(
    img: &DynamicImage,
    output: &Path,
    format: OutputFormat,
    options: &OptimizeOptions,
) -> Result<()> {
    if let Some(parent) = output.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .map_err(|_| OptimizeError::DirectoryCreationFailed(parent.to_path_buf()))?;
        }
    }

    match format {
        OutputFormat::Jpeg => {
            let file = File::create(output)?;
            let mut writer = BufWriter::new(file);
            let encoder =
                image::codecs::jpeg::JpegEncoder::new_with_quality(&mut writer, options.jpeg_quality);
            img.write_with_encoder(encoder)?;
            writer.flush()?;
        }
        OutputFormat::Png => {
            if options.png_optimize {
                // Encode to a temp path first, then run oxipng at maximum
                // effort into the final location.
                let temp_path = output.with_extension("tmp.png");
                img.save_with_format(&temp_path, ImageFormat::Png)?;

                struct TempFileGuard(PathBuf);
                impl Drop for TempFileGuard {
                    fn drop(&mut self) {
                        let _ = fs::remove_file(&self.0);
                    }
                }
                let _guard = TempFileGuard(temp_path.clone());

                let mut oxipng_options = Options::from_preset(OXIPNG_MAX_PRESET);
                oxipng_options.force = true;

                let input = InFile::Path(temp_path.clone());
                let out = OutFile::Path {
                    path: Some(output.to_path_buf()),
                    preserve_attrs: false,
                };
                oxipng::optimize(&input, &out, &oxipng_options)
                    .map_err(|e| OptimizeError::PngOptimization(e.to_string()))?;
            } else {
                img.save_with_format(output, ImageFormat::Png)?;
            }
        }
    }

    Ok(())
}
