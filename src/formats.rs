/// Output format selection and extension rewriting.
///
/// Only JPEG and PNG are produced. The output path's extension decides the
/// format: `.png` keeps PNG, everything else becomes JPEG with the
/// extension rewritten to `.jpg` when needed.
use image::ImageFormat;
use std::fmt;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// JPEG with lossy, quality-controlled compression
    Jpeg,
    /// PNG with lossless compression
    Png,
}

impl OutputFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Jpeg => "jpg",
            OutputFormat::Png => "png",
        }
    }

    pub fn to_image_format(&self) -> ImageFormat {
        match self {
            OutputFormat::Jpeg => ImageFormat::Jpeg,
            OutputFormat::Png => ImageFormat::Png,
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OutputFormat::Jpeg => "JPEG",
            OutputFormat::Png => "PNG",
        };
        write!(f, "{}", name)
    }
}

/// Resolve the final output path and format for a requested path.
///
/// `.png` (case-insensitive) stays PNG at the same path. `.jpg`/`.jpeg`
/// stay JPEG at the same path. Any other or missing extension is rewritten
/// to `.jpg` and encoded as JPEG.
pub fn resolve_output(requested: &Path) -> (PathBuf, OutputFormat) {
    let ext = requested
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_lowercase());

    match ext.as_deref() {
        Some("png") => (requested.to_path_buf(), OutputFormat::Png),
        Some("jpg") | Some("jpeg") => (requested.to_path_buf(), OutputFormat::Jpeg),
        _ => (requested.with_extension("jpg"), OutputFormat::Jpeg),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_output_png_kept() {
        let (path, format) = resolve_output(Path::new("photo.png"));
        assert_eq!(path, PathBuf::from("photo.png"));
        assert_eq!(format, OutputFormat::Png);

        let (path, format) = resolve_output(Path::new("photo.PNG"));
        assert_eq!(path, PathBuf::from("photo.PNG"));
        assert_eq!(format, OutputFormat::Png);
    }

    #[test]
    fn test_resolve_output_jpeg_kept() {
        let (path, format) = resolve_output(Path::new("photo.jpg"));
        assert_eq!(path, PathBuf::from("photo.jpg"));
        assert_eq!(format, OutputFormat::Jpeg);

        let (path, format) = resolve_output(Path::new("photo.JPEG"));
        assert_eq!(path, PathBuf::from("photo.JPEG"));
        assert_eq!(format, OutputFormat::Jpeg);
    }

    #[test]
    fn test_resolve_output_rewrites_other_extensions() {
        let (path, format) = resolve_output(Path::new("icon.bmp"));
        assert_eq!(path, PathBuf::from("icon.jpg"));
        assert_eq!(format, OutputFormat::Jpeg);

        let (path, format) = resolve_output(Path::new("anim.gif"));
        assert_eq!(path, PathBuf::from("anim.jpg"));
        assert_eq!(format, OutputFormat::Jpeg);

        let (path, format) = resolve_output(Path::new("pic.webp"));
        assert_eq!(path, PathBuf::from("pic.jpg"));
        assert_eq!(format, OutputFormat::Jpeg);
    }

    #[test]
    fn test_resolve_output_missing_extension() {
        let (path, format) = resolve_output(Path::new("photo"));
        assert_eq!(path, PathBuf::from("photo.jpg"));
        assert_eq!(format, OutputFormat::Jpeg);
    }

    #[test]
    fn test_output_format_display_and_extension() {
        assert_eq!(format!("{}", OutputFormat::Jpeg), "JPEG");
        assert_eq!(format!("{}", OutputFormat::Png), "PNG");
        assert_eq!(OutputFormat::Jpeg.extension(), "jpg");
        assert_eq!(OutputFormat::Png.extension(), "png");
    }
}
