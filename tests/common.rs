use image::{DynamicImage, Rgba, RgbaImage};
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub fn create_temp_directory() -> TempDir {
    TempDir::new().unwrap()
}

/// Write a real decodable RGB image at the given path. The format follows
/// the file extension.
pub fn create_rgb_image(path: &Path, width: u32, height: u32) {
    DynamicImage::new_rgb8(width, height).save(path).unwrap();
}

/// Write a real RGBA PNG with every pixel fully transparent.
pub fn create_transparent_png(path: &Path, width: u32, height: u32) {
    let rgba = RgbaImage::from_pixel(width, height, Rgba([10, 20, 30, 0]));
    rgba.save(path).unwrap();
}

/// Write a file with an image extension but undecodable contents.
pub fn create_broken_image(dir: &Path, name: &str) -> PathBuf {
    let path = dir.join(name);
    File::create(&path)
        .unwrap()
        .write_all(b"not a real image")
        .unwrap();
    path
}
