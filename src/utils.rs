/// Shared helpers for size reporting and file filtering.
use crate::constants::SUPPORTED_IMAGE_EXTENSIONS;
use std::path::Path;

/// Check whether a path has a supported raster image extension
/// (case-insensitive). Only the filename is inspected, not the contents.
pub fn is_image_file(path: &Path) -> bool {
    path.extension()
        .and_then(|s| s.to_str())
        .map(|ext| {
            let ext_lower = ext.to_lowercase();
            SUPPORTED_IMAGE_EXTENSIONS.contains(&ext_lower.as_str())
        })
        .unwrap_or(false)
}

/// Format a byte count in human-readable units (e.g. "1.5 KB", "3.2 MB").
pub fn format_file_size(bytes: u64) -> String {
    const UNITS: &[&str] = &["B", "KB", "MB", "GB", "TB"];
    const THRESHOLD: f64 = 1024.0;

    if bytes == 0 {
        return "0 B".to_string();
    }

    let mut size = bytes as f64;
    let mut unit_index = 0;

    while size >= THRESHOLD && unit_index < UNITS.len() - 1 {
        size /= THRESHOLD;
        unit_index += 1;
    }

    if unit_index == 0 {
        format!("{} {}", bytes, UNITS[unit_index])
    } else {
        format!("{:.1} {}", size, UNITS[unit_index])
    }
}

/// Percentage reduction in byte size: `(1 - new/original) * 100`.
/// Returns 0.0 when the original size is 0 to avoid division by zero.
/// Negative values mean the file grew.
pub fn compression_ratio(original_size: u64, new_size: u64) -> f64 {
    if original_size == 0 {
        return 0.0;
    }
    (1.0 - new_size as f64 / original_size as f64) * 100.0
}
