use crate::error::{OptimizeError, Result};
use crate::optimizer::{optimize_image, OptimizeOptions};
use crate::utils::{compression_ratio, format_file_size, is_image_file};
use crate::{error, info, warn};
use indicatif::{ProgressBar, ProgressStyle};
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Aggregate totals for one batch run. Failed files count toward
/// `attempted` only; their sizes never enter the totals.
#[derive(Debug, Clone, Default)]
pub struct BatchSummary {
    pub attempted: usize,
    pub succeeded: usize,
    pub total_original_bytes: u64,
    pub total_new_bytes: u64,
}

impl BatchSummary {
    pub fn bytes_saved(&self) -> u64 {
        self.total_original_bytes.saturating_sub(self.total_new_bytes)
    }

    pub fn compression_ratio(&self) -> f64 {
        compression_ratio(self.total_original_bytes, self.total_new_bytes)
    }
}

/// List image files directly inside `dir` (non-recursive), filtered by
/// extension. Order is whatever the directory enumeration yields.
pub fn collect_image_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut image_files = Vec::new();

    for entry in WalkDir::new(dir).min_depth(1).max_depth(1) {
        let entry = entry?;
        let path = entry.path();
        if path.is_file() && is_image_file(path) {
            image_files.push(path.to_path_buf());
        }
    }

    Ok(image_files)
}

/// Optimize every supported image directly inside `dir`, sequentially.
///
/// With `output_dir` set, results land at `output_dir/<same filename>`
/// (the optimizer may still rewrite the extension); without it each input
/// is overwritten in place. A missing directory is reported and yields an
/// empty summary rather than an error. Per-file failures are logged and
/// never abort the batch.
pub fn optimize_directory(
    dir: &Path,
    output_dir: Option<&Path>,
    options: &OptimizeOptions,
) -> Result<BatchSummary> {
    if !dir.exists() {
        error!("Directory {:?} does not exist", dir);
        return Ok(BatchSummary::default());
    }

    let image_files = collect_image_files(dir)?;

    if image_files.is_empty() {
        warn!("No image files found in {:?}", dir);
        return Ok(BatchSummary::default());
    }

    info!("Found {} images to optimize", image_files.len());
    info!(
        "Settings: max width={}px, JPEG quality={}, PNG optimization={}",
        options.max_width,
        options.jpeg_quality,
        if options.png_optimize { "on" } else { "off" }
    );
    info!("{}", "-".repeat(60));

    if let Some(out) = output_dir {
        fs::create_dir_all(out)
            .map_err(|_| OptimizeError::DirectoryCreationFailed(out.to_path_buf()))?;
    }

    let progress = ProgressBar::new(image_files.len() as u64);
    progress.set_style(ProgressStyle::default_bar());

    let mut summary = BatchSummary::default();

    for input_path in image_files {
        summary.attempted += 1;
        info!(
            "\nProcessing: {:?}",
            input_path.file_name().unwrap_or_default()
        );

        let target = output_dir.map(|out| out.join(input_path.file_name().unwrap_or_default()));

        match optimize_image(&input_path, target.as_deref(), options) {
            Ok(report) => {
                summary.succeeded += 1;
                summary.total_original_bytes += report.original_size;
                summary.total_new_bytes += report.new_size;
            }
            Err(e) => {
                error!("Failed to optimize {:?}: {}", input_path, e);
            }
        }
        progress.inc(1);
    }

    progress.finish_and_clear();

    info!("\n{}", "=".repeat(60));
    info!("Optimization complete!");
    info!(
        "  ✅ Optimized {}/{} images",
        summary.succeeded, summary.attempted
    );
    if summary.succeeded > 0 {
        info!(
            "  📊 Total size: {} → {}",
            format_file_size(summary.total_original_bytes),
            format_file_size(summary.total_new_bytes)
        );
        info!(
            "  💾 Saved: {} ({:.1}%)",
            format_file_size(summary.bytes_saved()),
            summary.compression_ratio()
        );
    }

    Ok(summary)
}
