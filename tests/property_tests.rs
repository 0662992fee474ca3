use image::{DynamicImage, GenericImageView};
use imgopt::formats::{resolve_output, OutputFormat};
use imgopt::optimizer::{resize_to_max_width, OptimizeOptions};
use imgopt::utils::{compression_ratio, is_image_file};
use proptest::prelude::*;
use std::path::Path;

proptest! {
    #[test]
    fn optimize_options_quality_in_range(quality in 1u8..=100u8) {
        let options = OptimizeOptions::new(1200, quality, true);
        prop_assert!(options.is_ok());
    }

    #[test]
    fn optimize_options_quality_out_of_range(quality in 0u8..=255u8) {
        let result = OptimizeOptions::new(1200, quality, true);
        if quality == 0 || quality > 100 {
            prop_assert!(result.is_err());
        } else {
            prop_assert!(result.is_ok());
        }
    }

    #[test]
    fn resize_never_triggers_at_or_below_max_width(
        width in 1u32..=600u32,
        height in 1u32..=600u32,
        max_width in 600u32..=1200u32
    ) {
        let mut img = DynamicImage::new_rgb8(width, height);
        let resized = resize_to_max_width(&mut img, max_width);

        prop_assert!(!resized);
        prop_assert_eq!(img.dimensions(), (width, height));
    }

    #[test]
    fn resize_above_max_width_is_exact_with_floored_height(
        width in 301u32..=800u32,
        height in 1u32..=400u32,
        max_width in 100u32..=300u32
    ) {
        let mut img = DynamicImage::new_rgb8(width, height);
        let resized = resize_to_max_width(&mut img, max_width);

        prop_assert!(resized);
        let expected_height = ((height as u64 * max_width as u64) / width as u64) as u32;
        prop_assert_eq!(img.dimensions(), (max_width, expected_height));
    }

    #[test]
    fn compression_ratio_matches_formula(
        original in 1u64..=1_000_000_000u64,
        new in 0u64..=1_000_000_000u64
    ) {
        let expected = (1.0 - new as f64 / original as f64) * 100.0;
        let actual = compression_ratio(original, new);
        prop_assert!((actual - expected).abs() < 1e-9);
    }

    #[test]
    fn compression_ratio_zero_original_is_zero(new in 0u64..=1_000_000u64) {
        prop_assert_eq!(compression_ratio(0, new), 0.0);
    }

    #[test]
    fn is_image_file_recognizes_extensions(
        extension in prop::sample::select(
            &["jpg", "jpeg", "png", "bmp", "gif", "webp", "tiff", "txt", "doc", "pdf"]
        )
    ) {
        let filename = format!("test.{}", extension);
        let is_image = is_image_file(Path::new(&filename));

        let expected = matches!(extension, "jpg" | "jpeg" | "png" | "bmp" | "gif" | "webp");
        prop_assert_eq!(is_image, expected);
    }

    #[test]
    fn resolve_output_always_yields_jpeg_or_png(
        stem in "[a-zA-Z0-9_-]{1,12}",
        extension in prop::sample::select(&["jpg", "jpeg", "png", "bmp", "gif", "webp", "xyz"])
    ) {
        let filename = format!("{}.{}", stem, extension);
        let (path, format) = resolve_output(Path::new(&filename));

        match format {
            OutputFormat::Png => {
                prop_assert_eq!(extension, "png");
                prop_assert_eq!(path, Path::new(&filename));
            }
            OutputFormat::Jpeg => {
                let ext = path.extension().unwrap().to_str().unwrap().to_lowercase();
                prop_assert!(ext == "jpg" || ext == "jpeg");
            }
        }
    }
}
