use clap::Parser;
use imgopt::batch::optimize_directory;
use imgopt::cli::Args;
use imgopt::logger;
use imgopt::optimizer::OptimizeOptions;

fn main() {
    let args = Args::parse();

    logger::set_quiet_mode(args.quiet);
    logger::set_verbose_mode(args.verbose);

    // Configuration errors are the only fatal ones; everything after this
    // point completes with exit code 0, per-file failures included.
    let options = match OptimizeOptions::new(args.max_width, args.quality, !args.no_png_optimize) {
        Ok(options) => options,
        Err(e) => {
            imgopt::error!("{}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = optimize_directory(&args.dir, args.output.as_deref(), &options) {
        imgopt::error!("{}", e);
        std::process::exit(1);
    }
}
