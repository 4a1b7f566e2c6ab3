use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use wfc::{generate, Config};

#[derive(Parser)]
#[command(author, version, about, long_about = None)] // Read from `Cargo.toml`
struct Cli {
    /// Path to the texture to process.
    input_texture: PathBuf,
    /// Path to the output texture.
    #[arg(short = 'o', long = "output")]
    output_texture: Option<PathBuf>,
    /// The pattern (kernel) size.
    #[arg(short = 's', long = "size", default_value = "2")]
    size: usize,
    /// The width of the output image.
    #[arg(long = "width", default_value = "10")]
    width: usize,
    /// The height of the output image.
    #[arg(long = "height", default_value = "10")]
    height: usize,
    /// PRNG seed; omit for a seed drawn from entropy.
    #[arg(long = "seed")]
    seed: Option<u64>,
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Cli::parse();

    let image = match image::open(&args.input_texture) {
        Ok(image) => image.to_rgb8(),
        Err(err) => {
            log::error!("failed to open {:?}: {err}", args.input_texture);
            return ExitCode::FAILURE;
        }
    };

    let cfg = Config {
        pattern_size: args.size,
        width: args.width,
        height: args.height,
        seed: args.seed,
    };

    let output = match generate(image, cfg) {
        Ok(output) => output,
        Err(err) => {
            log::error!("solve failed: {err}");
            return ExitCode::FAILURE;
        }
    };

    if let Some(path) = args.output_texture {
        if let Err(err) = output.save(&path) {
            log::error!("failed to save {path:?}: {err}");
            return ExitCode::FAILURE;
        }
    }

    ExitCode::SUCCESS
}
