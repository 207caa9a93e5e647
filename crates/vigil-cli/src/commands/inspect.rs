use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::Args;
use vigil_core::detect::convolve::box_blur_new;
use vigil_core::detect::grayscale::{padded_buffer, to_gray};
use vigil_core::io::image_io::{save_gray_png, save_rgb_png};
use vigil_core::io::ser::SerVideo;

#[derive(Args)]
pub struct InspectArgs {
    /// Input SER video
    pub file: PathBuf,

    /// Directory the PNG dumps are written to
    #[arg(short, long, default_value = ".")]
    pub out_dir: PathBuf,

    /// Kernel size: pixels per side of the averaging window (odd, >= 3)
    #[arg(short, long, default_value = "3")]
    pub ksize: usize,
}

/// Write the first frame, its padded grayscale conversion and its blur as
/// PNG files, to eyeball what the detector actually compares.
pub fn run(args: &InspectArgs) -> Result<()> {
    if args.ksize < 3 || args.ksize % 2 == 0 {
        bail!("kernel size must be odd and >= 3, got {}", args.ksize);
    }
    let dx = (args.ksize - 1) / 2;

    let video = SerVideo::open(&args.file)?;
    let frame = video.read_frame(0)?;

    let mut gray = padded_buffer(frame.width, frame.height, dx);
    to_gray(&frame, &mut gray, dx);
    let blurred = box_blur_new(&gray, frame.width, frame.height, dx);

    std::fs::create_dir_all(&args.out_dir)?;

    let original = args.out_dir.join("original.png");
    save_rgb_png(&frame, &original)?;
    println!("Wrote {}", original.display());

    let grayscale = args.out_dir.join("grayscale.png");
    save_gray_png(&gray, &grayscale)?;
    println!("Wrote {}", grayscale.display());

    let blurred_path = args.out_dir.join("blurred.png");
    save_gray_png(&blurred, &blurred_path)?;
    println!("Wrote {}", blurred_path.display());

    Ok(())
}
