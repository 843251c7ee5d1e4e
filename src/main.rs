use clap::Parser;

use flagppm::{DEFAULT_OUTPUT, Generator, PlainPpm};
use flagppm::ppm::decode_rgb;

#[derive(Parser)]
#[command(name = "flagppm")]
#[command(about = "Write a 500x500 P3 image with a flag hidden in its blue channel")]
struct Cli {
    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Read the written file back, check every pixel and print the recovered flag
    #[arg(long)]
    verify: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Cli::parse();

    let generator = Generator::standard()?.with_verbose(args.verbose);
    generator.write_to(DEFAULT_OUTPUT)?;

    if args.verify {
        if args.verbose {
            println!("Verifying {}...", DEFAULT_OUTPUT);
        }

        let ppm = PlainPpm::read(DEFAULT_OUTPUT)?;
        flagppm::verify(&ppm, &generator)?;
        let secret = flagppm::recover_secret(&ppm)?;
        let img = decode_rgb(DEFAULT_OUTPUT)?;

        println!("\n=== Verification Results ===");
        println!("Pixels checked: {}", ppm.samples.len());
        println!("Decoded as: {}x{} RGB", img.width(), img.height());
        println!("Recovered secret: {}", secret);
    }

    Ok(())
}
