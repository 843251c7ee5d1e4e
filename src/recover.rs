use anyhow::Result;

use crate::generator::{Generator, MAX_CHANNEL_VALUE};
use crate::ppm::PlainPpm;

/// Blue samples in file order
pub fn blue_channel(ppm: &PlainPpm) -> Vec<u32> {
    ppm.samples.iter().map(|[_, _, b]| *b).collect()
}

/// Smallest `p` such that `codes[i] == codes[i % p]` for every `i`.
/// Returns 0 for an empty sequence.
pub fn smallest_period(codes: &[u32]) -> usize {
    if codes.is_empty() {
        return 0;
    }

    // Longest proper prefix that is also a suffix, per position (KMP failure function)
    let mut border = vec![0usize; codes.len()];
    for i in 1..codes.len() {
        let mut k = border[i - 1];
        while k > 0 && codes[i] != codes[k] {
            k = border[k - 1];
        }
        if codes[i] == codes[k] {
            k += 1;
        }
        border[i] = k;
    }

    codes.len() - border[codes.len() - 1]
}

/// Read the repeating blue-channel pattern back as text.
///
/// If the image holds fewer pixels than two full cycles the recovered text
/// is only as long as the shortest repetition actually visible.
pub fn recover_secret(ppm: &PlainPpm) -> Result<String> {
    let codes = blue_channel(ppm);
    let period = smallest_period(&codes);
    if period == 0 {
        anyhow::bail!("Image has no pixels to recover a secret from");
    }

    codes[..period]
        .iter()
        .map(|code| {
            char::from_u32(*code)
                .ok_or_else(|| anyhow::anyhow!("Blue value {} is not a character code", code))
        })
        .collect()
}

/// Check a decoded image against what `generator` emits, line by line
pub fn verify(ppm: &PlainPpm, generator: &Generator) -> Result<()> {
    let dimensions = generator.dimensions();
    if ppm.width != dimensions.width || ppm.height != dimensions.height {
        anyhow::bail!(
            "Size mismatch: file is {}x{}, expected {}x{}",
            ppm.width,
            ppm.height,
            dimensions.width,
            dimensions.height
        );
    }
    ppm.check_sample_count()?;
    if ppm.max_value != MAX_CHANNEL_VALUE {
        anyhow::bail!(
            "Maximum value mismatch: file declares {}, expected {}",
            ppm.max_value,
            MAX_CHANNEL_VALUE
        );
    }

    for (sample, pixel) in ppm.samples.iter().zip(generator.pixels()) {
        if *sample != pixel.rgb() {
            anyhow::bail!(
                "Body line {} (x={}, y={}) is \"{} {} {}\", expected \"{}\"",
                pixel.index,
                pixel.x,
                pixel.y,
                sample[0],
                sample[1],
                sample[2],
                pixel.line()
            );
        }
    }

    Ok(())
}
