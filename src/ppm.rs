use anyhow::{Context, Result};
use image::{ImageReader, RgbImage};
use std::path::Path;

use crate::generator::MAGIC;

/// A decoded plain-text (P3) image, samples kept in file order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlainPpm {
    pub width: u32,
    pub height: u32,
    pub max_value: u32,
    /// One `[r, g, b]` triple per pixel, in the order they appear in the file
    pub samples: Vec<[u32; 3]>,
}

impl PlainPpm {
    /// Parse P3 text. Tokens may be split by any whitespace; `#` starts a
    /// comment running to the end of the line.
    pub fn parse(text: &str) -> Result<Self> {
        let mut tokens = text
            .lines()
            .map(|line| line.split('#').next().unwrap_or(""))
            .flat_map(str::split_whitespace);

        match tokens.next() {
            Some(MAGIC) => {}
            Some(other) => anyhow::bail!("Unsupported format tag: {}", other),
            None => anyhow::bail!("Empty document"),
        }

        let mut next_number = |what: &str| -> Result<u32> {
            let token = tokens
                .next()
                .ok_or_else(|| anyhow::anyhow!("Missing {}", what))?;
            token
                .parse::<u32>()
                .with_context(|| format!("Invalid {}: {:?}", what, token))
        };

        let width = next_number("width")?;
        let height = next_number("height")?;
        let max_value = next_number("maximum value")?;

        let pixel_count = (width as usize)
            .checked_mul(height as usize)
            .ok_or_else(|| anyhow::anyhow!("Image size {}x{} is too large", width, height))?;
        // Grows with the samples actually present, not the declared size
        let mut samples = Vec::new();
        for _ in 0..pixel_count {
            let r = next_number("red sample")?;
            let g = next_number("green sample")?;
            let b = next_number("blue sample")?;
            samples.push([r, g, b]);
        }

        if let Some(extra) = tokens.next() {
            anyhow::bail!("Unexpected data after {} pixels: {:?}", pixel_count, extra);
        }

        Ok(Self {
            width,
            height,
            max_value,
            samples,
        })
    }

    /// Read and parse a P3 file
    pub fn read(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        Self::parse(&text).with_context(|| format!("Failed to parse {}", path.display()))
    }

    /// Pixel count declared by the header
    pub fn pixel_count(&self) -> Option<usize> {
        (self.width as usize).checked_mul(self.height as usize)
    }

    /// Fail unless there is exactly one sample per declared pixel
    pub fn check_sample_count(&self) -> Result<()> {
        match self.pixel_count() {
            Some(count) if count == self.samples.len() => Ok(()),
            _ => anyhow::bail!(
                "{}x{} image holds {} samples",
                self.width,
                self.height,
                self.samples.len()
            ),
        }
    }
}

/// Decode any PNM file into an RGB image with the `image` crate's reader.
/// Readers lay file order out row by row, top to bottom.
pub fn decode_rgb(path: impl AsRef<Path>) -> Result<RgbImage> {
    let path = path.as_ref();
    let img = ImageReader::open(path)?
        .decode()
        .map_err(|e| anyhow::anyhow!("Failed to decode {}: {}", path.display(), e))?;
    Ok(img.to_rgb8())
}
