use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::sync::Arc;

use crate::channels::{Axis, ChannelSource, CoordinateModulus, SecretCycle};
use crate::models::{Dimensions, Pixel, Secret};

pub const DEFAULT_WIDTH: u32 = 500;
pub const DEFAULT_HEIGHT: u32 = 500;
pub const DEFAULT_SECRET: &str = "flag{heres_a_ppm}";
pub const DEFAULT_OUTPUT: &str = "out.ppm";

/// Format tag of the plain-text RGB variant
pub const MAGIC: &str = "P3";
/// Maximum channel value declared in the header
pub const MAX_CHANNEL_VALUE: u32 = 255;

/// Context shared by the generation steps
#[derive(Clone, Debug, Default)]
pub struct GeneratorContext {
    pub verbose: bool,
}

/// Builds a P3 image whose blue channel carries a secret
pub struct Generator {
    dimensions: Dimensions,
    secret: Secret,
    red: Arc<dyn ChannelSource>,
    green: Arc<dyn ChannelSource>,
    blue: Arc<dyn ChannelSource>,
    context: GeneratorContext,
}

impl Generator {
    /// Create a generator for the given size and secret
    pub fn new(dimensions: Dimensions, secret: Secret) -> Self {
        Self {
            dimensions,
            red: Arc::new(CoordinateModulus::new(Axis::X)),
            green: Arc::new(CoordinateModulus::new(Axis::Y)),
            blue: Arc::new(SecretCycle {
                secret: secret.clone(),
            }),
            secret,
            context: GeneratorContext::default(),
        }
    }

    /// The fixed 500x500 image carrying the built-in flag
    pub fn standard() -> Result<Self> {
        Ok(Self::new(
            Dimensions::new(DEFAULT_WIDTH, DEFAULT_HEIGHT),
            Secret::new(DEFAULT_SECRET)?,
        ))
    }

    /// Enable verbose output
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.context.verbose = verbose;
        self
    }

    pub fn dimensions(&self) -> Dimensions {
        self.dimensions
    }

    pub fn secret(&self) -> &Secret {
        &self.secret
    }

    /// Header line, including the trailing newline
    pub fn header(&self) -> String {
        format!(
            "{} {} {} {}\n",
            MAGIC, self.dimensions.width, self.dimensions.height, MAX_CHANNEL_VALUE
        )
    }

    /// Pixels in emission order: x outer, y inner
    pub fn pixels(&self) -> Pixels<'_> {
        Pixels {
            generator: self,
            x: 0,
            y: 0,
            index: 0,
        }
    }

    fn pixel(&self, x: u32, y: u32, index: usize) -> Pixel {
        Pixel {
            x,
            y,
            index,
            r: self.red.value(x, y, index),
            g: self.green.value(x, y, index),
            b: self.blue.value(x, y, index),
        }
    }

    /// Stream the whole document (header and one line per pixel) into `out`
    pub fn write_document<W: Write>(&self, out: W) -> Result<()> {
        let mut out = BufWriter::new(out);
        out.write_all(self.header().as_bytes())?;
        for pixel in self.pixels() {
            writeln!(out, "{} {} {}", pixel.r, pixel.g, pixel.b)?;
        }
        out.flush()?;
        Ok(())
    }

    /// Render the whole document into memory
    pub fn render(&self) -> Result<String> {
        let mut buffer = Vec::with_capacity(self.header().len() + self.dimensions.pixel_count() * 12);
        self.write_document(&mut buffer)?;
        Ok(String::from_utf8(buffer)?)
    }

    /// Write the document to `path`, replacing anything already there
    pub fn write_to(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();

        if self.context.verbose {
            println!(
                "Generating {}x{} image ({} pixels)",
                self.dimensions.width,
                self.dimensions.height,
                self.dimensions.pixel_count()
            );
            println!("  red:   {}", self.red.name());
            println!("  green: {}", self.green.name());
            println!("  blue:  {}", self.blue.name());
        }

        let file = File::create(path)
            .with_context(|| format!("Failed to create {}", path.display()))?;
        self.write_document(file)
            .with_context(|| format!("Failed to write {}", path.display()))?;

        if self.context.verbose {
            println!("Wrote {}", path.display());
        }

        Ok(())
    }
}

/// Lazy column-major traversal of a generator's pixels
pub struct Pixels<'a> {
    generator: &'a Generator,
    x: u32,
    y: u32,
    index: usize,
}

impl Iterator for Pixels<'_> {
    type Item = Pixel;

    fn next(&mut self) -> Option<Pixel> {
        let Dimensions { width, height } = self.generator.dimensions;
        if height == 0 || self.x >= width {
            return None;
        }

        let pixel = self.generator.pixel(self.x, self.y, self.index);
        self.index += 1;
        self.y += 1;
        if self.y >= height {
            self.y = 0;
            self.x += 1;
        }

        Some(pixel)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.generator.dimensions.pixel_count() - self.index;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Pixels<'_> {}
