use anyhow::Result;

/// Text whose character codes are embedded into the blue channel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Secret {
    chars: Vec<char>,
}

impl Secret {
    /// Create a secret from text. Empty text is rejected since the
    /// blue channel cycles through it by `index mod len`.
    pub fn new(text: &str) -> Result<Self> {
        let chars: Vec<char> = text.chars().collect();
        if chars.is_empty() {
            anyhow::bail!("Secret must contain at least one character");
        }
        Ok(Self { chars })
    }

    // Never empty, see `new`
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// Character selected for the pixel with the given running index
    pub fn char_at(&self, index: usize) -> char {
        self.chars[index % self.chars.len()]
    }

    /// Numeric code of the character selected for `index`
    pub fn code_at(&self, index: usize) -> u32 {
        self.char_at(index) as u32
    }

    pub fn as_string(&self) -> String {
        self.chars.iter().collect()
    }
}

/// Image size in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

impl Dimensions {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }
}

/// A single emitted pixel and the coordinates it was derived from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pixel {
    pub x: u32,
    pub y: u32,
    /// Running counter over the whole traversal
    pub index: usize,
    pub r: u32,
    pub g: u32,
    pub b: u32,
}

impl Pixel {
    /// Body line for this pixel, without the trailing newline
    pub fn line(&self) -> String {
        format!("{} {} {}", self.r, self.g, self.b)
    }

    pub fn rgb(&self) -> [u32; 3] {
        [self.r, self.g, self.b]
    }
}
