use crate::models::Secret;

/// Modulus applied to coordinates for the red and green channels.
/// Values never reach 255 and wrap back to 0 at multiples of 255.
pub const COORDINATE_MODULUS: u32 = 255;

/// Trait for anything that can produce one color channel of a pixel
pub trait ChannelSource: Send + Sync {
    /// Channel value for the pixel at `(x, y)` with running index `index`
    fn value(&self, x: u32, y: u32, index: usize) -> u32;

    /// Human-readable description (used in verbose output)
    fn name(&self) -> String;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

/// Channel derived from one coordinate: `coordinate mod modulus`
#[derive(Debug, Clone)]
pub struct CoordinateModulus {
    pub axis: Axis,
    pub modulus: u32,
}

impl CoordinateModulus {
    pub fn new(axis: Axis) -> Self {
        Self {
            axis,
            modulus: COORDINATE_MODULUS,
        }
    }
}

impl ChannelSource for CoordinateModulus {
    fn value(&self, x: u32, y: u32, _index: usize) -> u32 {
        match self.axis {
            Axis::X => x % self.modulus,
            Axis::Y => y % self.modulus,
        }
    }

    fn name(&self) -> String {
        let axis = match self.axis {
            Axis::X => "x",
            Axis::Y => "y",
        };
        format!("{} mod {}", axis, self.modulus)
    }
}

/// Channel that cycles through the character codes of a secret
#[derive(Debug, Clone)]
pub struct SecretCycle {
    pub secret: Secret,
}

impl ChannelSource for SecretCycle {
    fn value(&self, _x: u32, _y: u32, index: usize) -> u32 {
        self.secret.code_at(index)
    }

    fn name(&self) -> String {
        format!("secret cycle (period {})", self.secret.len())
    }
}
