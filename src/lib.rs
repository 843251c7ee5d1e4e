pub mod channels;
pub mod generator;
pub mod models;
pub mod ppm;
pub mod recover;

pub use models::{Dimensions, Pixel, Secret};
pub use channels::{Axis, ChannelSource, CoordinateModulus, SecretCycle};
pub use generator::{Generator, GeneratorContext, Pixels, DEFAULT_OUTPUT};
pub use ppm::PlainPpm;
pub use recover::{recover_secret, verify};
