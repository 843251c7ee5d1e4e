mod fixtures;
pub use fixtures::*;

// Re-export commonly used types from flagppm for tests
pub use flagppm::{Dimensions, Generator, PlainPpm, Secret};
