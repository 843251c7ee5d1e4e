use flagppm::{Dimensions, Generator, Secret};
use std::path::PathBuf;

/// Builds a generator for a custom size and secret.
pub fn make_generator(width: u32, height: u32, secret: &str) -> Generator {
    Generator::new(
        Dimensions::new(width, height),
        Secret::new(secret).expect("Test secret must not be empty"),
    )
}

/// Creates a temporary directory and an `out.ppm` path inside it.
/// Returns both the path and the directory (which must be kept alive).
pub fn temp_output() -> (PathBuf, tempfile::TempDir) {
    let dir = tempfile::TempDir::new().expect("Failed to create temp directory");
    let path = dir.path().join(flagppm::DEFAULT_OUTPUT);
    (path, dir)
}

/// Character codes of `text`, in order
pub fn codes(text: &str) -> Vec<u32> {
    text.chars().map(|c| c as u32).collect()
}
