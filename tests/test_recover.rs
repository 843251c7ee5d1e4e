//! Integration tests for reading a generated image back.
//!
//! Tests cover:
//! - Recovering the secret from the blue channel
//! - Verifying a file against its generator
//! - Detecting tampered files

mod common;

use flagppm::recover::{blue_channel, smallest_period};
use flagppm::{recover_secret, verify};

use common::*;

#[test]
fn test_recover_standard_secret() -> anyhow::Result<()> {
    // 1. Write and read back the standard image
    let (path, _temp_dir) = temp_output();
    let generator = Generator::standard()?;
    generator.write_to(&path)?;
    let ppm = PlainPpm::read(&path)?;

    // 2. Blue channel repeats with the secret's length
    let blues = blue_channel(&ppm);
    assert_eq!(blues.len(), 250_000);
    assert_eq!(smallest_period(&blues), 17);

    // 3. The period decodes back to the flag
    assert_eq!(recover_secret(&ppm)?, "flag{heres_a_ppm}");
    Ok(())
}

#[test]
fn test_verify_accepts_generated_file() -> anyhow::Result<()> {
    let generator = make_generator(9, 11, "hidden");
    let ppm = PlainPpm::parse(&generator.render()?)?;

    verify(&ppm, &generator)?;
    Ok(())
}

#[test]
fn test_verify_reports_tampered_line() -> anyhow::Result<()> {
    // 1. Render and flip one blue value
    let generator = make_generator(3, 3, "abc");
    let mut ppm = PlainPpm::parse(&generator.render()?)?;
    ppm.samples[4][2] = 0;

    // 2. Verification names the bad line
    let result = verify(&ppm, &generator);
    assert!(result.is_err());
    let error_msg = result.unwrap_err().to_string();
    assert!(
        error_msg.contains("Body line 4"),
        "Error should name the tampered line: {}",
        error_msg
    );
    Ok(())
}

#[test]
fn test_verify_rejects_sample_count_mismatch() -> anyhow::Result<()> {
    // 1. A header that promises more pixels than the body holds
    let generator = make_generator(2, 2, "ab");
    let mut ppm = PlainPpm::parse(&generator.render()?)?;
    ppm.samples.truncate(3);

    // 2. Verification must not stop at the end of the shorter list
    assert!(verify(&ppm, &generator).is_err(), "Three samples cannot verify a 2x2 image");

    // 3. Extra samples are rejected too
    let mut ppm = PlainPpm::parse(&generator.render()?)?;
    ppm.samples.push([0, 0, 97]);
    assert!(verify(&ppm, &generator).is_err(), "Five samples cannot verify a 2x2 image");
    Ok(())
}

#[test]
fn test_verify_rejects_other_dimensions() -> anyhow::Result<()> {
    let ppm = PlainPpm::parse(&make_generator(2, 3, "ab").render()?)?;

    let result = verify(&ppm, &make_generator(3, 2, "ab"));

    assert!(result.is_err(), "A 2x3 file should not verify as 3x2");
    Ok(())
}

#[test]
fn test_recover_from_empty_image_fails() -> anyhow::Result<()> {
    let ppm = PlainPpm::parse("P3 0 0 255\n")?;

    assert!(recover_secret(&ppm).is_err());
    Ok(())
}
