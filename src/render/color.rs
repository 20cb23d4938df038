//! Color parsing and alpha blending

use image::Rgba;

use crate::io::error::{Result, invalid_parameter};

/// Parse a color given as a name or a hex string
///
/// Accepts `white`, `black` and `transparent`, or hex in `rgb`, `rrggbb` or
/// `rrggbbaa` form with an optional leading `#`.
///
/// # Errors
///
/// Returns an error if the text is neither a known name nor valid hex
pub fn parse_color(text: &str) -> Result<Rgba<u8>> {
    let trimmed = text.trim();
    match trimmed.to_ascii_lowercase().as_str() {
        "white" => return Ok(Rgba([255, 255, 255, 255])),
        "black" => return Ok(Rgba([0, 0, 0, 255])),
        "transparent" => return Ok(Rgba([0, 0, 0, 0])),
        _ => {}
    }

    let hex = trimmed.strip_prefix('#').unwrap_or(trimmed);
    let invalid =
        || invalid_parameter("color", text, "expected a name or #rgb, #rrggbb, #rrggbbaa");
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(invalid());
    }

    let channel = |range: std::ops::Range<usize>| {
        hex.get(range)
            .and_then(|digits| u8::from_str_radix(digits, 16).ok())
    };
    let short = |index: usize| channel(index..index + 1).map(|nibble| nibble * 17);

    let rgba = match hex.len() {
        3 => short(0).zip(short(1)).zip(short(2)).map(|((r, g), b)| [r, g, b, 255]),
        6 => channel(0..2)
            .zip(channel(2..4))
            .zip(channel(4..6))
            .map(|((r, g), b)| [r, g, b, 255]),
        8 => channel(0..2)
            .zip(channel(2..4))
            .zip(channel(4..6))
            .zip(channel(6..8))
            .map(|(((r, g), b), a)| [r, g, b, a]),
        _ => None,
    };
    rgba.map(Rgba).ok_or_else(invalid)
}

/// Blend `src` over `dst` with an extra `coverage` factor in `0.0..=1.0`
pub fn blend_over(dst: Rgba<u8>, src: Rgba<u8>, coverage: f32) -> Rgba<u8> {
    let src_alpha = f32::from(src.0[3]) / 255.0 * coverage.clamp(0.0, 1.0);
    if src_alpha <= 0.0 {
        return dst;
    }
    let dst_alpha = f32::from(dst.0[3]) / 255.0;
    let out_alpha = src_alpha + dst_alpha * (1.0 - src_alpha);
    if out_alpha <= 0.0 {
        return Rgba([0, 0, 0, 0]);
    }

    let mix = |s: u8, d: u8| {
        let value = (f32::from(s) * src_alpha + f32::from(d) * dst_alpha * (1.0 - src_alpha))
            / out_alpha;
        value.round().clamp(0.0, 255.0) as u8
    };
    Rgba([
        mix(src.0[0], dst.0[0]),
        mix(src.0[1], dst.0[1]),
        mix(src.0[2], dst.0[2]),
        (out_alpha * 255.0).round().clamp(0.0, 255.0) as u8,
    ])
}
