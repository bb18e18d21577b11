//! Deterministic per-component colors.
//!
//! The hue comes from the SHA-256 digest of the component name, so the same
//! name gets the same color in every run, on every platform.

use sha2::{Digest, Sha256};

const SATURATION: f64 = 0.9;
const LIGHTNESS: f64 = 0.3;
const ALPHA: f64 = 0.7;

/// Hue in `[0, 1]` derived from the first two digest bytes of `name`.
pub fn name_hue(name: &str) -> f64 {
    let digest = Sha256::digest(name.as_bytes());
    let value = u16::from_be_bytes([digest[0], digest[1]]);
    f64::from(value) / f64::from(u16::MAX)
}

/// Quoted DOT color (`"#rrggbbaa"`) for a component name.
pub fn name_color(name: &str) -> String {
    hslahex(name_hue(name), SATURATION, LIGHTNESS, ALPHA)
}

/// Convert HSLA (all channels in `[0, 1]`) to RGBA in `[0, 1]`.
pub fn hsla(h: f64, s: f64, l: f64, a: f64) -> (f64, f64, f64, f64) {
    if s == 0.0 {
        return (l, l, l, a);
    }

    let h = h % 1.0;
    let v2 = if l < 0.5 {
        l * (1.0 + s)
    } else {
        (l + s) - s * l
    };
    let v1 = 2.0 * l - v2;

    let r = hue_channel(v1, v2, h + 1.0 / 3.0);
    let g = hue_channel(v1, v2, h);
    let b = hue_channel(v1, v2, h - 1.0 / 3.0);
    (r, g, b, a)
}

/// Quoted `"#rrggbbaa"` hex form of an HSLA color.
pub fn hslahex(h: f64, s: f64, l: f64, a: f64) -> String {
    let (r, g, b, a) = hsla(h, s, l, a);
    format!(
        "\"#{:02x}{:02x}{:02x}{:02x}\"",
        sat8(r),
        sat8(g),
        sat8(b),
        sat8(a)
    )
}

fn hue_channel(v1: f64, v2: f64, mut h: f64) -> f64 {
    if h < 0.0 {
        h += 1.0;
    }
    if h > 1.0 {
        h -= 1.0;
    }
    if 6.0 * h < 1.0 {
        return v1 + (v2 - v1) * 6.0 * h;
    }
    if 2.0 * h < 1.0 {
        return v2;
    }
    if 3.0 * h < 2.0 {
        return v1 + (v2 - v1) * (2.0 / 3.0 - h) * 6.0;
    }
    v1
}

/// Scale to a byte, truncating, clamped to `0..=255`.
fn sat8(v: f64) -> u8 {
    let v = v * 255.0;
    if v >= 255.0 {
        255
    } else if v <= 0.0 {
        0
    } else {
        v as u8
    }
}
