// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file,
// You can obtain one at <https://mozilla.org/MPL/2.0/>.

use glam::Vec4;

/// Converts a single sRGB-encoded channel in `[0, 1]` to linear.
pub fn srgb_to_linear(c: f32) -> f32 {
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// Converts an sRGB color to linear RGB.  Alpha is passed through unchanged.
pub fn srgb_to_rgb(srgb: Vec4) -> Vec4 {
    Vec4::new(
        srgb_to_linear(srgb.x),
        srgb_to_linear(srgb.y),
        srgb_to_linear(srgb.z),
        srgb.w,
    )
}

/// Builds a linear color from 8-bit sRGB components, the way palette constants are written down.
pub fn srgb8(r: u8, g: u8, b: u8) -> Vec4 {
    srgb_to_rgb(Vec4::new(r as f32, g as f32, b as f32, 255.0) / 255.0)
}


// End of File
