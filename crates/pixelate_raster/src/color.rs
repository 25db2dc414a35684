//! RGB colors.
//!
//! One format everywhere: 8 bits per channel, no alpha. `Color` is
//! plain-old-data so a `[Color]` can be handed to the PNG encoder as bytes
//! without copying.

use bytemuck::{Pod, Zeroable};

/// 24-bit RGB color.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Pod, Zeroable)]
pub struct Color {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Color {
    /// Black.
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    /// White.
    pub const WHITE: Self = Self::rgb(255, 255, 255);
    /// Pure red.
    pub const RED: Self = Self::rgb(255, 0, 0);
    /// Pure green.
    pub const GREEN: Self = Self::rgb(0, 255, 0);
    /// Pure blue.
    pub const BLUE: Self = Self::rgb(0, 0, 255);

    /// Creates a color from its channels.
    #[inline]
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Gray with all channels at `level`.
    #[inline]
    #[must_use]
    pub const fn gray(level: u8) -> Self {
        Self::rgb(level, level, level)
    }

    /// Scales every channel by `light / 256`.
    ///
    /// `light` is a factor from 0 (black) to 255 (unchanged, give or take
    /// one step of rounding).
    #[inline]
    #[must_use]
    pub const fn lit(self, light: u8) -> Self {
        let light = light as u16;
        Self::rgb(
            ((self.r as u16 * light) >> 8) as u8,
            ((self.g as u16 * light) >> 8) as u8,
            ((self.b as u16 * light) >> 8) as u8,
        )
    }

    /// Channels as an array.
    #[inline]
    #[must_use]
    pub const fn to_array(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lit_scales_channels() {
        let c = Color::rgb(200, 100, 0);
        assert_eq!(c.lit(0), Color::BLACK);
        assert_eq!(c.lit(128), Color::rgb(100, 50, 0));
        assert_eq!(c.lit(255), Color::rgb(199, 99, 0));
    }

    #[test]
    fn test_lit_in_const_context() {
        const DIMMED: Color = Color::WHITE.lit(128);
        assert_eq!(DIMMED, Color::gray(127));
    }

    #[test]
    fn test_lit_never_brightens() {
        for level in [0u8, 1, 17, 128, 254, 255] {
            for light in [0u8, 3, 99, 200, 255] {
                assert!(Color::gray(level).lit(light).r <= level);
            }
        }
    }

    #[test]
    fn test_color_bytemuck() {
        let pixels = [Color::RED, Color::BLUE];
        let bytes: &[u8] = bytemuck::cast_slice(&pixels);
        assert_eq!(bytes, &[255, 0, 0, 0, 0, 255]);
    }
}
