/// Graphics-context configuration requested for the surface.
///
/// Chosen once at host construction and never mutated. The defaults mirror
/// what a video surface wants: RGB8 color with no alpha, a 16-bit depth
/// buffer, no stencil, and a GLES3-class context (higher versions that are
/// backwards-compatible are acceptable).
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct SurfaceConfig {
    /// Bits per color channel, `(red, green, blue)`.
    pub color_bits: (u8, u8, u8),

    /// Alpha channel bits. Video output composites opaquely; 0 by default.
    pub alpha_bits: u8,

    /// Depth buffer bits.
    pub depth_bits: u8,

    /// Stencil buffer bits.
    pub stencil_bits: u8,

    /// Minimum client API major version. Contexts of this version or any
    /// backwards-compatible later version satisfy the request.
    pub min_api_version: u8,

    /// Ask the platform to keep the context alive across pause/resume so the
    /// engine's GPU resources survive backgrounding.
    ///
    /// Platforms may discard the context anyway; correctness never depends
    /// on this hint because surface creation always re-runs the full
    /// init + load sequence.
    pub preserve_context_on_pause: bool,
}

impl Default for SurfaceConfig {
    fn default() -> Self {
        Self {
            color_bits: (8, 8, 8),
            alpha_bits: 0,
            depth_bits: 16,
            stencil_bits: 0,
            min_api_version: 3,
            preserve_context_on_pause: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_requests_a_video_surface() {
        let config = SurfaceConfig::default();
        assert_eq!(config.color_bits, (8, 8, 8));
        assert_eq!(config.alpha_bits, 0);
        assert_eq!(config.depth_bits, 16);
        assert_eq!(config.stencil_bits, 0);
        assert_eq!(config.min_api_version, 3);
        assert!(config.preserve_context_on_pause);
    }
}
