//! Static configuration for a simulation: canvas geometry, pacing and colors.

/// An sRGB color, one byte per channel.
pub type Rgb = [u8; 3];

/// Cell fill colors, one per display state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub living: Rgb,
    pub dead: Rgb,
    pub killed: Rgb,
    pub born: Rgb,
}

impl Default for Palette {
    fn default() -> Self {
        Palette {
            living: [0x00, 0x00, 0x50],
            dead: [0xF0, 0xF0, 0xF0],
            killed: [0xDF, 0xDA, 0xF0],
            born: [0xFF, 0x00, 0x40],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Canvas width in pixels.
    pub canvas_width: usize,
    /// Canvas height in pixels.
    pub canvas_height: usize,
    /// Side of one cell in pixels.
    pub scale: usize,
    /// Delay between two loop ticks when a run starts, in milliseconds.
    pub initial_delay_ms: u64,
    /// Amount `faster`/`slower` move the delay by, in milliseconds.
    pub delay_step_ms: u64,
    pub palette: Palette,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            canvas_width: 840,
            canvas_height: 640,
            scale: 8,
            initial_delay_ms: 30,
            delay_step_ms: 20,
            palette: Palette::default(),
        }
    }
}
