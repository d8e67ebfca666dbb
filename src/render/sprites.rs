//! Pixel-art patterns and colors
//!
//! Patterns are row strings of 'x' cells, scaled to each entity's
//! bounding box and stamped as fixed-size fills.

/// RGBA, 0.0 - 1.0 per channel
pub type Color = [f32; 4];

pub const WHITE: Color = [1.0, 1.0, 1.0, 1.0];
pub const RED: Color = [1.0, 0.0, 0.0, 1.0];
/// Super-bullet tint
pub const PALE_BLUE: Color = [0.678, 0.847, 0.902, 1.0];
/// Resource block teal
pub const BLOCK_TEAL: Color = [0.435, 0.78, 0.729, 1.0];

/// Alien colors, indexed by `Alien::color`. Fixed at construction time;
/// there is no shared mutable palette.
pub const ALIEN_PALETTE: [Color; 3] = [
    [0.176, 0.22, 0.243, 1.0],  // slate
    [0.969, 0.592, 0.141, 1.0], // amber
    [0.459, 0.553, 0.824, 1.0], // periwinkle
];

/// Side length of one stamped pattern cell
pub const SPRITE_CELL: f32 = 4.0;

pub const SHIP_PATTERN: [&str; 5] = [
    "    xx    ",
    "   xxxx   ",
    "  xxxxxx  ",
    " xx xx xx ",
    "xxxxxxxxxx",
];

pub const ALIEN_PATTERN: [&str; 6] = [
    "  xx  xx  ",
    " xxxxxxxx ",
    "xxxxxxxxxx",
    "x xx  xx x",
    "xxxxxxxxxx",
    "  x    x  ",
];

pub const BLOCK_PATTERN: [&str; 10] = [
    "    xx    ",
    "  xxxxxx  ",
    " xx xx xx ",
    " xxx x xx ",
    "xxxxx  xxx",
    "xxxxx  xxx",
    " xxx x xx ",
    " xx xx xx ",
    "  xxxxxx  ",
    "    xx    ",
];
