use image::{Rgba, RgbaImage};
use rusttype::{point, Font, Scale};

use crate::draw;

/// System fonts probed for glyph rendering, in preference order.
const FONT_CANDIDATES: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu/DejaVuSans-Bold.ttf",
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Bold.ttf",
    "/System/Library/Fonts/Supplemental/Arial.ttf",
    "/Library/Fonts/Arial.ttf",
    "C:\\Windows\\Fonts\\arial.ttf",
];

/// Load the first usable candidate font, if any.
pub fn load_system_font() -> Option<Font<'static>> {
    for path in FONT_CANDIDATES {
        if let Ok(data) = std::fs::read(path) {
            if let Some(font) = Font::try_from_vec(data) {
                return Some(font);
            }
        }
    }

    None
}

/// Draw a single character with its ink midpoint anchored on (cx, cy).
/// A missing system font downgrades silently to the built-in bitmap
/// pattern; it is never surfaced as an error.
pub fn draw_char_centered(
    img: &mut RgbaImage,
    ch: char,
    cx: i32,
    cy: i32,
    size: f32,
    fill: Rgba<u8>,
) {
    if let Some(font) = load_system_font() {
        if draw_outline_glyph(img, &font, ch, cx, cy, size, fill) {
            return;
        }
    }

    draw_bitmap_glyph(img, ch, cx, cy, size, fill);
}

/// Rasterize `ch` through the font outline. Returns false when the font
/// carries no outline for the character.
fn draw_outline_glyph(
    img: &mut RgbaImage,
    font: &Font,
    ch: char,
    cx: i32,
    cy: i32,
    size: f32,
    fill: Rgba<u8>,
) -> bool {
    let glyph = font
        .glyph(ch)
        .scaled(Scale::uniform(size))
        .positioned(point(0.0, 0.0));

    let Some(bounds) = glyph.pixel_bounding_box() else {
        return false;
    };

    let left = cx - bounds.width() / 2;
    let top = cy - bounds.height() / 2;

    glyph.draw(|gx, gy, coverage| {
        draw::blend_pixel(img, left + gx as i32, top + gy as i32, fill, coverage);
    });

    true
}

/// Block rendering of the 5x7 pattern, scaled to approximate the requested
/// pixel size and centered on (cx, cy).
pub fn draw_bitmap_glyph(
    img: &mut RgbaImage,
    ch: char,
    cx: i32,
    cy: i32,
    size: f32,
    fill: Rgba<u8>,
) {
    let Some(pattern) = bitmap_pattern(ch) else {
        return;
    };

    let rows = pattern.len() as i32;
    let cols = pattern[0].len() as i32;
    let cell = (size as i32 / rows).max(1);
    let left = cx - cols * cell / 2;
    let top = cy - rows * cell / 2;

    for (row, line) in pattern.iter().enumerate() {
        for (col, byte) in line.bytes().enumerate() {
            if byte == b'#' {
                let x0 = left + col as i32 * cell;
                let y0 = top + row as i32 * cell;
                draw::fill_rect(img, x0, y0, x0 + cell - 1, y0 + cell - 1, fill);
            }
        }
    }
}

/// 5x7 fallback patterns for the characters the generators need when no
/// system font is available.
fn bitmap_pattern(ch: char) -> Option<[&'static str; 7]> {
    match ch {
        '$' => Some([
            "..#..",
            ".####",
            "#.#..",
            ".###.",
            "..#.#",
            "####.",
            "..#..",
        ]),
        _ => None,
    }
}
