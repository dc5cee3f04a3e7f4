use anyhow::{Context, Result};
use image::{imageops::FilterType, DynamicImage, ImageBuffer, Rgba, RgbaImage};
use std::{fs::create_dir_all, path::Path};

use crate::{draw, export, text};

/// Master canvas edge length; every output file is resampled from this.
pub const MASTER_SIZE: u32 = 512;

/// Corner radius of the rounded-square silhouette.
pub const CORNER_RADIUS: f32 = 128.0;

/// Sizes written by a default run, master file aside.
pub const DEFAULT_SIZES: [u32; 7] = [512, 256, 128, 96, 72, 48, 36];

const GRADIENT_START: [f32; 3] = [60.0, 47.0, 207.0]; // #3c2fcf
const GRADIENT_END: [f32; 3] = [74.0, 58.0, 255.0]; // #4a3aff

const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);
const INK: Rgba<u8> = Rgba([60, 47, 207, 255]);
const MUZZLE: Rgba<u8> = Rgba([240, 240, 240, 255]);
const BACKDROP: Rgba<u8> = Rgba([255, 255, 255, 25]);
const COIN_GOLD: Rgba<u8> = Rgba([255, 215, 0, 255]);
const COIN_BROWN: Rgba<u8> = Rgba([184, 134, 11, 255]);

/// Diagonal blue gradient across the full canvas, fully opaque.
pub fn gradient_base(size: u32) -> RgbaImage {
    ImageBuffer::from_fn(size, size, |x, y| {
        let rx = x as f32 / size as f32;
        let ry = y as f32 / size as f32;
        let t = (rx + ry) / 2.0;

        Rgba([
            lerp(GRADIENT_START[0], GRADIENT_END[0], t),
            lerp(GRADIENT_START[1], GRADIENT_END[1], t),
            lerp(GRADIENT_START[2], GRADIENT_END[2], t),
            255,
        ])
    })
}

#[inline]
fn lerp(a: f32, b: f32, t: f32) -> u8 {
    (a + (b - a) * t) as u8
}

/// Paint the 512x512 master icon: gradient background clipped to a rounded
/// square, the piggy-bank figure, and the dollar coin. Later shapes occlude
/// earlier ones, so the draw order is fixed.
pub fn build_master() -> RgbaImage {
    let size = MASTER_SIZE;
    let mut img = gradient_base(size);

    let mask = draw::rounded_rect_mask(size, size, CORNER_RADIUS);
    draw::apply_alpha_mask(&mut img, &mask);

    let cx = (size / 2) as i32;
    let cy = (size / 2) as i32;

    // Faint disc behind the figure
    draw::fill_ellipse(&mut img, cx - 180, cy - 180, cx + 180, cy + 180, BACKDROP);

    // Body and head
    draw::fill_ellipse(&mut img, cx - 120, cy - 40, cx + 120, cy + 120, WHITE);
    draw::fill_ellipse(&mut img, cx - 100, cy - 130, cx + 20, cy - 30, WHITE);

    // Ear and eye
    draw::fill_ellipse(&mut img, cx - 120, cy - 140, cx - 90, cy - 90, WHITE);
    draw::fill_ellipse(&mut img, cx - 80, cy - 100, cx - 64, cy - 84, INK);

    // Muzzle with two nostrils
    draw::fill_ellipse(&mut img, cx - 150, cy - 70, cx - 126, cy - 54, MUZZLE);
    draw::fill_ellipse(&mut img, cx - 160, cy - 76, cx - 156, cy - 72, INK);
    draw::fill_ellipse(&mut img, cx - 160, cy - 64, cx - 156, cy - 60, INK);

    // Coin slot
    draw::fill_rect(&mut img, cx - 80, cy - 40, cx + 40, cy - 28, INK);

    // Legs
    for x_offset in [-160, -60, 60, 160] {
        draw::fill_ellipse(
            &mut img,
            cx + x_offset - 15,
            cy + 120,
            cx + x_offset + 15,
            cy + 160,
            WHITE,
        );
    }

    // Gold coin with the dollar glyph
    let (coin_x, coin_y) = (cx + 124, cy - 116);
    draw::fill_ellipse(
        &mut img,
        coin_x - 30,
        coin_y - 30,
        coin_x + 30,
        coin_y + 30,
        COIN_GOLD,
    );
    text::draw_char_centered(&mut img, '$', coin_x, coin_y, 36.0, COIN_BROWN);

    img
}

/// Render the master icon and write one PNG per requested size plus the
/// unmodified master under `out_dir`.
pub fn generate(out_dir: &Path, sizes: &[u32]) -> Result<()> {
    create_dir_all(out_dir).context("Can't create output directory")?;

    println!("Generating gradient icon set...");
    let master = DynamicImage::ImageRgba8(build_master());

    for &size in sizes {
        let resized = master.resize_exact(size, size, FilterType::Lanczos3);
        let filename = format!("app_icon_{size}.png");
        export::save_png(&resized, &out_dir.join(&filename))?;
        println!("  ✓ Generated {filename}");
    }

    export::save_png(&master, &out_dir.join("app_icon.png"))?;
    println!("  ✓ Generated app_icon.png");

    println!("Icons generated successfully!");
    Ok(())
}
