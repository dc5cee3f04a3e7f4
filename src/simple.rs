use anyhow::{Context, Result};
use image::{DynamicImage, Rgb, RgbImage};
use std::{fs::create_dir_all, path::Path, str::FromStr};

use crate::{draw, export};

/// Canvas edge length of the flat icon.
pub const SIZE: u32 = 512;

/// Brand base color, used when `--color` is absent or unparseable.
pub const DEFAULT_BASE: Rgb<u8> = Rgb([60, 47, 207]); // #3c2fcf

const WHITE: Rgb<u8> = Rgb([255, 255, 255]);

/// Parse a CSS color into an opaque RGB fill, falling back to the default
/// base color on any parse failure.
pub fn parse_base_color(color: &str) -> Rgb<u8> {
    css_color::Srgb::from_str(color)
        .map(|color| {
            Rgb([
                (color.red * 255.) as u8,
                (color.green * 255.) as u8,
                (color.blue * 255.) as u8,
            ])
        })
        .unwrap_or(DEFAULT_BASE)
}

/// Paint the flat ring-and-dollar icon on an opaque canvas.
pub fn build_icon(base: Rgb<u8>) -> RgbImage {
    let mut img = RgbImage::from_pixel(SIZE, SIZE, base);
    let c = (SIZE / 2) as i32;

    // Ring: white disc with a base-color disc on top
    draw::fill_ellipse(&mut img, c - 180, c - 180, c + 180, c + 180, WHITE);
    draw::fill_ellipse(&mut img, c - 120, c - 120, c + 120, c + 120, base);

    // Dollar sign: vertical bar under three stacked bars
    draw::fill_rect(&mut img, c - 10, c - 80, c + 10, c + 80, WHITE);
    draw::fill_rect(&mut img, c - 60, c - 60, c + 60, c - 20, WHITE);
    draw::fill_rect(&mut img, c - 60, c - 20, c + 60, c + 20, WHITE);
    draw::fill_rect(&mut img, c - 60, c + 20, c + 60, c + 60, WHITE);

    // Corner cuts that carve the block into an S silhouette
    draw::fill_rect(&mut img, c + 20, c - 60, c + 60, c - 20, base);
    draw::fill_rect(&mut img, c - 60, c + 20, c - 20, c + 60, base);

    img
}

/// Render the flat icon and write it as `app_icon.png` under `out_dir`.
pub fn generate(out_dir: &Path, color: &str) -> Result<()> {
    create_dir_all(out_dir).context("Can't create output directory")?;

    let icon = build_icon(parse_base_color(color));
    export::save_png(&DynamicImage::ImageRgb8(icon), &out_dir.join("app_icon.png"))?;
    println!("✓ Generated app_icon.png");

    println!("Icon created successfully");
    Ok(())
}
