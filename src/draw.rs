use image::{GenericImage, GenericImageView, GrayImage, Luma, Rgba, RgbaImage};

/// Fill an axis-aligned ellipse given its inclusive bounding box.
/// Pixels are replaced rather than composited, so a translucent fill
/// punches its own alpha into the canvas.
pub fn fill_ellipse<I: GenericImage>(
    img: &mut I,
    x0: i32,
    y0: i32,
    x1: i32,
    y1: i32,
    fill: I::Pixel,
) {
    let (width, height) = img.dimensions();
    let center_x = (x0 + x1) as f32 / 2.0;
    let center_y = (y0 + y1) as f32 / 2.0;
    let radius_x = (x1 - x0) as f32 / 2.0;
    let radius_y = (y1 - y0) as f32 / 2.0;

    if radius_x <= 0.0 || radius_y <= 0.0 {
        return;
    }

    for y in y0.max(0)..=y1.min(height as i32 - 1) {
        for x in x0.max(0)..=x1.min(width as i32 - 1) {
            let dx = (x as f32 - center_x) / radius_x;
            let dy = (y as f32 - center_y) / radius_y;

            if dx * dx + dy * dy <= 1.0 {
                img.put_pixel(x as u32, y as u32, fill);
            }
        }
    }
}

/// Fill an axis-aligned rectangle given its inclusive bounding box.
pub fn fill_rect<I: GenericImage>(
    img: &mut I,
    x0: i32,
    y0: i32,
    x1: i32,
    y1: i32,
    fill: I::Pixel,
) {
    let (width, height) = img.dimensions();

    for y in y0.max(0)..=y1.min(height as i32 - 1) {
        for x in x0.max(0)..=x1.min(width as i32 - 1) {
            img.put_pixel(x as u32, y as u32, fill);
        }
    }
}

/// Build a single-channel mask covering a rounded rectangle that spans the
/// whole canvas: 255 inside, 0 outside, with a one-pixel ramp along the
/// curved corners.
pub fn rounded_rect_mask(width: u32, height: u32, radius: f32) -> GrayImage {
    let right = width as f32 - 1.0 - radius;
    let bottom = height as f32 - 1.0 - radius;

    GrayImage::from_fn(width, height, |x, y| {
        let px = x as f32;
        let py = y as f32;

        // Corner zones fall under the quarter-disc test; the straight
        // spans between them are fully opaque.
        let corner_x = if px < radius {
            Some(radius)
        } else if px > right {
            Some(right)
        } else {
            None
        };
        let corner_y = if py < radius {
            Some(radius)
        } else if py > bottom {
            Some(bottom)
        } else {
            None
        };

        let value = match (corner_x, corner_y) {
            (Some(cx), Some(cy)) => {
                let dx = px - cx;
                let dy = py - cy;
                let distance = (dx * dx + dy * dy).sqrt();

                if distance <= radius - 1.0 {
                    255.0
                } else if distance <= radius {
                    // Anti-aliasing edge
                    (radius - distance) * 255.0
                } else {
                    0.0
                }
            }
            _ => 255.0,
        };

        Luma([value as u8])
    })
}

/// Replace the alpha channel of `img` with the mask values.
pub fn apply_alpha_mask(img: &mut RgbaImage, mask: &GrayImage) {
    debug_assert_eq!(img.dimensions(), mask.dimensions());

    for (x, y, pixel) in img.enumerate_pixels_mut() {
        pixel[3] = mask.get_pixel(x, y)[0];
    }
}

/// Source-over blend of `fill` into a single pixel at the given coverage.
/// Out-of-bounds coordinates are ignored.
pub fn blend_pixel(img: &mut RgbaImage, x: i32, y: i32, fill: Rgba<u8>, coverage: f32) {
    if x < 0 || y < 0 || x >= img.width() as i32 || y >= img.height() as i32 {
        return;
    }

    let alpha = coverage.clamp(0.0, 1.0) * fill[3] as f32 / 255.0;
    if alpha <= 0.0 {
        return;
    }

    let pixel = img.get_pixel_mut(x as u32, y as u32);
    for channel in 0..3 {
        pixel[channel] = (fill[channel] as f32 * alpha + pixel[channel] as f32 * (1.0 - alpha)) as u8;
    }
    pixel[3] = pixel[3].max((alpha * 255.0) as u8);
}
