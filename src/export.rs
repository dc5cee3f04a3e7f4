use anyhow::{Context, Result};
use image::DynamicImage;
use std::path::Path;

/// Write an image as PNG, overwriting any existing file at `path`.
pub fn save_png(image: &DynamicImage, path: &Path) -> Result<()> {
    let mut file = std::fs::File::create(path)
        .with_context(|| format!("Failed to create {}", path.display()))?;

    image
        .write_to(&mut file, image::ImageOutputFormat::Png)
        .with_context(|| format!("Failed to write {}", path.display()))?;

    Ok(())
}
