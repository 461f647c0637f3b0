//! Image decoding and encoding on top of the `image` crate. The channel
//! count of the source file is preserved for the 8-bit layouts (gray,
//! gray-alpha, RGB, RGBA); everything else is flattened to 8-bit RGB.

use std::path::Path;

use anyhow::{bail, Context};
use image::DynamicImage;

use crate::core::raster::Raster;

pub fn load_raster<P: AsRef<Path>>(path: P) -> anyhow::Result<Raster> {
    let path = path.as_ref();
    let image = image::open(path)
        .with_context(|| format!("failed to load image '{}'", path.display()))?;

    let (channels, width, height, data) = match image {
        DynamicImage::ImageLuma8(buffer) => (1, buffer.width(), buffer.height(), buffer.into_raw()),
        DynamicImage::ImageLumaA8(buffer) => {
            (2, buffer.width(), buffer.height(), buffer.into_raw())
        }
        DynamicImage::ImageRgb8(buffer) => (3, buffer.width(), buffer.height(), buffer.into_raw()),
        DynamicImage::ImageRgba8(buffer) => {
            (4, buffer.width(), buffer.height(), buffer.into_raw())
        }
        other => {
            let buffer = other.into_rgb8();
            (3, buffer.width(), buffer.height(), buffer.into_raw())
        }
    };

    Raster::from_vec(width, height, channels, data)
}

pub fn save_raster<P: AsRef<Path>>(raster: &Raster, path: P) -> anyhow::Result<()> {
    let path = path.as_ref();
    let (width, height) = (raster.width(), raster.height());
    let data = raster.as_slice().to_vec();

    let image = match raster.channels() {
        1 => image::GrayImage::from_raw(width, height, data).map(DynamicImage::ImageLuma8),
        2 => image::GrayAlphaImage::from_raw(width, height, data).map(DynamicImage::ImageLumaA8),
        3 => image::RgbImage::from_raw(width, height, data).map(DynamicImage::ImageRgb8),
        4 => image::RgbaImage::from_raw(width, height, data).map(DynamicImage::ImageRgba8),
        n => bail!("cannot encode a raster with {} channels", n),
    }
    .context("raster buffer does not match its dimensions")?;

    image
        .save(path)
        .with_context(|| format!("failed to save image '{}'", path.display()))
}
