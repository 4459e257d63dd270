// splashmark/src/processors/resizer.rs
use image::{imageops::FilterType, DynamicImage, GenericImageView};

/// Sinc-class filter used for both the fit and the final resize.
const FILTER: FilterType = FilterType::Lanczos3;

/// Region kept by an aspect-fit crop, in source pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CropBox {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

#[derive(Debug, Default)]
pub struct Resizer;

impl Resizer {
    pub fn new() -> Self {
        Self
    }

    /// Crops `image` around its center to the `width:height` ratio and scales
    /// the kept region to exactly `width`x`height`.
    pub fn fit(&self, image: &DynamicImage, width: u32, height: u32) -> DynamicImage {
        let (orig_width, orig_height) = image.dimensions();
        let crop = Self::center_crop_box(orig_width, orig_height, width, height);

        log::debug!(
            "Fitting {}x{} to {}x{} via crop {}x{} at ({}, {})",
            orig_width,
            orig_height,
            width,
            height,
            crop.width,
            crop.height,
            crop.x,
            crop.y
        );

        let cropped = if crop.width == orig_width && crop.height == orig_height {
            image.clone()
        } else {
            image.crop_imm(crop.x, crop.y, crop.width, crop.height)
        };

        self.resize_exact(&cropped, width, height)
    }

    pub fn resize_exact(&self, image: &DynamicImage, width: u32, height: u32) -> DynamicImage {
        if width == image.width() && height == image.height() {
            log::debug!("Image dimensions unchanged, skipping resize");
            return image.clone();
        }

        log::debug!(
            "Resizing image from {}x{} to {}x{}",
            image.width(),
            image.height(),
            width,
            height
        );

        image.resize_exact(width, height, FILTER)
    }

    /// Computes the largest centered region of a `orig_w`x`orig_h` image whose
    /// ratio matches `target_w:target_h`. Trimming is symmetric on the longer
    /// axis; an odd leftover pixel goes to the right or bottom edge.
    pub fn center_crop_box(orig_w: u32, orig_h: u32, target_w: u32, target_h: u32) -> CropBox {
        let (ow, oh) = (orig_w as u64, orig_h as u64);
        let (tw, th) = (target_w.max(1) as u64, target_h.max(1) as u64);

        // Compare ow/oh with tw/th without going through floats.
        let (width, height) = if ow * th > oh * tw {
            let width = ((oh * tw + th / 2) / th).clamp(1, ow);
            (width, oh)
        } else if ow * th < oh * tw {
            let height = ((ow * th + tw / 2) / tw).clamp(1, oh);
            (ow, height)
        } else {
            (ow, oh)
        };

        CropBox {
            x: ((ow - width) / 2) as u32,
            y: ((oh - height) / 2) as u32,
            width: width as u32,
            height: height as u32,
        }
    }
}
