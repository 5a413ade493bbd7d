use std::collections::HashSet;
use std::fs;
use std::path::Path;

use ab_glyph::{FontVec, PxScale};
use anyhow::{Context, Result, anyhow, bail};
use image::{Rgb, RgbImage};
use imageproc::drawing::{draw_text_mut, text_size};

pub const IMAGE_WIDTH: u32 = 800;
pub const IMAGE_HEIGHT: u32 = 500;

const MAX_TERMS: usize = 120;
const MIN_FONT_PX: f32 = 14.0;
const MAX_FONT_PX: f32 = 88.0;
const MARGIN: u32 = 8;

const PALETTE: [Rgb<u8>; 6] = [
    Rgb([31, 119, 180]),
    Rgb([255, 127, 14]),
    Rgb([44, 160, 44]),
    Rgb([214, 39, 40]),
    Rgb([148, 103, 189]),
    Rgb([23, 190, 207]),
];

/// Rasterizes frequency tables into fixed-size word-cloud images.
///
/// Construction fails fast if the font file is missing, before any project
/// is rendered.
#[derive(Debug)]
pub struct CloudRenderer {
    font: FontVec,
}

impl CloudRenderer {
    pub fn new(font_path: &Path) -> Result<Self> {
        if !font_path.exists() {
            bail!(
                "Font file not found: {} (set --font or WORDCLOUD_FONT)",
                font_path.display()
            );
        }
        let data = fs::read(font_path)
            .with_context(|| format!("Failed to read font file: {}", font_path.display()))?;
        let font = FontVec::try_from_vec(data)
            .map_err(|_| anyhow!("Failed to parse font file: {}", font_path.display()))?;
        Ok(Self { font })
    }

    /// Render a frequency table to `out_path`.
    ///
    /// Returns `false` when nothing survives the stopword cut and no image
    /// is written; the caller reports the skip.
    pub fn render(
        &self,
        table: &[(String, u64)],
        stopwords: &HashSet<String>,
        out_path: &Path,
    ) -> Result<bool> {
        let terms: Vec<(String, u64)> = table
            .iter()
            .map(|(word, count)| (word.replace('\n', ""), *count))
            .filter(|(word, _)| !word.is_empty() && !stopwords.contains(word))
            .take(MAX_TERMS)
            .collect();

        if terms.is_empty() {
            return Ok(false);
        }

        // The table is already sorted by descending count
        let max_count = terms[0].1 as f32;
        let min_count = terms[terms.len() - 1].1 as f32;

        let mut image = RgbImage::from_pixel(IMAGE_WIDTH, IMAGE_HEIGHT, Rgb([255, 255, 255]));

        // Scan-line layout: heaviest terms first, left to right, wrapping
        // into new rows until the canvas runs out of vertical space
        let mut x = MARGIN;
        let mut y = MARGIN;
        let mut row_height = 0u32;
        for (slot, (word, count)) in terms.iter().enumerate() {
            let weight = if max_count > min_count {
                (*count as f32 - min_count) / (max_count - min_count)
            } else {
                1.0
            };
            let scale = PxScale::from(MIN_FONT_PX + weight * (MAX_FONT_PX - MIN_FONT_PX));
            let (width, height) = text_size(scale, &self.font, word);

            if x + width + MARGIN > IMAGE_WIDTH {
                x = MARGIN;
                y += row_height + MARGIN;
                row_height = 0;
            }
            if y + height + MARGIN > IMAGE_HEIGHT {
                break;
            }

            let color = PALETTE[slot % PALETTE.len()];
            draw_text_mut(&mut image, color, x as i32, y as i32, scale, &self.font, word);
            x += width + MARGIN;
            row_height = row_height.max(height);
        }

        image
            .save(out_path)
            .with_context(|| format!("Failed to write image: {}", out_path.display()))?;
        Ok(true)
    }
}
