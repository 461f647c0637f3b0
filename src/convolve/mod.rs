//! Parallel 3x3 convolution over interleaved rasters.
//!
//! The destination is split into one disjoint block of whole rows per
//! worker before any thread starts, so workers never share a byte of
//! output and no locking is involved. Taps that fall outside the raster
//! are clamped to the nearest edge pixel.

mod range;

pub use range::*;

use std::mem;

use crate::core::kernel::Kernel;
use crate::core::raster::Raster;

pub struct Convolver {
    workers: u32,
}

impl Convolver {
    pub fn new(workers: u32) -> Self {
        Self {
            workers: workers.max(1),
        }
    }

    pub fn workers(&self) -> u32 {
        self.workers
    }

    /// Convolves `src` with `kernel` and returns the filtered raster of the
    /// same dimensions. The filtered value of a sample depends only on the
    /// source, so the result is identical for every worker count.
    pub fn apply(&self, src: &Raster, kernel: Kernel) -> anyhow::Result<Raster> {
        let height = src.height();
        let row_stride = src.row_stride();
        let mut dest = Raster::new(src.width(), src.height(), src.channels());
        if dest.as_slice().is_empty() {
            return Ok(dest);
        }

        let ranges = partition_rows(height, self.workers);
        log::info!("{} rows across {} workers", height, ranges.len());

        // Carve the destination into per-range row blocks up front; the
        // split hands each worker exclusive access to its rows.
        let mut row_slices = Vec::with_capacity(ranges.len());
        let mut rest = dest.as_mut_slice();
        for range in &ranges {
            let take = range.len() as usize * row_stride;
            let (rows, tail) = mem::take(&mut rest).split_at_mut(take);
            row_slices.push(rows);
            rest = tail;
        }
        debug_assert!(rest.is_empty());

        let progress_bar = row_progress_bar(height);

        crossbeam::scope(|scope| {
            for (rows, &range) in row_slices.into_iter().zip(ranges.iter()) {
                let progress_bar = progress_bar.clone();

                scope.spawn(move |_| {
                    for (i, out_row) in rows.chunks_mut(row_stride).enumerate() {
                        convolve_row(src, &kernel, range.start + i as u32, out_row);
                        progress_bar.inc(1);
                    }
                });
            }
        })
        .map_err(|_| anyhow::anyhow!("a filter worker panicked"))?;

        Ok(dest)
    }
}

fn convolve_row(src: &Raster, kernel: &Kernel, y: u32, out: &mut [u8]) {
    debug_assert_eq!(out.len(), src.row_stride());

    let mut i = 0;
    for x in 0..src.width() {
        for ch in 0..src.channels() {
            out[i] = convolve_pixel(src, kernel, x, y, ch);
            i += 1;
        }
    }
}

/// Weighs the 3x3 neighborhood of `(x, y)` on channel `ch` with `kernel`.
/// Out-of-range sums saturate to `0..=255`; in-range sums round to the
/// nearest integer.
fn convolve_pixel(src: &Raster, kernel: &Kernel, x: u32, y: u32, ch: u32) -> u8 {
    let x_taps = [x.saturating_sub(1), x, (x + 1).min(src.width() - 1)];
    let y_taps = [y.saturating_sub(1), y, (y + 1).min(src.height() - 1)];

    let mut sum = 0.0f32;
    for (r, kernel_row) in kernel.iter().enumerate() {
        for (c, weight) in kernel_row.iter().enumerate() {
            sum += weight * src.sample(x_taps[c], y_taps[r], ch) as f32;
        }
    }
    sum.clamp(0.0, 255.0).round() as u8
}

fn row_progress_bar(height: u32) -> indicatif::ProgressBar {
    let progress_bar = indicatif::ProgressBar::new(height as u64);
    progress_bar.set_style(
        indicatif::ProgressStyle::default_bar()
            .template("[{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} (eta: {eta})")
            .progress_chars("#>-"),
    );
    progress_bar
}
