use common::{Color, ColorMatrix};
use crossterm::{
    queue,
    style::{self, Print, ResetColor, SetBackgroundColor},
};
use std::io::{self, Write};

use super::buffer::PixelBuffer;
use super::types::PreviewConfig;

/// One pixel per `cell_ratio` block, indexed `[x][y]`.
pub fn sample(buffer: &PixelBuffer, cell_ratio: u32) -> ColorMatrix {
    let step = cell_ratio.max(1);
    let columns = buffer.width().div_ceil(step);
    let rows = buffer.height().div_ceil(step);

    (0..columns)
        .map(|cx| {
            (0..rows)
                .map(|cy| buffer.pixel(cx * step, cy * step).unwrap_or(Color::BLACK))
                .collect()
        })
        .collect()
}

/// Prints sampled cells as background-colored blocks.
pub fn write_preview<W: Write>(out: &mut W, samples: &ColorMatrix, config: &PreviewConfig) -> io::Result<()> {
    let rows = samples.first().map_or(0, Vec::len);
    let block = " ".repeat(config.chars_per_cell.horizontal);

    for y in 0..rows {
        for _ in 0..config.chars_per_cell.vertical {
            for column in samples {
                let color = column[y];
                queue!(
                    out,
                    SetBackgroundColor(style::Color::Rgb {
                        r: color.red(),
                        g: color.green(),
                        b: color.blue(),
                    }),
                    Print(&block)
                )?;
            }
            queue!(out, ResetColor, Print("\n"))?;
        }
    }
    out.flush()
}
