use image::RgbImage;
use tracing::debug;

use super::classifier::classify;
use super::region::{average_color, ImageRegion};
use crate::types::{CellPosition, CellSpec};

/// Resolve and classify every cell against the decoded image.
///
/// Output preserves input order and length: one entry per cell, same ids.
/// Degenerate cells classify through the black sentinel rather than being
/// dropped. Pure with respect to process state; callable without a server.
pub fn classify_cells(rgb: &RgbImage, cells: &[CellSpec]) -> Vec<CellPosition> {
    let (width, height) = rgb.dimensions();

    cells
        .iter()
        .map(|cell| {
            let region = ImageRegion::from_normalized(&cell.points, width, height);
            let color = average_color(rgb, region);
            let position = classify(color);
            debug!(cell = cell.id, ?region, ?color, zone = position.label());
            CellPosition {
                id: cell.id,
                position,
            }
        })
        .collect()
}
