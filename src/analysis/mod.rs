pub mod classifier;
pub mod pipeline;
pub mod region;

pub use classifier::{classify, Zone};
pub use pipeline::classify_cells;
pub use region::{average_color, resolve_cell_color, CellColor, ImageRegion};
