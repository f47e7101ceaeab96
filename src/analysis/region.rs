use image::RgbImage;

/// Average color of a resolved cell region, channels as decoded (R, G, B).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellColor {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl CellColor {
    /// Sentinel for regions with no pixels to average.
    pub const BLACK: CellColor = CellColor {
        red: 0,
        green: 0,
        blue: 0,
    };

    pub fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }
}

/// Half-open pixel rectangle [min_x, max_x) x [min_y, max_y), clipped to the
/// image it was resolved against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageRegion {
    pub min_x: u32,
    pub min_y: u32,
    pub max_x: u32,
    pub max_y: u32,
}

impl ImageRegion {
    /// Resolve normalized vertices against the actual decoded dimensions.
    ///
    /// Each vertex scales to pixel space and rounds half away from zero
    /// (`f64::round`); the bounding extent is then clipped to
    /// [0, width] x [0, height], so vertices outside [0, 1] can never
    /// produce a box past the image edge. Any vertex count is accepted;
    /// fewer than three collapses to a degenerate (empty) box.
    pub fn from_normalized(points: &[(f64, f64)], width: u32, height: u32) -> Self {
        let mut min_x = f64::INFINITY;
        let mut max_x = f64::NEG_INFINITY;
        let mut min_y = f64::INFINITY;
        let mut max_y = f64::NEG_INFINITY;

        for &(nx, ny) in points {
            let x = (nx * width as f64).round();
            let y = (ny * height as f64).round();
            min_x = min_x.min(x);
            max_x = max_x.max(x);
            min_y = min_y.min(y);
            max_y = max_y.max(y);
        }

        Self {
            min_x: min_x.clamp(0.0, width as f64) as u32,
            min_y: min_y.clamp(0.0, height as f64) as u32,
            max_x: max_x.clamp(0.0, width as f64) as u32,
            max_y: max_y.clamp(0.0, height as f64) as u32,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.min_x >= self.max_x || self.min_y >= self.max_y
    }

    pub fn pixel_count(&self) -> u64 {
        if self.is_empty() {
            return 0;
        }
        (self.max_x - self.min_x) as u64 * (self.max_y - self.min_y) as u64
    }
}

/// Mean channel values over the region, each truncated to an integer.
///
/// An empty or inverted box yields the `(0, 0, 0)` sentinel rather than a
/// computed average.
pub fn average_color(rgb: &RgbImage, region: ImageRegion) -> CellColor {
    if region.is_empty() {
        return CellColor::BLACK;
    }

    let mut sums = [0u64; 3];
    for y in region.min_y..region.max_y {
        for x in region.min_x..region.max_x {
            let pixel = rgb.get_pixel(x, y);
            sums[0] += pixel.0[0] as u64;
            sums[1] += pixel.0[1] as u64;
            sums[2] += pixel.0[2] as u64;
        }
    }

    let count = region.pixel_count();
    CellColor::new(
        (sums[0] / count) as u8,
        (sums[1] / count) as u8,
        (sums[2] / count) as u8,
    )
}

/// Resolve one cell's normalized vertices to its average color.
pub fn resolve_cell_color(rgb: &RgbImage, points: &[(f64, f64)]) -> CellColor {
    let (width, height) = rgb.dimensions();
    average_color(rgb, ImageRegion::from_normalized(points, width, height))
}
