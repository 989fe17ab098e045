/// GridView maps between screen pixels and grid cells.
/// The grid is drawn at a fixed offset with square cells.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridView {
    pub offset_x: f32,
    pub offset_y: f32,
    pub cell_size: f32,
}

impl GridView {
    pub const fn new(offset_x: f32, offset_y: f32, cell_size: f32) -> Self {
        Self { offset_x, offset_y, cell_size }
    }

    /// Convert screen coordinates to a cell, `None` outside the grid
    pub fn screen_to_cell(&self, screen_x: f32, screen_y: f32, dimensions: (usize, usize)) -> Option<(usize, usize)> {
        let gx = ((screen_x - self.offset_x) / self.cell_size).floor();
        let gy = ((screen_y - self.offset_y) / self.cell_size).floor();
        if gx < 0.0 || gy < 0.0 {
            return None;
        }

        let (x, y) = (gx as usize, gy as usize);
        (x < dimensions.0 && y < dimensions.1).then_some((x, y))
    }

    /// Top-left screen corner of a cell
    pub fn cell_to_screen(&self, x: usize, y: usize) -> (f32, f32) {
        (
            x as f32 * self.cell_size + self.offset_x,
            y as f32 * self.cell_size + self.offset_y,
        )
    }

    /// Pixel size of the whole grid
    pub fn pixel_size(&self, dimensions: (usize, usize)) -> (f32, f32) {
        (
            dimensions.0 as f32 * self.cell_size,
            dimensions.1 as f32 * self.cell_size,
        )
    }
}
