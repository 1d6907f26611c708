// viewport.rs - Mapping between surface pixels and grid cells

use crate::grid::GridSize;

/// A drawing surface of `width x height` pixels showing a grid of `size` cells.
/// Coordinates are relative to the surface's top-left corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
    pub size: GridSize,
}

/// Axis-aligned rectangle in surface pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PixelRect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

/// A line segment from `from` to `to`.
pub type Line = ([f32; 2], [f32; 2]);

impl Viewport {
    pub fn new(width: f32, height: f32, size: GridSize) -> Self {
        Self { width, height, size }
    }

    pub fn cell_width(&self) -> f32 {
        self.width / self.size.width as f32
    }

    pub fn cell_height(&self) -> f32 {
        self.height / self.size.height as f32
    }

    fn is_empty(&self) -> bool {
        !(self.width > 0.0 && self.height > 0.0) || self.size.area() == 0
    }

    /// Cell under a pointer at `(x, y)`.
    ///
    /// Pixels past the right or bottom edge clamp to the last column or row.
    /// Pixels left of or above the surface, or an empty surface, give `None`.
    pub fn cell_at(&self, x: f32, y: f32) -> Option<(usize, usize)> {
        if self.is_empty() || !(x >= 0.0 && y >= 0.0) {
            return None;
        }
        let col = ((x / self.cell_width()) as usize).min(self.size.width - 1);
        let row = ((y / self.cell_height()) as usize).min(self.size.height - 1);
        Some((col, row))
    }

    pub fn cell_rect(&self, col: usize, row: usize) -> PixelRect {
        let (w, h) = (self.cell_width(), self.cell_height());
        PixelRect {
            x: col as f32 * w,
            y: row as f32 * h,
            width: w,
            height: h,
        }
    }

    /// Vertical then horizontal grid lines spanning the surface.
    pub fn grid_lines(&self) -> impl Iterator<Item = Line> + '_ {
        let verticals = (0..=self.size.width).map(move |i| {
            let x = i as f32 * self.cell_width();
            ([x, 0.0], [x, self.height])
        });
        let horizontals = (0..=self.size.height).map(move |j| {
            let y = j as f32 * self.cell_height();
            ([0.0, y], [self.width, y])
        });
        verticals.chain(horizontals)
    }
}
