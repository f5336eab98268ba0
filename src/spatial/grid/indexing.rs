use super::*;

/// Inclusive cell rectangle, already clamped to the grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CellWindow {
    pub col_start: u32,
    pub col_end: u32,
    pub row_start: u32,
    pub row_end: u32,
}

impl CellWindow {
    #[inline]
    pub fn cell_count(&self) -> usize {
        ((self.col_end - self.col_start + 1) as usize) * ((self.row_end - self.row_start + 1) as usize)
    }
}

impl Grid {
    // === Dimensions ===
    #[inline]
    pub fn width(&self) -> u32 { self.width }

    #[inline]
    pub fn height(&self) -> u32 { self.height }

    #[inline]
    pub fn pixel_size(&self) -> u32 { self.pixel_size }

    #[inline]
    pub fn columns(&self) -> u32 { self.columns }

    #[inline]
    pub fn rows(&self) -> u32 { self.rows }

    #[inline]
    pub fn width_scaled(&self) -> u32 { self.width_scaled }

    #[inline]
    pub fn height_scaled(&self) -> u32 { self.height_scaled }

    #[inline]
    pub fn radius_scaled(&self) -> u32 { self.radius_scaled }

    // === Cell lookup ===

    /// Particle sitting in cell `(row, col)`, if its sample was opaque.
    #[inline(always)]
    pub fn particle_at_cell(&self, row: u32, col: u32) -> Option<ParticleIndex> {
        debug_assert!(
            row < self.rows && col < self.columns,
            "particle_at_cell: ({}, {}) outside {}x{} cells",
            row,
            col,
            self.columns,
            self.rows
        );
        let cell = (row as usize) * (self.columns as usize) + (col as usize);
        match &self.cell_lookup {
            None => Some(cell as ParticleIndex),
            Some(lookup) => {
                let idx = *fast!(lookup, [cell]);
                (idx != NO_PARTICLE).then_some(idx)
            }
        }
    }

    /// Cells within `radius_scaled` of the pointer's nearest cell, both ends
    /// inclusive, clamped to the sampled extent. `None` when the clamped
    /// window is empty (pointer far off the surface, or no cells at all).
    pub fn activation_window(&self, pointer_x: f32, pointer_y: f32) -> Option<CellWindow> {
        if self.columns == 0 || self.rows == 0 {
            return None;
        }
        let scale = self.pixel_size as f32;
        // Float-to-int casts saturate (NaN -> 0), so wild coordinates stay finite.
        let gx = (pointer_x / scale).round() as i64;
        let gy = (pointer_y / scale).round() as i64;
        let r = self.radius_scaled as i64;

        let col_start = gx.saturating_sub(r).max(0);
        let col_end = gx.saturating_add(r).min(self.columns as i64 - 1);
        let row_start = gy.saturating_sub(r).max(0);
        let row_end = gy.saturating_add(r).min(self.rows as i64 - 1);
        if col_end < col_start || row_end < row_start {
            return None;
        }

        Some(CellWindow {
            col_start: col_start as u32,
            col_end: col_end as u32,
            row_start: row_start as u32,
            row_end: row_end as u32,
        })
    }
}
