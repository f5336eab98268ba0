//! Grid - every particle sampled from the source image
//!
//! Particles are stored contiguously in row-major sample order and never
//! reallocated after the build. Cell `(row, col)` covers source pixel
//! `(col * pixel_size, row * pixel_size)`.
//!
//! Transparent samples produce no particle. When the image is fully opaque
//! the particle index is plain `row * columns + col`; otherwise a cell lookup
//! table maps cells to particle indices so holes do not shift later rows.

use crate::domain::particle::Particle;
use crate::spatial::active_buffer::ParticleIndex;

mod indexing;
mod sampling;

pub use indexing::CellWindow;

/// Lookup marker for a cell whose sample was transparent.
const NO_PARTICLE: ParticleIndex = ParticleIndex::MAX;

pub struct Grid {
    particles: Vec<Particle>,

    // Source extent in pixels
    width: u32,
    height: u32,
    pixel_size: u32,

    // Exact sampled extent in cells: ceil(extent / pixel_size)
    columns: u32,
    rows: u32,

    // Cached round(value / pixel_size), computed once at build
    width_scaled: u32,
    height_scaled: u32,
    radius_scaled: u32,

    // None when every sample was opaque
    cell_lookup: Option<Vec<ParticleIndex>>,
}

impl Grid {
    #[inline]
    pub fn len(&self) -> usize { self.particles.len() }

    #[inline]
    pub fn is_empty(&self) -> bool { self.particles.is_empty() }

    #[inline]
    pub fn particles(&self) -> &[Particle] { &self.particles }

    /// Particle by index. Index must come from this grid.
    #[inline(always)]
    pub fn particle(&self, index: ParticleIndex) -> &Particle {
        fast!(self.particles, [index as usize])
    }

    #[inline(always)]
    pub fn particle_mut(&mut self, index: ParticleIndex) -> &mut Particle {
        fast!(mut self.particles, [index as usize])
    }

    #[inline]
    pub fn is_dense(&self) -> bool { self.cell_lookup.is_none() }

    /// Drop particle storage. The grid reads as empty afterwards.
    pub(crate) fn release(&mut self) {
        self.particles = Vec::new();
        self.cell_lookup = None;
        self.columns = 0;
        self.rows = 0;
    }
}
