use super::*;

use crate::api::raster::{pack_abgr, RasterSampler};
use crate::domain::config::FieldConfig;

impl Grid {
    /// Sample `sampler` every `pixel_size` pixels across `[0, width) x [0, height)`,
    /// rows outer, and create one particle per non-transparent sample.
    ///
    /// `config` must already be validated (non-zero `pixel_size`).
    pub fn build<S: RasterSampler + ?Sized>(
        sampler: &S,
        width: u32,
        height: u32,
        config: &FieldConfig,
    ) -> Self {
        let pixel_size = config.pixel_size.max(1);
        let columns = width.div_ceil(pixel_size);
        let rows = height.div_ceil(pixel_size);
        let cells = (columns as usize) * (rows as usize);

        let size = config.resolved_particle_size();
        let mut particles = Vec::with_capacity(cells);
        // Only allocated once a transparent sample shows up.
        let mut lookup: Option<Vec<ParticleIndex>> = None;

        for row in 0..rows {
            let y = row * pixel_size;
            for col in 0..columns {
                let x = col * pixel_size;
                let rgba = sampler.sample(x, y);
                let cell = (row as usize) * (columns as usize) + (col as usize);
                if rgba[3] == 0 {
                    lookup.get_or_insert_with(|| {
                        // Every earlier cell was opaque, so its particle index is its cell index.
                        let mut table = vec![NO_PARTICLE; cells];
                        for (c, slot) in table.iter_mut().enumerate().take(cell) {
                            *slot = c as ParticleIndex;
                        }
                        table
                    });
                    continue;
                }
                if let Some(table) = lookup.as_mut() {
                    table[cell] = particles.len() as ParticleIndex;
                }
                particles.push(Particle::new(
                    x as f32,
                    y as f32,
                    size,
                    pack_abgr(rgba),
                    config.friction,
                    config.ease,
                ));
            }
        }

        let scale = pixel_size as f32;
        Self {
            particles,
            width,
            height,
            pixel_size,
            columns,
            rows,
            width_scaled: (width as f32 / scale).round() as u32,
            height_scaled: (height as f32 / scale).round() as u32,
            radius_scaled: (config.push_radius / scale).round() as u32,
            cell_lookup: lookup,
        }
    }
}
