#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::api::render::Renderer;

use super::FieldCore;

pub(super) fn render<R: Renderer + ?Sized>(field: &FieldCore, renderer: &mut R) {
    renderer.clear(field.grid.width(), field.grid.height());
    for particle in field.grid.particles() {
        renderer.draw_particle(particle.x, particle.y, particle.size(), particle.color());
    }
}

/// Write current positions as interleaved `[x, y]` pairs, grid order.
/// Runs across the rayon pool when the `parallel` feature is on.
pub(super) fn extract_positions(field: &mut FieldCore) -> *const f32 {
    let particles = field.grid.particles();
    let needed = particles.len() * 2;
    if field.render_positions.len() != needed {
        field.render_positions.resize(needed, 0.0);
    }

    #[cfg(feature = "parallel")]
    {
        field
            .render_positions
            .par_chunks_mut(2)
            .zip(particles.par_iter())
            .for_each(|(slot, p)| {
                slot[0] = p.x;
                slot[1] = p.y;
            });
    }

    #[cfg(not(feature = "parallel"))]
    {
        for (slot, p) in field.render_positions.chunks_mut(2).zip(particles.iter()) {
            slot[0] = p.x;
            slot[1] = p.y;
        }
    }

    field.render_positions.as_ptr()
}
