//! Draw-call boundary
//!
//! The engine draws the full grid every frame: one `clear`, then one
//! `draw_particle` per particle. Hosts that keep their own background can
//! still skip work on their side, the engine does not try to diff frames.

pub trait Renderer {
    fn clear(&mut self, width: u32, height: u32);

    /// `color` is the ABGR value sampled at build time, passed through untouched.
    fn draw_particle(&mut self, x: f32, y: f32, size: f32, color: u32);
}
