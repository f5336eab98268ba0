//! Particle - a single sprite pixel that can be pushed and springs home
//!
//! A particle carries no reference to the engine that owns it. Pointer state
//! and push radius are handed in per call, so the type stays a plain value.

use serde::{Deserialize, Serialize};

/// Per-tick velocity below which an axis counts as at rest.
pub const MOTION_THRESHOLD: f32 = 0.1;
/// Distance from origin below which an axis counts as home.
pub const ORIGIN_THRESHOLD: f32 = 0.1;

/// Rule deciding whether a particle still needs integrating.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SettlePolicy {
    /// Both axes must be moving faster than [`MOTION_THRESHOLD`] and sit
    /// further than [`ORIGIN_THRESHOLD`] from origin.
    #[default]
    PerAxisStrict,
    /// Either axis further than [`ORIGIN_THRESHOLD`] from origin, velocity
    /// ignored. Settles slower, but never parks a particle that was pushed
    /// along a single axis.
    Deviation,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    pub x: f32,
    pub y: f32,
    pub vx: f32,
    pub vy: f32,
    origin_x: f32,
    origin_y: f32,
    size: f32,
    color: u32,          // ABGR packed, passed through to the renderer
    friction: f32,
    ease: f32,
}

impl Particle {
    pub fn new(x: f32, y: f32, size: f32, color: u32, friction: f32, ease: f32) -> Self {
        Self {
            x,
            y,
            vx: 0.0,
            vy: 0.0,
            origin_x: x,
            origin_y: y,
            size,
            color,
            friction,
            ease,
        }
    }

    /// Kick the particle away from the pointer when it is inside the push radius.
    ///
    /// Velocity is assigned, not accumulated: every call inside the radius
    /// resets it to `push_radius` pointing away from the pointer.
    ///
    /// When the pointer sits exactly on the particle, `atan2(0, 0)` is `0`,
    /// so the push is `(-push_radius, 0)`.
    #[inline]
    pub fn apply_proximity_impulse(
        &mut self,
        pointer_x: f32,
        pointer_y: f32,
        push_radius: f32,
        push_radius_sq: f32,
    ) {
        let dx = pointer_x - self.x;
        let dy = pointer_y - self.y;
        let dist_sq = dx * dx + dy * dy;
        if dist_sq < push_radius_sq {
            let theta = dy.atan2(dx);
            self.vx = -push_radius * theta.cos();
            self.vy = -push_radius * theta.sin();
        }
    }

    /// One step of damped motion plus spring back toward origin.
    /// Friction is applied first and the decayed velocity feeds the position.
    #[inline]
    pub fn integrate(&mut self) {
        self.vx *= self.friction;
        self.vy *= self.friction;
        self.x += self.vx + (self.origin_x - self.x) * self.ease;
        self.y += self.vy + (self.origin_y - self.y) * self.ease;
    }

    /// Canonical settle check ([`SettlePolicy::PerAxisStrict`]).
    #[inline]
    pub fn is_displaced(&self) -> bool {
        self.is_displaced_with(SettlePolicy::PerAxisStrict)
    }

    #[inline]
    pub fn is_displaced_with(&self, policy: SettlePolicy) -> bool {
        let off_x = (self.x - self.origin_x).abs() > ORIGIN_THRESHOLD;
        let off_y = (self.y - self.origin_y).abs() > ORIGIN_THRESHOLD;
        match policy {
            SettlePolicy::PerAxisStrict => {
                self.vx.abs() > MOTION_THRESHOLD
                    && off_x
                    && self.vy.abs() > MOTION_THRESHOLD
                    && off_y
            }
            SettlePolicy::Deviation => off_x || off_y,
        }
    }

    #[inline]
    pub fn position(&self) -> (f32, f32) { (self.x, self.y) }

    #[inline]
    pub fn origin(&self) -> (f32, f32) { (self.origin_x, self.origin_y) }

    #[inline]
    pub fn velocity(&self) -> (f32, f32) { (self.vx, self.vy) }

    #[inline]
    pub fn size(&self) -> f32 { self.size }

    #[inline]
    pub fn color(&self) -> u32 { self.color }

    #[inline]
    pub fn friction(&self) -> f32 { self.friction }

    #[inline]
    pub fn ease(&self) -> f32 { self.ease }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn particle_at(x: f32, y: f32) -> Particle {
        Particle::new(x, y, 2.0, 0xFF00_00FF, 0.75, 0.6)
    }

    #[test]
    fn fresh_particle_is_at_rest() {
        let p = particle_at(12.0, 7.0);
        assert!(!p.is_displaced());
        assert!(!p.is_displaced_with(SettlePolicy::Deviation));
        assert_eq!(p.position(), p.origin());
        assert_eq!(p.velocity(), (0.0, 0.0));
    }

    #[test]
    fn pointer_on_top_pushes_toward_negative_x() {
        let mut p = particle_at(0.0, 0.0);
        p.apply_proximity_impulse(0.0, 0.0, 30.0, 900.0);
        assert_eq!(p.vx, -30.0);
        assert_eq!(p.vy, 0.0);
    }

    #[test]
    fn impulse_points_away_from_pointer() {
        let mut p = particle_at(10.0, 10.0);
        // Pointer up-left of the particle: push goes down-right.
        p.apply_proximity_impulse(7.0, 6.0, 30.0, 900.0);
        assert!(p.vx > 0.0);
        assert!(p.vy > 0.0);
        let speed = (p.vx * p.vx + p.vy * p.vy).sqrt();
        assert!((speed - 30.0).abs() < 1e-3);
    }

    #[test]
    fn impulse_outside_radius_is_ignored() {
        let mut p = particle_at(0.0, 0.0);
        p.apply_proximity_impulse(40.0, 0.0, 30.0, 900.0);
        assert_eq!(p.velocity(), (0.0, 0.0));

        // Exactly on the radius is outside (strict <).
        p.apply_proximity_impulse(30.0, 0.0, 30.0, 900.0);
        assert_eq!(p.velocity(), (0.0, 0.0));
    }

    #[test]
    fn impulse_assigns_instead_of_accumulating() {
        let mut p = particle_at(0.0, 0.0);
        p.apply_proximity_impulse(5.0, 0.0, 20.0, 400.0);
        let first = p.velocity();
        p.apply_proximity_impulse(5.0, 0.0, 20.0, 400.0);
        assert_eq!(p.velocity(), first);
        assert_eq!(first.0, -20.0);
    }

    #[test]
    fn integrate_uses_decayed_velocity() {
        let mut p = Particle::new(0.0, 0.0, 1.0, 0, 0.5, 0.25);
        p.vx = 8.0;
        p.vy = -4.0;
        p.integrate();
        assert_eq!(p.velocity(), (4.0, -2.0));
        // Origin gap was zero before the step, so only velocity moved it.
        assert_eq!(p.position(), (4.0, -2.0));

        p.integrate();
        // v = 2, gap = -4 * 0.25 = -1
        assert_eq!(p.vx, 2.0);
        assert_eq!(p.x, 4.0 + 2.0 - 1.0);
    }

    #[test]
    fn free_motion_settles_back_to_origin() {
        let mut p = particle_at(50.0, 50.0);
        p.apply_proximity_impulse(47.0, 46.0, 30.0, 900.0);
        // Still on origin until the first integration moves it.
        assert!(!p.is_displaced());

        let mut last_speed = f32::INFINITY;
        let mut settled_at = None;
        for tick in 0..200 {
            p.integrate();
            let speed = p.vx.abs().max(p.vy.abs());
            assert!(speed <= last_speed);
            last_speed = speed;
            if settled_at.is_none() && !p.is_displaced() {
                settled_at = Some(tick);
            }
        }
        assert!(settled_at.is_some());
        let (x, y) = p.position();
        assert!((x - 50.0).abs() < 1e-3);
        assert!((y - 50.0).abs() < 1e-3);
        assert!(last_speed < 1e-3);
    }

    #[test]
    fn threshold_boundary_is_exclusive() {
        let mut p = particle_at(0.0, 0.0);
        p.x = 0.1;
        p.y = 0.1;
        p.vx = 5.0;
        p.vy = 5.0;
        assert!(!p.is_displaced());
        assert!(!p.is_displaced_with(SettlePolicy::Deviation));

        p.x = 0.5;
        p.y = 0.5;
        p.vx = 0.1;
        p.vy = 0.1;
        assert!(!p.is_displaced());
    }

    #[test]
    fn strict_policy_needs_motion_and_offset_on_both_axes() {
        let mut p = particle_at(0.0, 0.0);
        p.x = 5.0;
        p.y = 5.0;
        p.vx = 3.0;
        p.vy = 3.0;
        assert!(p.is_displaced());

        // Residual offset with no velocity counts as settled.
        p.vx = 0.0;
        p.vy = 0.0;
        assert!(!p.is_displaced());

        // Single-axis motion counts as settled too.
        p.vx = 3.0;
        p.y = 0.0;
        assert!(!p.is_displaced());
        assert!(p.is_displaced_with(SettlePolicy::Deviation));
    }

    #[test]
    fn settle_policy_deserializes_from_camel_case() {
        let policy: SettlePolicy = serde_json::from_str("\"deviation\"").unwrap();
        assert_eq!(policy, SettlePolicy::Deviation);
        let policy: SettlePolicy = serde_json::from_str("\"perAxisStrict\"").unwrap();
        assert_eq!(policy, SettlePolicy::PerAxisStrict);
    }
}
