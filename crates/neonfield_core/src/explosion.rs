//! Transient explosion effects
//!
//! An explosion is a burst of points leaving a common origin at fixed
//! velocities while the whole burst fades. Its lifecycle is a two-state
//! machine:
//!
//! ```text
//! Active --(opacity <= 0)--> Expired
//! ```
//!
//! The effect never removes itself; the owning [`crate::Scene`] sweeps expired
//! effects after each tick.

use neonfield_math::Vec3;
use rand::Rng;
use serde::{Serialize, Deserialize};
use crate::{symmetric, NeonColor, SceneError};

/// Parameters shared by every spawned explosion
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ExplosionSettings {
    /// Points per burst
    pub particle_count: usize,
    /// Full width of the symmetric per-axis velocity range
    pub velocity_range: f32,
    pub initial_opacity: f32,
    /// Opacity lost per tick
    pub opacity_decrement: f32,
    pub point_size: f32,
}

impl Default for ExplosionSettings {
    fn default() -> Self {
        Self {
            particle_count: 50,
            velocity_range: 0.2,
            initial_opacity: 1.0,
            opacity_decrement: 0.02,
            point_size: 0.1,
        }
    }
}

impl ExplosionSettings {
    /// Check the settings once so spawning can never fail
    pub fn validate(&self) -> Result<(), SceneError> {
        SceneError::require_count(self.particle_count, "explosion particle count")?;
        SceneError::require_range(0.0, self.velocity_range, "explosion velocity")?;
        SceneError::require_positive(self.initial_opacity, "explosion initial opacity")?;
        SceneError::require_positive(self.opacity_decrement, "explosion opacity decrement")
    }
}

/// Lifecycle state of an explosion
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EffectState {
    Active,
    Expired,
}

/// A single fading particle burst
#[derive(Clone, Debug)]
pub struct ExplosionEffect {
    origin: Vec3,
    color: NeonColor,
    positions: Vec<Vec3>,
    velocities: Vec<Vec3>,
    initial_opacity: f32,
    opacity_decrement: f32,
    ticks: u32,
    point_size: f32,
}

impl ExplosionEffect {
    /// Create a burst at `origin`; every point starts at the origin
    ///
    /// `settings` must have passed [`ExplosionSettings::validate`].
    pub fn spawn<R: Rng + ?Sized>(
        origin: Vec3,
        color: NeonColor,
        settings: &ExplosionSettings,
        rng: &mut R,
    ) -> Self {
        let range = settings.velocity_range;
        let velocities = (0..settings.particle_count)
            .map(|_| Vec3::new(symmetric(rng, range), symmetric(rng, range), symmetric(rng, range)))
            .collect();

        Self {
            origin,
            color,
            positions: vec![origin; settings.particle_count],
            velocities,
            initial_opacity: settings.initial_opacity,
            opacity_decrement: settings.opacity_decrement,
            ticks: 0,
            point_size: settings.point_size,
        }
    }

    /// Advance one tick and return the new state
    ///
    /// Expired effects are left untouched.
    pub fn tick(&mut self) -> EffectState {
        if self.state() == EffectState::Expired {
            return EffectState::Expired;
        }
        for (p, v) in self.positions.iter_mut().zip(&self.velocities) {
            *p += *v;
        }
        self.ticks += 1;
        self.state()
    }

    pub fn state(&self) -> EffectState {
        if self.faded_opacity() <= 0.0 {
            EffectState::Expired
        } else {
            EffectState::Active
        }
    }

    // Recomputed from the tick count so repeated subtraction cannot drift
    fn faded_opacity(&self) -> f32 {
        self.initial_opacity - self.opacity_decrement * self.ticks as f32
    }

    #[inline]
    pub fn is_expired(&self) -> bool {
        self.state() == EffectState::Expired
    }

    /// Current opacity, never below zero
    pub fn opacity(&self) -> f32 {
        self.faded_opacity().max(0.0)
    }

    #[inline]
    pub fn ticks(&self) -> u32 {
        self.ticks
    }

    #[inline]
    pub fn origin(&self) -> Vec3 {
        self.origin
    }

    #[inline]
    pub fn color(&self) -> NeonColor {
        self.color
    }

    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    pub fn velocities(&self) -> &[Vec3] {
        &self.velocities
    }

    #[inline]
    pub fn point_size(&self) -> f32 {
        self.point_size
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn spawn_default(origin: Vec3) -> ExplosionEffect {
        let mut rng = StdRng::seed_from_u64(50);
        ExplosionEffect::spawn(origin, NeonColor::Cyan, &ExplosionSettings::default(), &mut rng)
    }

    #[test]
    fn test_spawn_at_origin() {
        let origin = Vec3::new(1.0, -2.0, 0.5);
        let effect = spawn_default(origin);
        assert_eq!(effect.positions().len(), 50);
        assert!(effect.positions().iter().all(|p| *p == origin));
        assert!(effect.velocities().iter().all(|v| v.within_cube(0.1)));
        assert_eq!(effect.opacity(), 1.0);
        assert_eq!(effect.state(), EffectState::Active);
    }

    fn ticks_until_expired(settings: &ExplosionSettings) -> u32 {
        let mut rng = StdRng::seed_from_u64(7);
        let mut effect = ExplosionEffect::spawn(Vec3::ZERO, NeonColor::Green, settings, &mut rng);
        let mut ticks = 1;
        while effect.tick() == EffectState::Active {
            assert!(effect.opacity() > 0.0);
            ticks += 1;
        }
        ticks
    }

    #[test]
    fn test_lifetime_follows_decrement() {
        assert_eq!(ticks_until_expired(&ExplosionSettings::default()), 50);
        let settings = ExplosionSettings { opacity_decrement: 0.03, ..ExplosionSettings::default() };
        assert_eq!(ticks_until_expired(&settings), 34);
    }

    #[test]
    fn test_not_expired_while_opacity_positive() {
        let settings = ExplosionSettings { opacity_decrement: 0.01999999, ..ExplosionSettings::default() };
        let mut rng = StdRng::seed_from_u64(8);
        let mut effect = ExplosionEffect::spawn(Vec3::ZERO, NeonColor::Cyan, &settings, &mut rng);
        for _ in 0..50 {
            effect.tick();
        }
        // 1.0 - 50 * 0.01999999 is still a sliver above zero
        assert!(effect.opacity() > 0.0);
        assert_eq!(effect.state(), EffectState::Active);
        assert_eq!(effect.tick(), EffectState::Expired);
        assert_eq!(effect.opacity(), 0.0);
    }

    #[test]
    fn test_opacity_monotone_until_expired() {
        let mut effect = spawn_default(Vec3::ZERO);
        let mut last = effect.opacity();
        let mut ticks = 0;
        while effect.tick() == EffectState::Active {
            ticks += 1;
            assert!(effect.opacity() <= last);
            assert!(effect.opacity() > 0.0);
            last = effect.opacity();
        }
        ticks += 1;
        assert_eq!(ticks, 50);
        assert_eq!(effect.opacity(), 0.0);
    }

    #[test]
    fn test_half_faded_after_25_ticks() {
        let mut effect = spawn_default(Vec3::ZERO);
        for _ in 0..25 {
            effect.tick();
        }
        assert!((effect.opacity() - 0.5).abs() < 1e-5);
        assert!(!effect.is_expired());
    }

    #[test]
    fn test_positions_integrate_velocity() {
        let mut effect = spawn_default(Vec3::ZERO);
        for _ in 0..10 {
            effect.tick();
        }
        for (p, v) in effect.positions().iter().zip(effect.velocities()) {
            assert!((*p - *v * 10.0).length() < 1e-5);
        }
    }

    #[test]
    fn test_expired_effect_is_frozen() {
        let mut effect = spawn_default(Vec3::ZERO);
        for _ in 0..50 {
            effect.tick();
        }
        let frozen = effect.positions().to_vec();
        assert_eq!(effect.tick(), EffectState::Expired);
        assert_eq!(effect.ticks(), 50);
        assert_eq!(effect.positions(), frozen.as_slice());
    }

    #[test]
    fn test_settings_validation() {
        assert!(ExplosionSettings::default().validate().is_ok());
        let bad = ExplosionSettings { opacity_decrement: 0.0, ..ExplosionSettings::default() };
        assert!(bad.validate().is_err());
        let bad = ExplosionSettings { particle_count: 0, ..ExplosionSettings::default() };
        assert!(bad.validate().is_err());
    }
}
