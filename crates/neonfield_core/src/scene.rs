//! Scene: owner of every backdrop entity
//!
//! The scene is built completely from [`SceneSettings`] or not at all. Static
//! content (field, bodies, lines) lives for the whole session; explosions are
//! kept in a generational arena with a separate insertion-order list so they
//! tick in spawn order and can be swept after iteration.

use neonfield_math::Vec3;
use rand::Rng;
use serde::{Serialize, Deserialize};
use slotmap::{new_key_type, SlotMap};
use crate::{
    BodySettings, ConnectorLines, EffectState, ExplosionEffect, ExplosionSettings, FieldSettings,
    FloatingBodySet, LineSettings, NeonColor, ParticleField, SceneError,
};

new_key_type! {
    /// Key to a live explosion in the scene
    ///
    /// Keys of swept explosions resolve to `None`, even if the slot is reused.
    pub struct EffectKey;
}

/// Everything needed to build a [`Scene`]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneSettings {
    /// `None` skips the particle field layer
    pub field: Option<FieldSettings>,
    pub bodies: BodySettings,
    pub lines: LineSettings,
    pub effects: ExplosionSettings,
    /// Cap on concurrently live explosions (`None` = unbounded)
    pub max_concurrent_effects: Option<usize>,
}

impl Default for SceneSettings {
    fn default() -> Self {
        Self {
            field: Some(FieldSettings::default()),
            bodies: BodySettings::default(),
            lines: LineSettings::default(),
            effects: ExplosionSettings::default(),
            max_concurrent_effects: None,
        }
    }
}

impl SceneSettings {
    /// Check every layer's settings without building anything
    ///
    /// [`Scene::build`] runs this first, so a scene is never half-built.
    pub fn validate(&self) -> Result<(), SceneError> {
        if let Some(field) = &self.field {
            field.validate()?;
        }
        self.bodies.validate()?;
        self.lines.validate()?;
        self.effects.validate()?;
        if self.max_concurrent_effects == Some(0) {
            return Err(SceneError::InvalidCount { what: "concurrent explosion cap" });
        }
        Ok(())
    }
}

/// Outcome of one scene update
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TickReport {
    /// Explosions swept during this tick
    pub removed: usize,
    /// Explosions still live after the sweep
    pub live: usize,
}

/// The owned scene context
pub struct Scene {
    field: Option<ParticleField>,
    field_spin: Vec3,
    field_scroll_roll: f32,
    bodies: FloatingBodySet,
    lines: ConnectorLines,
    effects: SlotMap<EffectKey, ExplosionEffect>,
    effect_order: Vec<EffectKey>,
    effect_settings: ExplosionSettings,
    max_concurrent_effects: Option<usize>,
}

impl Scene {
    /// Build every entity from `settings`
    pub fn build<R: Rng + ?Sized>(settings: &SceneSettings, rng: &mut R) -> Result<Self, SceneError> {
        settings.validate()?;

        let field = settings
            .field
            .as_ref()
            .map(|f| ParticleField::from_settings(f, rng))
            .transpose()?;
        let bodies = FloatingBodySet::from_settings(&settings.bodies, rng)?;
        let lines = ConnectorLines::from_settings(&settings.lines, rng)?;

        let (field_spin, field_scroll_roll) = settings
            .field
            .as_ref()
            .map(|f| (f.spin, f.scroll_roll))
            .unwrap_or((Vec3::ZERO, 0.0));

        log::info!(
            "Scene built: {} particles, {} bodies, {} lines",
            field.as_ref().map_or(0, |f| f.len()),
            bodies.len(),
            lines.len()
        );

        Ok(Self {
            field,
            field_spin,
            field_scroll_roll,
            bodies,
            lines,
            effects: SlotMap::with_key(),
            effect_order: Vec::new(),
            effect_settings: settings.effects.clone(),
            max_concurrent_effects: settings.max_concurrent_effects,
        })
    }

    /// Advance all animated content to `time` seconds
    ///
    /// Entities update in insertion order: field, bodies, then explosions in
    /// spawn order. Expired explosions are marked while ticking and removed
    /// once iteration is complete.
    pub fn update(&mut self, time: f32) -> TickReport {
        if let Some(field) = &mut self.field {
            field.rotate(self.field_spin.x, self.field_spin.y, self.field_spin.z);
        }
        self.bodies.advance_all(time);

        let mut expired = Vec::new();
        for &key in &self.effect_order {
            if let Some(effect) = self.effects.get_mut(key) {
                if effect.tick() == EffectState::Expired {
                    expired.push(key);
                }
            }
        }

        let removed = self.sweep(&expired);
        let report = TickReport { removed, live: self.effects.len() };
        log::trace!("Scene tick at {:.3}s: {:?}", time, report);
        report
    }

    fn sweep(&mut self, expired: &[EffectKey]) -> usize {
        if expired.is_empty() {
            return 0;
        }
        let mut removed = 0;
        for &key in expired {
            if self.effects.remove(key).is_some() {
                removed += 1;
            }
        }
        let effects = &self.effects;
        self.effect_order.retain(|key| effects.contains_key(*key));
        log::debug!("Swept {} expired explosion(s), {} live", removed, self.effects.len());
        removed
    }

    /// Scroll parallax: roll the field and nudge every body
    pub fn apply_scroll(&mut self, scroll_offset: f32) {
        if let Some(field) = &mut self.field {
            field.set_roll(scroll_offset * self.field_scroll_roll);
        }
        self.bodies.apply_scroll(scroll_offset);
    }

    /// Spawn an explosion at `origin`
    ///
    /// Returns `None` when the concurrent effect cap is reached.
    pub fn spawn_explosion<R: Rng + ?Sized>(
        &mut self,
        origin: Vec3,
        color: NeonColor,
        rng: &mut R,
    ) -> Option<EffectKey> {
        if let Some(cap) = self.max_concurrent_effects {
            if self.effects.len() >= cap {
                log::warn!("Explosion cap of {} reached, ignoring spawn", cap);
                return None;
            }
        }
        let effect = ExplosionEffect::spawn(origin, color, &self.effect_settings, rng);
        let key = self.effects.insert(effect);
        self.effect_order.push(key);
        log::debug!(
            "Spawned {:?} explosion at ({:.2}, {:.2}, {:.2}), {} live",
            color, origin.x, origin.y, origin.z, self.effects.len()
        );
        Some(key)
    }

    /// Look up a live explosion
    pub fn effect(&self, key: EffectKey) -> Option<&ExplosionEffect> {
        self.effects.get(key)
    }

    /// Live explosions in spawn order
    pub fn effects(&self) -> impl Iterator<Item = (EffectKey, &ExplosionEffect)> {
        self.effect_order
            .iter()
            .filter_map(move |&key| self.effects.get(key).map(|e| (key, e)))
    }

    #[inline]
    pub fn effect_count(&self) -> usize {
        self.effects.len()
    }

    pub fn field(&self) -> Option<&ParticleField> {
        self.field.as_ref()
    }

    pub fn bodies(&self) -> &FloatingBodySet {
        &self.bodies
    }

    pub fn lines(&self) -> &ConnectorLines {
        &self.lines
    }

    pub fn effect_settings(&self) -> &ExplosionSettings {
        &self.effect_settings
    }
}
