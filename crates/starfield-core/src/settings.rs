//! Tunable slider values read by the force model once per tick.

use serde::{Deserialize, Serialize};

pub const SETTING_MIN: f32 = 0.0;
pub const SETTING_MAX: f32 = 100.0;
pub const SETTING_DEFAULT: f32 = 50.0;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub attract_strength: f32,
    pub attract_radius: f32,
    pub attract_scale: f32,
    pub repel_strength: f32,
    pub repel_radius: f32,
    pub repel_scale: f32,
    pub clamp: f32,
    pub poke_strength: f32,
    pub ring_enabled: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            attract_strength: SETTING_DEFAULT,
            attract_radius: SETTING_DEFAULT,
            attract_scale: SETTING_DEFAULT,
            repel_strength: SETTING_DEFAULT,
            repel_radius: SETTING_DEFAULT,
            repel_scale: SETTING_DEFAULT,
            clamp: SETTING_DEFAULT,
            poke_strength: SETTING_DEFAULT,
            ring_enabled: true,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SettingKey {
    AttractStrength,
    AttractRadius,
    AttractScale,
    RepelStrength,
    RepelRadius,
    RepelScale,
    Clamp,
    PokeStrength,
}

impl SettingKey {
    pub const ALL: [SettingKey; 8] = [
        SettingKey::AttractStrength,
        SettingKey::AttractRadius,
        SettingKey::AttractScale,
        SettingKey::RepelStrength,
        SettingKey::RepelRadius,
        SettingKey::RepelScale,
        SettingKey::Clamp,
        SettingKey::PokeStrength,
    ];

    /// Maps the slider names used by the page onto keys.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "attractStrength" | "attract_strength" => Some(SettingKey::AttractStrength),
            "attractRadius" | "attract_radius" => Some(SettingKey::AttractRadius),
            "attractScale" | "attract_scale" => Some(SettingKey::AttractScale),
            "repelStrength" | "repel_strength" => Some(SettingKey::RepelStrength),
            "repelRadius" | "repel_radius" => Some(SettingKey::RepelRadius),
            "repelScale" | "repel_scale" => Some(SettingKey::RepelScale),
            "clamp" | "forceClamp" => Some(SettingKey::Clamp),
            "pokeStrength" | "poke_strength" => Some(SettingKey::PokeStrength),
            _ => None,
        }
    }
}

/// Out-of-range values are clamped and non-finite ones fall back to the
/// default; tunables are never rejected.
#[inline]
pub fn sanitize(value: f32) -> f32 {
    if value.is_finite() {
        value.clamp(SETTING_MIN, SETTING_MAX)
    } else {
        SETTING_DEFAULT
    }
}

impl Settings {
    pub fn get(&self, key: SettingKey) -> f32 {
        match key {
            SettingKey::AttractStrength => self.attract_strength,
            SettingKey::AttractRadius => self.attract_radius,
            SettingKey::AttractScale => self.attract_scale,
            SettingKey::RepelStrength => self.repel_strength,
            SettingKey::RepelRadius => self.repel_radius,
            SettingKey::RepelScale => self.repel_scale,
            SettingKey::Clamp => self.clamp,
            SettingKey::PokeStrength => self.poke_strength,
        }
    }

    pub fn set(&mut self, key: SettingKey, value: f32) {
        let v = sanitize(value);
        let slot = match key {
            SettingKey::AttractStrength => &mut self.attract_strength,
            SettingKey::AttractRadius => &mut self.attract_radius,
            SettingKey::AttractScale => &mut self.attract_scale,
            SettingKey::RepelStrength => &mut self.repel_strength,
            SettingKey::RepelRadius => &mut self.repel_radius,
            SettingKey::RepelScale => &mut self.repel_scale,
            SettingKey::Clamp => &mut self.clamp,
            SettingKey::PokeStrength => &mut self.poke_strength,
        };
        *slot = v;
    }

    pub fn sanitized(mut self) -> Self {
        for key in SettingKey::ALL {
            let v = self.get(key);
            self.set(key, v);
        }
        self
    }
}
