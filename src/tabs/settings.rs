//! Display settings: presentation toggles shown on the settings tab.

use derive_setters::Setters;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// One toggle on the settings tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::EnumIter)]
pub enum SettingKind {
    /// Selected square blinks.
    Animations,
    /// Squares reachable from the selection are highlighted.
    Effects,
    /// Background music (label only).
    Music,
    /// Sound effects (label only).
    SoundEffects,
}

impl SettingKind {
    /// Returns the display label for this toggle.
    #[instrument]
    pub fn label(self) -> &'static str {
        match self {
            Self::Animations => "Animations",
            Self::Effects => "Effects",
            Self::Music => "Music",
            Self::SoundEffects => "Sound effects",
        }
    }

    /// Returns the heading this toggle is grouped under.
    #[instrument]
    pub fn group(self) -> &'static str {
        match self {
            Self::Animations | Self::Effects => "Graphics",
            Self::Music | Self::SoundEffects => "Sound",
        }
    }
}

/// Presentation preferences.
///
/// None of these affect the board state; music and sound effects have no
/// audio behind them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Setters, Serialize, Deserialize)]
#[setters(prefix = "with_")]
#[serde(default)]
pub struct DisplaySettings {
    /// Blink the selected square.
    pub animations: bool,
    /// Highlight squares adjacent to the selection.
    pub effects: bool,
    /// Music toggle.
    pub music: bool,
    /// Sound effects toggle.
    pub sound_effects: bool,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            animations: true,
            effects: true,
            music: false,
            sound_effects: false,
        }
    }
}

impl DisplaySettings {
    /// Returns the current value of a toggle.
    pub fn get(&self, kind: SettingKind) -> bool {
        match kind {
            SettingKind::Animations => self.animations,
            SettingKind::Effects => self.effects,
            SettingKind::Music => self.music,
            SettingKind::SoundEffects => self.sound_effects,
        }
    }

    /// Flips a toggle and returns its new value.
    #[instrument(skip(self))]
    pub fn toggle(&mut self, kind: SettingKind) -> bool {
        let slot = match kind {
            SettingKind::Animations => &mut self.animations,
            SettingKind::Effects => &mut self.effects,
            SettingKind::Music => &mut self.music,
            SettingKind::SoundEffects => &mut self.sound_effects,
        };
        *slot = !*slot;
        *slot
    }
}

/// Formats a toggle value the way the settings tab shows it.
pub fn on_off(value: bool) -> &'static str {
    if value { "ON" } else { "OFF" }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_defaults_match_settings_tab() {
        let settings = DisplaySettings::default();
        assert!(settings.animations);
        assert!(settings.effects);
        assert!(!settings.music);
        assert!(!settings.sound_effects);
    }

    #[test]
    fn test_toggle_flips_only_one_setting() {
        for kind in SettingKind::iter() {
            let mut settings = DisplaySettings::default();
            let before = settings;
            assert_eq!(settings.toggle(kind), !before.get(kind));
            for other in SettingKind::iter().filter(|k| *k != kind) {
                assert_eq!(settings.get(other), before.get(other));
            }
        }
    }

    #[test]
    fn test_setters_chain() {
        let settings = DisplaySettings::default()
            .with_animations(false)
            .with_music(true);
        assert!(!settings.animations);
        assert!(settings.music);
        assert!(settings.effects);
    }
}
