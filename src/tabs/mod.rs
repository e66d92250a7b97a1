//! Tabbed UI: a tab bar over five panels sharing one session.

mod controller;
mod screens;
mod settings;
mod tab;

pub use controller::TabsController;
pub use screens::{
    ACHIEVEMENTS, Achievement, BASIC_RULES, GameScreen, MenuOption, MenuScreen, PAWN_RULES,
    ProfileScreen, RulesScreen, SettingsScreen, rules_text,
};
pub use settings::{DisplaySettings, SettingKind, on_off};
pub use tab::{TabKind, TabScreen, TabTransition};
