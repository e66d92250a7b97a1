//! Tab panel implementations.

mod game;
mod menu;
mod profile;
mod rules;
mod settings;

pub use game::GameScreen;
pub use menu::{MenuOption, MenuScreen};
pub use profile::{ACHIEVEMENTS, Achievement, ProfileScreen};
pub use rules::{BASIC_RULES, PAWN_RULES, RulesScreen, rules_text};
pub use settings::SettingsScreen;
