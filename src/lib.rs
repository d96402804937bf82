//! Skirmish - a terminal turn-based party battle.
//!
//! This module exposes the battle logic for testing and external use.

pub mod battle;
pub mod combat;
pub mod constants;
pub mod ui;

pub use battle::engine::BattleEngine;
pub use battle::events::{BattleMessage, Outcome};
pub use battle::interface::BattleInterface;
pub use combat::types::{AttackStyle, Combatant, Party};
pub use constants::{ACTION_ATTACK, ACTION_ESCAPE};
