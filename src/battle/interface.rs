//! Boundary between the battle engine and its front-end.

use crate::battle::events::BattleMessage;
use crate::combat::types::Combatant;

/// Front-end contract: supplies player input and consumes notifications.
///
/// Implemented by the console front-end in production and by scripted
/// doubles in tests. `request_action` may return any integer; the engine
/// treats anything other than the recognized action codes as invalid and
/// re-prompts.
pub trait BattleInterface {
    /// Asks for the lead hero's name, once, during setup.
    fn request_hero_name(&mut self) -> String;

    /// Asks the player to pick an action for `hero`.
    fn request_action(&mut self, hero: &Combatant) -> i32;

    /// Delivers a notification. `message.pace()` tells the front-end
    /// whether to pause after showing it.
    fn notify(&mut self, message: BattleMessage);
}
