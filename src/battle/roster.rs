//! Fixed starting rosters for both parties.

use crate::combat::types::{AttackStyle, Combatant, Party};
use crate::constants::*;

/// Hero party: the player-controlled lead plus an AI mage.
pub fn create_heroes(player_name: String) -> Party {
    Party::new(vec![
        Combatant::new_player(
            player_name,
            PLAYER_HERO_HP,
            PLAYER_HERO_ATTACK,
            AttackStyle::Physical,
        ),
        Combatant::new(
            MAGE_NAME.to_string(),
            MAGE_HP,
            MAGE_ATTACK,
            AttackStyle::Magical,
        ),
    ])
}

/// Monster party: two AI physical attackers.
pub fn create_monsters() -> Party {
    Party::new(vec![
        Combatant::new(
            ORC_NAME.to_string(),
            ORC_HP,
            ORC_ATTACK,
            AttackStyle::Physical,
        ),
        Combatant::new(
            GOBLIN_NAME.to_string(),
            GOBLIN_HP,
            GOBLIN_ATTACK,
            AttackStyle::Physical,
        ),
    ])
}
