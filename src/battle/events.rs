//! Structured notifications emitted by the battle engine.
//!
//! The engine never formats or prints text. It emits `BattleMessage` values
//! through the interface layer, which decides how to render and pace them.

use crate::combat::types::AttackStyle;

/// Everything the engine wants the player to see, one variant per line of
/// narration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BattleMessage {
    NamePrompt,
    BattleStart,
    RoundStart { round: u32 },
    Status {
        name: String,
        hp: i32,
        attack: i32,
        alive: bool,
    },
    ActionMenu { hero: String },
    InvalidChoice,
    Attack {
        attacker: String,
        style: AttackStyle,
    },
    Damage { target: String, amount: i32 },
    Death { target: String },
    Escape { name: String },
    Victory,
    GameOver,
}

impl BattleMessage {
    /// Whether the front-end should pause after showing this message.
    /// Combat narration is paced; prompts and banners are not.
    pub fn pace(&self) -> bool {
        matches!(
            self,
            BattleMessage::Attack { .. }
                | BattleMessage::Damage { .. }
                | BattleMessage::Death { .. }
                | BattleMessage::Escape { .. }
        )
    }
}

/// Terminal result of a battle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The monster party was destroyed.
    Victory,
    /// The hero party was destroyed.
    Defeat,
    /// The player fled. Always reported as game-over, whatever the party
    /// states look like.
    Escaped,
}
