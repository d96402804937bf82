//! Renders battle notifications as colored terminal text.
//!
//! The engine hands over structured `BattleMessage` values; everything about
//! wording and color lives here.

use crossterm::style::Stylize;

use crate::battle::events::BattleMessage;
use crate::combat::types::AttackStyle;
use crate::constants::{ACTION_ATTACK, ACTION_ESCAPE};

pub fn render(message: &BattleMessage) -> String {
    match message {
        BattleMessage::NamePrompt => "Enter the hero's name:".to_string(),
        BattleMessage::BattleStart => {
            format!("\n{}", "*** A band of monsters appears! ***".magenta())
        }
        BattleMessage::RoundStart { round } => {
            format!("\n{}", format!("=== Round {} ===", round).cyan())
        }
        BattleMessage::Status {
            name,
            hp,
            attack,
            alive,
        } => {
            let mark = if *alive {
                "*".to_string()
            } else {
                "x".red().to_string()
            };
            format!("{} [{}]  HP: {}  Attack: {}", mark, name, hp, attack)
        }
        BattleMessage::ActionMenu { hero } => format!(
            "\n{}'s turn.\nChoose an action:\n{}",
            hero,
            format!("[{}] Attack\n[{}] Escape", ACTION_ATTACK, ACTION_ESCAPE).yellow()
        ),
        BattleMessage::InvalidChoice => "Invalid choice. Pick again.".blue().to_string(),
        BattleMessage::Attack { attacker, style } => match style {
            AttackStyle::Physical => format!("{} attacks!", attacker),
            AttackStyle::Magical => format!("{} casts a spell!", attacker),
        },
        BattleMessage::Damage { target, amount } => {
            format!("-> {} takes {} damage!", target, amount)
        }
        BattleMessage::Death { target } => {
            format!("-> {} has fallen!", target).yellow().to_string()
        }
        BattleMessage::Escape { name } => {
            format!("{} fled the battle!\n", name).yellow().to_string()
        }
        BattleMessage::Victory => "*** The hero party is victorious! ***"
            .green()
            .to_string(),
        BattleMessage::GameOver => "*** GAME OVER ***".red().to_string(),
    }
}
