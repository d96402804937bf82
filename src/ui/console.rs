//! Line-oriented console implementation of the battle interface.

use std::io::{self, BufRead, Write};
use std::thread;
use std::time::Duration;

use crate::battle::events::BattleMessage;
use crate::battle::interface::BattleInterface;
use crate::combat::types::Combatant;
use crate::constants::MESSAGE_PACE_SECONDS;
use crate::ui::messages;

pub struct ConsoleInterface;

impl ConsoleInterface {
    pub fn new() -> Self {
        Self
    }

    /// Reads one trimmed line from stdin. A closed or failing stdin reads as
    /// an empty line, which the callers treat like any other input.
    fn read_line(&self) -> String {
        let mut line = String::new();
        if io::stdin().lock().read_line(&mut line).is_err() {
            return String::new();
        }
        line.trim().to_string()
    }
}

impl Default for ConsoleInterface {
    fn default() -> Self {
        Self::new()
    }
}

impl BattleInterface for ConsoleInterface {
    fn request_hero_name(&mut self) -> String {
        self.read_line()
    }

    fn request_action(&mut self, _hero: &Combatant) -> i32 {
        // Anything non-numeric maps to 0, an unrecognized code the engine
        // re-prompts on.
        self.read_line().parse().unwrap_or(0)
    }

    fn notify(&mut self, message: BattleMessage) {
        println!("{}", messages::render(&message));
        let _ = io::stdout().flush();
        if message.pace() {
            thread::sleep(Duration::from_secs(MESSAGE_PACE_SECONDS));
        }
    }
}
