//! The battle state machine.
//!
//! `BattleEngine` owns both parties, the round counter, the escape flag and
//! the RNG. Each round is: round banner + status lines, hero actions, an
//! end check, monster actions, another end check. The loop exits into a
//! single judgement step that reports the outcome.
//!
//! The engine owns the only source of randomness (damage rolls and target
//! picks), so tests can drive it with a seeded or scripted RNG.

use rand::Rng;

use crate::battle::events::{BattleMessage, Outcome};
use crate::battle::interface::BattleInterface;
use crate::battle::roster::{create_heroes, create_monsters};
use crate::combat::types::{Combatant, Party};
use crate::constants::{ACTION_ATTACK, ACTION_ESCAPE};

pub struct BattleEngine<R: Rng> {
    pub heroes: Party,
    pub monsters: Party,
    pub round: u32,
    pub escaped: bool,
    rng: R,
}

impl<R: Rng> BattleEngine<R> {
    /// Runs setup: prompts for the lead hero's name and builds the fixed
    /// starting rosters.
    pub fn setup(io: &mut impl BattleInterface, rng: R) -> Self {
        io.notify(BattleMessage::NamePrompt);
        let name = io.request_hero_name();
        Self::with_parties(create_heroes(name), create_monsters(), rng)
    }

    /// Builds an engine over explicit parties. Used by tests to start from
    /// arbitrary battle states.
    pub fn with_parties(heroes: Party, monsters: Party, rng: R) -> Self {
        Self {
            heroes,
            monsters,
            round: 0,
            escaped: false,
            rng,
        }
    }

    /// Drives the battle to its end and reports the outcome.
    pub fn run(&mut self, io: &mut impl BattleInterface) -> Outcome {
        io.notify(BattleMessage::BattleStart);
        loop {
            self.round += 1;
            io.notify(BattleMessage::RoundStart { round: self.round });
            self.emit_status(io);

            self.heroes_turn(io);
            if self.escaped || self.either_destroyed() {
                break;
            }

            self.monsters_turn(io);
            if self.either_destroyed() {
                break;
            }
        }

        let outcome = self.judge();
        io.notify(match outcome {
            Outcome::Victory => BattleMessage::Victory,
            Outcome::Defeat | Outcome::Escaped => BattleMessage::GameOver,
        });
        outcome
    }

    fn emit_status(&self, io: &mut impl BattleInterface) {
        for c in self.heroes.members.iter().chain(self.monsters.members.iter()) {
            io.notify(BattleMessage::Status {
                name: c.name.clone(),
                hp: c.hp,
                attack: c.attack,
                alive: c.is_alive,
            });
        }
    }

    /// Each living hero acts in party order. The player picks attack or
    /// escape (re-prompted until the code is recognized); AI heroes always
    /// attack. Escape aborts the rest of the party's turn.
    fn heroes_turn(&mut self, io: &mut impl BattleInterface) {
        for i in 0..self.heroes.members.len() {
            if !self.heroes.members[i].is_alive {
                continue;
            }

            let choice = loop {
                let code = if self.heroes.members[i].is_player {
                    io.notify(BattleMessage::ActionMenu {
                        hero: self.heroes.members[i].name.clone(),
                    });
                    io.request_action(&self.heroes.members[i])
                } else {
                    ACTION_ATTACK
                };
                match code {
                    ACTION_ATTACK | ACTION_ESCAPE => break code,
                    _ => io.notify(BattleMessage::InvalidChoice),
                }
            };

            if choice == ACTION_ESCAPE {
                self.escaped = true;
                io.notify(BattleMessage::Escape {
                    name: self.heroes.members[i].name.clone(),
                });
                return;
            }

            // Target picked at attack time, so a monster downed earlier this
            // round is never selectable. No target left means the end check
            // will close the battle.
            if let Some(t) = self.monsters.pick_living(&mut self.rng) {
                resolve_attack(
                    &self.heroes.members[i],
                    &mut self.monsters.members[t],
                    &mut self.rng,
                    io,
                );
            }
        }
    }

    /// Each living monster attacks a random living hero. Monsters never
    /// escape.
    fn monsters_turn(&mut self, io: &mut impl BattleInterface) {
        for i in 0..self.monsters.members.len() {
            if !self.monsters.members[i].is_alive {
                continue;
            }
            if let Some(t) = self.heroes.pick_living(&mut self.rng) {
                resolve_attack(
                    &self.monsters.members[i],
                    &mut self.heroes.members[t],
                    &mut self.rng,
                    io,
                );
            }
        }
    }

    fn either_destroyed(&self) -> bool {
        self.heroes.is_defeated() || self.monsters.is_defeated()
    }

    /// Escape always reads as game-over. Otherwise victory hinges on the
    /// monster party being destroyed, with game-over as the fallback.
    fn judge(&self) -> Outcome {
        if self.escaped {
            Outcome::Escaped
        } else if self.monsters.is_defeated() {
            Outcome::Victory
        } else {
            Outcome::Defeat
        }
    }
}

/// Shared attack resolution: announce, roll, apply, report, and call the
/// death if the target dropped.
fn resolve_attack(
    attacker: &Combatant,
    target: &mut Combatant,
    rng: &mut impl Rng,
    io: &mut impl BattleInterface,
) {
    io.notify(BattleMessage::Attack {
        attacker: attacker.name.clone(),
        style: attacker.style,
    });
    let damage = attacker.compute_damage(rng);
    target.apply_damage(damage);
    io.notify(BattleMessage::Damage {
        target: target.name.clone(),
        amount: damage,
    });
    if !target.is_alive {
        io.notify(BattleMessage::Death {
            target: target.name.clone(),
        });
    }
}
