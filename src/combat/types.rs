use rand::Rng;

use crate::constants::*;

/// How a combatant's attacks are narrated. Purely cosmetic: damage math is
/// identical for both styles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttackStyle {
    Physical,
    Magical,
}

#[derive(Debug, Clone)]
pub struct Combatant {
    pub name: String,
    pub hp: i32,
    pub attack: i32,
    pub style: AttackStyle,
    pub is_player: bool,
    pub is_alive: bool,
}

impl Combatant {
    pub fn new(name: String, hp: i32, attack: i32, style: AttackStyle) -> Self {
        Self {
            name,
            hp,
            attack,
            style,
            is_player: false,
            is_alive: true,
        }
    }

    pub fn new_player(name: String, hp: i32, attack: i32, style: AttackStyle) -> Self {
        Self {
            is_player: true,
            ..Self::new(name, hp, attack, style)
        }
    }

    /// Rolls damage uniformly in `[attack - ATTACK_VARIANCE, attack + ATTACK_VARIANCE]`.
    /// The lower bound clamps at `DAMAGE_FLOOR` so low attack values still
    /// produce a valid non-negative range.
    pub fn compute_damage(&self, rng: &mut impl Rng) -> i32 {
        let low = (self.attack - ATTACK_VARIANCE).max(DAMAGE_FLOOR);
        let high = self.attack + ATTACK_VARIANCE;
        rng.gen_range(low..=high)
    }

    /// Subtracts `amount` from hp, clamping at `HP_MIN` and syncing the alive
    /// flag. A no-op on an already-dead combatant.
    pub fn apply_damage(&mut self, amount: i32) {
        self.hp -= amount;
        if self.hp <= HP_MIN {
            self.hp = HP_MIN;
            self.is_alive = false;
        }
    }
}

/// An ordered group of combatants fighting on one side. Membership is fixed
/// for the battle; the dead stay in place, flagged not-alive.
#[derive(Debug, Clone)]
pub struct Party {
    pub members: Vec<Combatant>,
}

impl Party {
    pub fn new(members: Vec<Combatant>) -> Self {
        Self { members }
    }

    pub fn is_defeated(&self) -> bool {
        self.members.iter().all(|c| !c.is_alive)
    }

    /// Picks a uniformly random living member, or None if the party is down.
    pub fn pick_living(&self, rng: &mut impl Rng) -> Option<usize> {
        let living: Vec<usize> = (0..self.members.len())
            .filter(|&i| self.members[i].is_alive)
            .collect();
        if living.is_empty() {
            None
        } else {
            Some(living[rng.gen_range(0..living.len())])
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn fighter(hp: i32, attack: i32) -> Combatant {
        Combatant::new("Test".to_string(), hp, attack, AttackStyle::Physical)
    }

    #[test]
    fn test_damage_stays_within_variance_range() {
        let c = fighter(30, 6);
        for seed in 0..200 {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let damage = c.compute_damage(&mut rng);
            assert!((3..=9).contains(&damage), "damage {} out of range", damage);
        }
    }

    #[test]
    fn test_damage_range_clamps_for_weak_attackers() {
        let c = fighter(30, 1);
        for seed in 0..200 {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let damage = c.compute_damage(&mut rng);
            assert!((0..=4).contains(&damage), "damage {} out of range", damage);
        }
    }

    #[test]
    fn test_apply_damage_clamps_hp_and_clears_alive() {
        let mut c = fighter(10, 6);
        c.apply_damage(4);
        assert_eq!(c.hp, 6);
        assert!(c.is_alive);

        c.apply_damage(100);
        assert_eq!(c.hp, 0);
        assert!(!c.is_alive);
    }

    #[test]
    fn test_apply_damage_is_idempotent_on_the_dead() {
        let mut c = fighter(5, 6);
        c.apply_damage(5);
        assert_eq!(c.hp, 0);
        assert!(!c.is_alive);

        c.apply_damage(7);
        assert_eq!(c.hp, 0);
        assert!(!c.is_alive);
    }

    #[test]
    fn test_exact_lethal_damage_kills() {
        let mut c = fighter(8, 6);
        c.apply_damage(8);
        assert_eq!(c.hp, 0);
        assert!(!c.is_alive);
    }

    #[test]
    fn test_pick_living_skips_the_dead() {
        let mut party = Party::new(vec![fighter(10, 6), fighter(10, 6), fighter(10, 6)]);
        party.members[0].apply_damage(10);
        party.members[2].apply_damage(10);

        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for _ in 0..50 {
            assert_eq!(party.pick_living(&mut rng), Some(1));
        }
    }

    #[test]
    fn test_pick_living_returns_none_when_defeated() {
        let mut party = Party::new(vec![fighter(10, 6)]);
        party.members[0].apply_damage(10);
        assert!(party.is_defeated());

        let mut rng = ChaCha8Rng::seed_from_u64(7);
        assert_eq!(party.pick_living(&mut rng), None);
    }
}
