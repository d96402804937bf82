// Combat constants
pub const ATTACK_VARIANCE: i32 = 3;
pub const HP_MIN: i32 = 0;
/// Lowest damage a roll can produce, even when attack power < variance.
pub const DAMAGE_FLOOR: i32 = 0;

// Action codes recognized by the battle engine.
// Part of the player-facing menu and the test contract; keep stable.
pub const ACTION_ATTACK: i32 = 1;
pub const ACTION_ESCAPE: i32 = 2;

// Presentation pacing
pub const MESSAGE_PACE_SECONDS: u64 = 1;

// Starting roster stats (hero party)
pub const PLAYER_HERO_HP: i32 = 30;
pub const PLAYER_HERO_ATTACK: i32 = 6;
pub const MAGE_NAME: &str = "Mage";
pub const MAGE_HP: i32 = 20;
pub const MAGE_ATTACK: i32 = 8;

// Starting roster stats (monster party)
pub const ORC_NAME: &str = "Orc";
pub const ORC_HP: i32 = 30;
pub const ORC_ATTACK: i32 = 8;
pub const GOBLIN_NAME: &str = "Goblin";
pub const GOBLIN_HP: i32 = 25;
pub const GOBLIN_ATTACK: i32 = 6;
