use skirmish::ui::ConsoleInterface;
use skirmish::BattleEngine;

fn main() {
    let mut io = ConsoleInterface::new();
    let mut engine = BattleEngine::setup(&mut io, rand::thread_rng());
    engine.run(&mut io);
}
