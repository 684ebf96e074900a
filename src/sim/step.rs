/// The step function: advances the world by one turn.
///
/// Processing order:
///   1. Player movement (off-board moves are dropped)
///   2. Star pickup
///   3. Goal check (stops the turn)
///   4. Enemy wander
///   5. Enemy contact check (stops the turn)
///   6. Star respawn
///   7. All-stars notice
///   8. Turn counter
///
/// `check_overlap` runs before input is read each turn and catches
/// spawn collisions.

use log::debug;

use crate::config::GameConfig;
use crate::domain::ai;
use crate::domain::entity::{MoveDir, Pos};
use crate::domain::placement;
use crate::domain::rng::RandomSource;
use super::event::GameEvent;
use super::world::{Phase, WorldState};

// ══════════════════════════════════════════════════════════════
// Entry points
// ══════════════════════════════════════════════════════════════

/// Start-of-turn check: is the player already standing on the goal or an
/// enemy? Ends the game if so.
pub fn check_overlap(world: &mut WorldState) -> Option<GameEvent> {
    if world.phase != Phase::Running { return None; }
    if world.player == world.goal {
        world.phase = Phase::Won;
        return Some(GameEvent::ReachedGoal);
    }
    if world.enemy_at(world.player) {
        world.phase = Phase::Lost;
        return Some(GameEvent::BumpedEnemy);
    }
    None
}

pub fn step(
    world: &mut WorldState,
    dir: MoveDir,
    rng: &mut dyn RandomSource,
    config: &GameConfig,
) -> Vec<GameEvent> {
    if world.phase != Phase::Running { return vec![]; }

    let mut events: Vec<GameEvent> = Vec::new();

    resolve_player_movement(world, dir, &mut events);
    resolve_star_pickup(world, &mut events);
    if resolve_goal(world, &mut events) { return events; }
    resolve_enemy_movement(world, rng);
    if resolve_enemy_collision(world, &mut events) { return events; }
    resolve_respawn(world, rng, config, &mut events);
    if world.stars.is_empty() {
        events.push(GameEvent::AllStarsCollected);
    }
    world.turns += 1;

    debug!("turn {} done: {:?}", world.turns, events);
    events
}

// ══════════════════════════════════════════════════════════════
// Player
// ══════════════════════════════════════════════════════════════

fn resolve_player_movement(world: &mut WorldState, dir: MoveDir, events: &mut Vec<GameEvent>) {
    let target = world.player.step(dir);
    if world.in_bounds(target) {
        world.player = target;
    } else {
        events.push(GameEvent::PlayerBlocked);
    }
}

fn resolve_star_pickup(world: &mut WorldState, events: &mut Vec<GameEvent>) {
    // Stars are distinct, so at most one matches.
    if let Some(i) = world.stars.iter().position(|&s| s == world.player) {
        let pos = world.stars.remove(i);
        world.score += 1;
        events.push(GameEvent::StarCollected { pos });
    }
}

fn resolve_goal(world: &mut WorldState, events: &mut Vec<GameEvent>) -> bool {
    if world.player != world.goal { return false; }
    world.phase = Phase::Won;
    events.push(GameEvent::ReachedGoal);
    true
}

// ══════════════════════════════════════════════════════════════
// Enemies
// ══════════════════════════════════════════════════════════════

fn resolve_enemy_movement(world: &mut WorldState, rng: &mut dyn RandomSource) {
    let (board, goal) = (world.board, world.goal);
    for e in world.enemies.iter_mut() {
        *e = ai::wander(rng, board, *e, goal);
    }
}

fn resolve_enemy_collision(world: &mut WorldState, events: &mut Vec<GameEvent>) -> bool {
    if !world.enemy_at(world.player) { return false; }
    world.phase = Phase::Lost;
    events.push(GameEvent::EnemyContact);
    true
}

// ══════════════════════════════════════════════════════════════
// Respawn
// ══════════════════════════════════════════════════════════════

/// Every `interval_turns` turns, counting the opening turn, top the stars
/// up by one if below target.
fn resolve_respawn(
    world: &mut WorldState,
    rng: &mut dyn RandomSource,
    config: &GameConfig,
    events: &mut Vec<GameEvent>,
) {
    let interval = config.respawn.interval_turns;
    if world.turns % interval != 0 { return; }
    if world.stars.len() >= config.entities.stars { return; }

    let mut excluded: Vec<Pos> = Vec::with_capacity(world.stars.len() + 2);
    excluded.push(world.player);
    excluded.push(world.goal);
    excluded.extend_from_slice(&world.stars);

    match placement::place_respawn(rng, world.board, &excluded, config.respawn.max_tries) {
        Some(pos) => {
            world.stars.push(pos);
            events.push(GameEvent::StarRespawned { pos });
        }
        None => {
            debug!("respawn gave up after {} tries", config.respawn.max_tries);
            events.push(GameEvent::RespawnSkipped);
        }
    }
}
