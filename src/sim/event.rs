/// Events emitted during a simulation step.
/// The driver and renderer consume these for messages and pauses.

use crate::domain::entity::Pos;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum GameEvent {
    /// Player tried to walk off the board and stayed put.
    PlayerBlocked,
    StarCollected { pos: Pos },
    ReachedGoal,
    /// Player started the turn on an enemy's cell.
    BumpedEnemy,
    /// An enemy moved onto (or stayed on) the player's cell.
    EnemyContact,
    StarRespawned { pos: Pos },
    RespawnSkipped,
    AllStarsCollected,
}
