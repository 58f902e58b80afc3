use crate::player::Player;
use log::{debug, warn};
use thiserror::Error;

/// Errors from guild roster operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GuildError {
    #[error("No player named '{0}' in the guild")]
    PlayerNotFound(String),
}

/// A roster of players looked up by name
///
/// Lookups return the first player with a matching name.
#[derive(Debug, Clone, Default)]
pub struct Guild {
    name: String,
    players: Vec<Player>,
}

impl Guild {
    pub fn new(name: impl Into<String>) -> Self {
        Guild {
            name: name.into(),
            players: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    /// Adds a deep copy of `player` to the roster
    pub fn enlist_player(&mut self, player: &Player) {
        debug!("Guild '{}' enlisting '{}'", self.name, player.name());
        self.players.push(player.clone());
    }

    pub fn find_player(&self, name: &str) -> Option<&Player> {
        self.players.iter().find(|player| player.name() == name)
    }

    pub fn find_player_mut(&mut self, name: &str) -> Option<&mut Player> {
        self.players.iter_mut().find(|player| player.name() == name)
    }

    /// Puts a deep copy of the named player into `other`
    ///
    /// This guild's roster is left as it was.
    pub fn copy_player_to(&self, name: &str, other: &mut Guild) -> Result<(), GuildError> {
        let player = self.find_player(name).ok_or_else(|| self.not_found(name))?;
        debug!("Copying '{}' from '{}' to '{}'", name, self.name, other.name);
        other.players.push(player.clone());
        Ok(())
    }

    /// Moves the named player into `other`
    ///
    /// The player leaves this roster. Its inventory changes hands without
    /// being copied.
    pub fn move_player_to(&mut self, name: &str, other: &mut Guild) -> Result<(), GuildError> {
        let index = self.players
            .iter()
            .position(|player| player.name() == name)
            .ok_or_else(|| self.not_found(name))?;
        debug!("Moving '{}' from '{}' to '{}'", name, self.name, other.name);
        let player = self.players.remove(index);
        other.players.push(player);
        Ok(())
    }

    fn not_found(&self, name: &str) -> GuildError {
        warn!("Guild '{}' has no player named '{}'", self.name, name);
        GuildError::PlayerNotFound(name.to_string())
    }
}
