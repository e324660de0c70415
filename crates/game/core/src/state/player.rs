use crate::config::GameConfig;

use super::{PlayerId, Timestamp};

/// A registered player.
///
/// Created on first contact and never deleted.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub credits: u32,
    /// Spaceship level. Not advanced by any default flow.
    pub level: u32,
    pub created_at: Timestamp,
    /// Last time the player issued a command; drives the active roster.
    pub last_active: Timestamp,
}

impl Player {
    pub fn new(id: PlayerId, name: impl Into<String>, config: &GameConfig, now: Timestamp) -> Self {
        Self {
            id,
            name: name.into(),
            credits: config.starting.credits,
            level: 1,
            created_at: now,
            last_active: now,
        }
    }

    pub fn touch(&mut self, now: Timestamp) {
        self.last_active = self.last_active.max(now);
    }

    /// Remove `amount` credits, refusing when the balance is too small.
    pub fn debit(&mut self, amount: u32) -> crate::GameResult<u32> {
        if self.credits < amount {
            return Err(crate::GameError::InsufficientResource {
                resource: crate::Resource::Credits,
                needed: amount,
                available: self.credits,
            });
        }
        self.credits -= amount;
        Ok(self.credits)
    }

    pub fn credit(&mut self, amount: u32) -> u32 {
        self.credits = self.credits.saturating_add(amount);
        self.credits
    }
}
