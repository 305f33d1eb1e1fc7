use log::{debug, info};

use super::{Grid, Player};
use crate::error::MoveError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundOutcome {
    /// Index into [`Round::players`].
    Winner(usize),
    Draw,
}

/// What a successful move led to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnOutcome {
    pub column: usize,
    pub row: usize,
    pub outcome: Option<RoundOutcome>,
}

/// One round of play between two players on a fresh grid.
///
/// The first player always opens the round. Turns alternate after every
/// successful move; a refused move leaves the turn with the same player.
#[derive(Debug, Clone)]
pub struct Round {
    grid: Grid,
    players: [Player; 2],
    current: usize,
    outcome: Option<RoundOutcome>,
}

impl Round {
    pub fn new(players: [Player; 2]) -> Self {
        Round {
            grid: Grid::new(),
            players,
            current: 0,
            outcome: None,
        }
    }

    /// Start a fresh round with the same players.
    pub fn restart(&self) -> Self {
        Self::new(self.players.clone())
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn players(&self) -> &[Player; 2] {
        &self.players
    }

    /// Player whose turn it is. Once the round is over this stays on the
    /// player who made the last move.
    pub fn current_player(&self) -> &Player {
        &self.players[self.current]
    }

    pub fn outcome(&self) -> Option<RoundOutcome> {
        self.outcome
    }

    pub fn is_over(&self) -> bool {
        self.outcome.is_some()
    }

    pub fn winner(&self) -> Option<&Player> {
        match self.outcome {
            Some(RoundOutcome::Winner(index)) => Some(&self.players[index]),
            _ => None,
        }
    }

    /// Drop the current player's disc into `column` (0-based).
    pub fn play(&mut self, column: usize) -> Result<TurnOutcome, MoveError> {
        if self.is_over() {
            return Err(MoveError::RoundOver);
        }

        let mover = &self.players[self.current];
        let marker = mover.marker();
        let row = self
            .grid
            .drop_disc(column, marker)?
            .ok_or(MoveError::ColumnFull(column))?;

        debug!("{} dropped '{}' into column {} (row {})", mover.name(), marker, column, row);

        // Only the mover can have completed a line with this disc.
        if self.grid.marker_wins(marker) {
            info!("round won by {}", mover.name());
            self.outcome = Some(RoundOutcome::Winner(self.current));
        } else if self.grid.is_full() {
            info!("round drawn after {} discs", self.grid.disc_count());
            self.outcome = Some(RoundOutcome::Draw);
        } else {
            self.current = 1 - self.current;
        }

        Ok(TurnOutcome {
            column,
            row,
            outcome: self.outcome,
        })
    }
}
