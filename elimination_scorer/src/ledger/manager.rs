//! The elimination ledger: rank assignment, renumbering and roster changes.

use super::{
    errors::{LedgerError, LedgerResult, PlayerStateReason},
    models::{PlayerRecord, Points, Rank, Snapshot, bonus_points},
};
use log::{debug, info};

/// Direction of a range shift
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Shift {
    /// rank += 1, opening a gap below
    Up,
    /// rank -= 1, closing a gap below
    Down,
}

/// Elimination-order ledger.
///
/// Owns every checked-in player and keeps the ranks of eliminated players
/// contiguous (`1..=E`) with points and bonus derived from rank. Players are
/// stored in check-in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EliminationLedger {
    players: Vec<PlayerRecord>,
    total_players: u32,
    next_elimination_rank: Rank,
}

impl Default for EliminationLedger {
    fn default() -> Self {
        Self::new()
    }
}

impl EliminationLedger {
    /// Create an empty ledger with no tournament running
    pub fn new() -> Self {
        Self {
            players: Vec::new(),
            total_players: 0,
            next_elimination_rank: 1,
        }
    }

    /// Rebuild a ledger from persisted state, exactly as stored
    pub fn from_snapshot(snapshot: Snapshot) -> Self {
        Self {
            players: snapshot.players,
            total_players: snapshot.total_players,
            next_elimination_rank: snapshot.next_elimination_rank,
        }
    }

    /// Capture the current state for persistence
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            players: self.players.clone(),
            total_players: self.total_players,
            next_elimination_rank: self.next_elimination_rank,
        }
    }

    /// All players in check-in order
    pub fn players(&self) -> &[PlayerRecord] {
        &self.players
    }

    /// Look up a player ignoring case
    pub fn player(&self, name: &str) -> Option<&PlayerRecord> {
        self.players.iter().find(|p| p.is_named(name))
    }

    /// Eliminated players in check-in order
    pub fn eliminated(&self) -> impl Iterator<Item = &PlayerRecord> {
        self.players.iter().filter(|p| p.eliminated)
    }

    /// Players still in the tournament, in check-in order
    pub fn active(&self) -> impl Iterator<Item = &PlayerRecord> {
        self.players.iter().filter(|p| !p.eliminated)
    }

    pub fn total_players(&self) -> u32 {
        self.total_players
    }

    pub fn next_elimination_rank(&self) -> Rank {
        self.next_elimination_rank
    }

    /// A tournament is running once it has a non-zero field size
    pub fn is_active(&self) -> bool {
        self.total_players > 0
    }

    /// Players not yet knocked out according to the rank counter
    pub fn players_remaining(&self) -> u32 {
        self.total_players
            .saturating_sub(self.next_elimination_rank.saturating_sub(1))
    }

    /// Add a player to the roster.
    ///
    /// While a tournament is running this grows the field, which moves every
    /// eliminated player's bonus tier.
    pub fn check_in(&mut self, name: &str) -> LedgerResult<()> {
        let name = name.trim();
        if name.is_empty() {
            return Err(LedgerError::EmptyName);
        }
        if self.player(name).is_some() {
            return Err(LedgerError::DuplicatePlayer(name.to_string()));
        }

        self.players.push(PlayerRecord::new(name));

        if self.is_active() {
            self.total_players = self.total_players.saturating_add(1);
            self.recompute_all_bonus();
            debug!(
                "{} joined mid-tournament, field is now {}",
                name, self.total_players
            );
        }

        Ok(())
    }

    /// Remove a player who has not been eliminated.
    ///
    /// An eliminated player must have their rank cleared first. While a
    /// tournament is running this shrinks the field and recomputes bonuses.
    pub fn remove_player(&mut self, name: &str) -> LedgerResult<PlayerRecord> {
        let idx = self.index_of(name)?;
        if self.players[idx].eliminated {
            return Err(LedgerError::InvalidPlayerState {
                name: self.players[idx].name.clone(),
                reason: PlayerStateReason::AlreadyEliminated,
            });
        }

        let removed = self.players.remove(idx);

        if self.is_active() {
            self.total_players -= 1;
            self.recompute_all_bonus();
            debug!(
                "{} left mid-tournament, field is now {}",
                removed.name, self.total_players
            );
        }

        Ok(removed)
    }

    /// Begin a tournament with everyone currently checked in.
    ///
    /// Any previous elimination data is discarded.
    pub fn start_tournament(&mut self) -> LedgerResult<()> {
        if self.players.is_empty() {
            return Err(LedgerError::NoPlayers);
        }

        self.total_players = self.players.len() as u32;
        self.next_elimination_rank = 1;
        for player in &mut self.players {
            player.clear_elimination();
        }

        info!("Tournament started with {} players", self.total_players);
        Ok(())
    }

    /// Drop every player and end the tournament
    pub fn reset(&mut self) {
        *self = Self::new();
        info!("Ledger reset");
    }

    /// Eliminate a player at the next free rank
    pub fn eliminate_next(&mut self, name: &str) -> LedgerResult<Rank> {
        if !self.is_active() {
            return Err(LedgerError::NotStarted);
        }
        let idx = self.active_index_of(name)?;
        let rank = self.next_elimination_rank;
        self.check_rank(rank)?;

        self.players[idx].assign_rank(rank, self.total_players);
        self.next_elimination_rank = rank.saturating_add(1);

        debug!("{} eliminated at rank {}", self.players[idx].name, rank);
        Ok(rank)
    }

    /// Backfill a missed elimination at `position`.
    ///
    /// Everyone at or after `position` moves up one rank to make room.
    pub fn eliminate_at_rank(&mut self, name: &str, position: Rank) -> LedgerResult<()> {
        if !self.is_active() {
            return Err(LedgerError::NotStarted);
        }
        let idx = self.active_index_of(name)?;
        self.check_rank(position)?;

        self.shift_ranks(|rank| rank >= position, Shift::Up, None);
        self.players[idx].assign_rank(position, self.total_players);
        self.refresh_next_rank();

        debug!(
            "{} inserted at rank {}, next rank {}",
            self.players[idx].name, position, self.next_elimination_rank
        );
        Ok(())
    }

    /// Move an eliminated player to `new_position`, renumbering the players
    /// between the old and new slot.
    ///
    /// A player marked eliminated without a usable rank (only possible in a
    /// damaged snapshot) is placed as if backfilled at `new_position`.
    pub fn move_rank(&mut self, name: &str, new_position: Rank) -> LedgerResult<()> {
        if !self.is_active() {
            return Err(LedgerError::NotStarted);
        }
        let idx = self.eliminated_index_of(name)?;
        self.check_rank(new_position)?;

        let old_position = self.players[idx].rank().filter(|rank| *rank > 0);
        match old_position {
            Some(old) if new_position < old => self.shift_ranks(
                |rank| rank >= new_position && rank < old,
                Shift::Up,
                Some(idx),
            ),
            Some(old) if new_position > old => self.shift_ranks(
                |rank| rank > old && rank <= new_position,
                Shift::Down,
                Some(idx),
            ),
            Some(_) => {}
            None => self.shift_ranks(|rank| rank >= new_position, Shift::Up, Some(idx)),
        }

        self.players[idx].assign_rank(new_position, self.total_players);
        self.refresh_next_rank();

        debug!(
            "{} moved from rank {:?} to {}",
            self.players[idx].name, old_position, new_position
        );
        Ok(())
    }

    /// Undo a player's elimination, closing the gap they leave behind.
    ///
    /// Returns the rank the player held. A player without a usable rank left
    /// no gap, so only their record is reset.
    pub fn clear_rank(&mut self, name: &str) -> LedgerResult<Option<Rank>> {
        let idx = self.eliminated_index_of(name)?;
        let removed = self.players[idx].rank().filter(|rank| *rank > 0);

        if let Some(removed) = removed {
            self.shift_ranks(|rank| rank > removed, Shift::Down, Some(idx));
        }
        self.players[idx].clear_elimination();
        self.refresh_next_rank();

        debug!("{} cleared from rank {:?}", self.players[idx].name, removed);
        Ok(removed)
    }

    /// Recompute the bonus of every eliminated player against the current
    /// field size
    pub fn recompute_all_bonus(&mut self) {
        let total = self.total_players;
        for player in self.players.iter_mut().filter(|p| p.eliminated) {
            player.bonus_points = player
                .elimination_rank
                .map_or(0, |rank| bonus_points(rank, total));
        }
    }

    /// Sum of every eliminated player's total points
    pub fn points_awarded(&self) -> Points {
        self.eliminated()
            .map(PlayerRecord::total_points)
            .fold(0, Points::saturating_add)
    }

    /// Shift every eliminated player whose rank matches `applies` by one,
    /// keeping points and bonus in step. `skip` excludes the player being
    /// moved.
    fn shift_ranks(&mut self, applies: impl Fn(Rank) -> bool, shift: Shift, skip: Option<usize>) {
        let total = self.total_players;
        let mut shifted_count = 0;
        for (idx, player) in self.players.iter_mut().enumerate() {
            if Some(idx) == skip {
                continue;
            }
            let Some(rank) = player.rank() else {
                continue;
            };
            if !applies(rank) {
                continue;
            }
            let shifted = match shift {
                Shift::Up => rank.saturating_add(1),
                Shift::Down => rank.saturating_sub(1),
            };
            player.assign_rank(shifted, total);
            shifted_count += 1;
        }
        debug!("Shifted {} ranks {:?}", shifted_count, shift);
    }

    fn refresh_next_rank(&mut self) {
        let highest = self
            .eliminated()
            .filter_map(PlayerRecord::rank)
            .max()
            .unwrap_or(0);
        self.next_elimination_rank = highest.saturating_add(1);
    }

    fn check_rank(&self, rank: Rank) -> LedgerResult<()> {
        if rank == 0 || rank > self.total_players {
            return Err(LedgerError::InvalidRank {
                rank,
                max: self.total_players,
            });
        }
        Ok(())
    }

    fn index_of(&self, name: &str) -> LedgerResult<usize> {
        self.players
            .iter()
            .position(|p| p.is_named(name))
            .ok_or_else(|| LedgerError::not_found(name))
    }

    fn active_index_of(&self, name: &str) -> LedgerResult<usize> {
        let idx = self.index_of(name)?;
        if self.players[idx].eliminated {
            return Err(LedgerError::InvalidPlayerState {
                name: self.players[idx].name.clone(),
                reason: PlayerStateReason::AlreadyEliminated,
            });
        }
        Ok(idx)
    }

    fn eliminated_index_of(&self, name: &str) -> LedgerResult<usize> {
        let idx = self.index_of(name)?;
        if !self.players[idx].eliminated {
            return Err(LedgerError::InvalidPlayerState {
                name: self.players[idx].name.clone(),
                reason: PlayerStateReason::NotEliminated,
            });
        }
        Ok(idx)
    }
}
