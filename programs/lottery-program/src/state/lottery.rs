use anchor_lang::prelude::*;

use crate::{
    constants::{DEFAULT_MINIMUM_STAKE, MAX_MINIMUM_STAKE, MAX_PLAYERS_PER_PAGE},
    error::LotteryError,
    randomness::{pick_index, EntropySource},
};

// Space calculation for an empty lottery:
// 8 (discriminator) +
// 32 (manager) +
// 8 (minimum_stake) +
// 8 (pot) +
// 8 (round) +
// 33 (last_winner: Option<Pubkey>) +
// 8 (last_prize) +
// 1 (bump) +
// 1 (vault_bump) +
// 4 (length of players)
// Every entrant slot adds 32 bytes; `enter` grows the account as needed.
pub const LOTTERY_ACCOUNT_SIZE: usize = 8 + 32 + 8 + 8 + 8 + 33 + 8 + 1 + 1 + 4;

#[account]
pub struct Lottery {
    /// The only key allowed to trigger a draw. Fixed at creation.
    pub manager: Pubkey,
    /// Smallest stake `enter` accepts, in lamports.
    pub minimum_stake: u64,
    /// Sum of all stakes accepted since the last draw.
    pub pot: u64,
    /// Number of completed draws.
    pub round: u64,
    pub last_winner: Option<Pubkey>,
    pub last_prize: u64,
    pub bump: u8,
    pub vault_bump: u8,
    /// One slot per accepted stake, in entry order. A key may hold several.
    pub players: Vec<Pubkey>,
}

/// Result of a settled draw.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Draw {
    pub winner: Pubkey,
    pub winning_index: u64,
    pub prize: u64,
    pub round: u64,
}

impl Lottery {
    /// Binds the ledger to its manager and resets every counter.
    ///
    /// # Errors
    /// - `InvalidMinimumStake` if an explicit minimum is zero or above 100 SOL
    pub fn open(
        &mut self,
        manager: Pubkey,
        minimum_stake: Option<u64>,
        bump: u8,
        vault_bump: u8,
    ) -> Result<()> {
        let minimum_stake = minimum_stake.unwrap_or(DEFAULT_MINIMUM_STAKE);
        require!(
            minimum_stake > 0 && minimum_stake <= MAX_MINIMUM_STAKE,
            LotteryError::InvalidMinimumStake
        );

        self.manager = manager;
        self.minimum_stake = minimum_stake;
        self.pot = 0;
        self.round = 0;
        self.last_winner = None;
        self.last_prize = 0;
        self.bump = bump;
        self.vault_bump = vault_bump;
        self.players = Vec::new();

        Ok(())
    }

    /// Account size needed to hold `player_count` entrant slots.
    pub fn space_for(player_count: usize) -> usize {
        LOTTERY_ACCOUNT_SIZE + 32 * player_count
    }

    /// Snapshot of the current entrants in entry order.
    pub fn players(&self) -> Vec<Pubkey> {
        self.players.clone()
    }

    /// Up to `limit` entrants starting at `offset`, in entry order.
    /// `limit` is clamped to `MAX_PLAYERS_PER_PAGE`.
    pub fn players_page(&self, offset: u32, limit: u32) -> Vec<Pubkey> {
        self.players
            .iter()
            .skip(offset as usize)
            .take(limit.min(MAX_PLAYERS_PER_PAGE) as usize)
            .copied()
            .collect()
    }

    /// Records one entry. Nothing is mutated unless every check passes.
    ///
    /// # Errors
    /// - `InsufficientStake` if `stake` is below the minimum
    /// - `Overflow` if the pot would overflow
    pub fn record_entry(&mut self, player: Pubkey, stake: u64) -> Result<()> {
        require!(
            stake >= self.minimum_stake,
            LotteryError::InsufficientStake
        );
        let pot = self.pot.checked_add(stake).ok_or(LotteryError::Overflow)?;

        self.players.push(player);
        self.pot = pot;

        Ok(())
    }

    /// Selects a winner, pays out the whole pot and resets the ledger.
    ///
    /// `payout` moves `prize` lamports to `winner`. It runs before any state
    /// changes, so a failed payout leaves the entrants and pot untouched.
    ///
    /// # Errors
    /// - `Unauthorized` if `caller` is not the manager
    /// - `NoEntrants` if nobody has entered since the last draw
    /// - `TransferFailed` if `payout` fails
    /// - `Overflow` if the round counter would overflow
    pub fn draw<E, F>(&mut self, caller: Pubkey, entropy: &E, payout: F) -> Result<Draw>
    where
        E: EntropySource + ?Sized,
        F: FnOnce(Pubkey, u64) -> Result<()>,
    {
        require_keys_eq!(caller, self.manager, LotteryError::Unauthorized);
        require!(!self.players.is_empty(), LotteryError::NoEntrants);

        let winning_index = pick_index(entropy, self.players.len() as u64)?;
        let winner = *self
            .players
            .get(winning_index as usize)
            .ok_or(LotteryError::NoEntrants)?;
        let prize = self.pot;
        let round = self.round.checked_add(1).ok_or(LotteryError::Overflow)?;

        payout(winner, prize).map_err(|err| {
            msg!("Payout of {} lamports to {} failed: {}", prize, winner, err);
            error!(LotteryError::TransferFailed)
        })?;

        self.players.clear();
        self.pot = 0;
        self.round = round;
        self.last_winner = Some(winner);
        self.last_prize = prize;

        Ok(Draw {
            winner,
            winning_index,
            prize,
            round,
        })
    }
}
