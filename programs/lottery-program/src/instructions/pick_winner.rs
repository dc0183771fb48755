use anchor_lang::prelude::*;
use anchor_lang::solana_program::sysvar::slot_hashes;

use crate::{
    constants::{LOTTERY_SEED, VAULT_SEED},
    error::LotteryError,
    randomness::SlotEntropy,
    state::{Lottery, Vault, VAULT_ACCOUNT_SIZE},
};

/// Event emitted when a winner is paid out
#[event]
pub struct WinnerPicked {
    /// The pubkey of the lottery
    pub lottery: Pubkey,
    /// The winner's address
    pub winner: Pubkey,
    /// Lamports paid to the winner
    pub prize: u64,
    /// Draw number, starting at 1
    pub round: u64,
    /// Position of the winning slot in the entrant list
    pub winning_index: u64,
}

/// Draws a winner, pays out the entire pot and reopens the lottery empty.
///
/// The winning slot is derived from the clock, the newest entry of the
/// SlotHashes sysvar, the manager key, the entrant count and the round
/// counter. This is weak entropy: the manager picks when to send the
/// transaction and a leader can influence slot and ordering. See
/// `randomness::SlotEntropy`.
///
/// The winner's account is not known until the draw runs, so the caller
/// passes candidate accounts as writable remaining accounts (normally every
/// distinct entrant). The prize is moved before the ledger is reset.
/// This is a second weakness: a manager who leaves the winner's account out
/// gets `TransferFailed` with the ledger untouched, and can keep redrawing
/// until a chosen entrant wins.
///
/// Execution requirements:
/// 1. The signer must be the lottery manager
/// 2. At least one player must have entered
/// 3. The winning player's account must be among the remaining accounts
///
/// # Errors
/// - `Unauthorized` if the signer is not the manager
/// - `NoEntrants` if the entrant list is empty
/// - `InvalidSlotHashesAccount` if the provided SlotHashes account is invalid
/// - `TransferFailed` if the winner's account is missing, read-only or cannot be credited
pub fn pick_winner(ctx: Context<PickWinner>) -> Result<()> {
    require_keys_eq!(
        ctx.accounts.recent_slothashes.key(),
        slot_hashes::ID,
        LotteryError::InvalidSlotHashesAccount
    );

    let clock = Clock::get()?;
    let manager = ctx.accounts.manager.key();
    let vault = ctx.accounts.vault.to_account_info();
    let candidates = ctx.remaining_accounts;

    let entropy = {
        let data = ctx.accounts.recent_slothashes.data.borrow();
        SlotEntropy::from_slot_hashes(
            &data,
            &clock,
            manager,
            ctx.accounts.lottery.players.len() as u64,
            ctx.accounts.lottery.round,
        )?
    };

    msg!(
        "Drawing round {} at slot {} with {} entrants",
        ctx.accounts.lottery.round.saturating_add(1),
        clock.slot,
        ctx.accounts.lottery.players.len()
    );

    let rent_reserve = Rent::get()?.minimum_balance(VAULT_ACCOUNT_SIZE);

    let lottery = &mut ctx.accounts.lottery;
    let draw = lottery.draw(manager, &entropy, |winner, prize| {
        pay_prize(&vault, rent_reserve, candidates, winner, prize)
    })?;

    msg!(
        "Winner: {} (slot {}), prize {} lamports",
        draw.winner,
        draw.winning_index,
        draw.prize
    );

    emit!(WinnerPicked {
        lottery: lottery.key(),
        winner: draw.winner,
        prize: draw.prize,
        round: draw.round,
        winning_index: draw.winning_index,
    });

    Ok(())
}

/// Moves `prize` lamports from the vault to `winner`, which must be one of
/// the writable `candidates`. The vault keeps at least `rent_reserve`.
///
/// Direct debit works because the vault is owned by this program.
pub fn pay_prize(
    vault: &AccountInfo,
    rent_reserve: u64,
    candidates: &[AccountInfo],
    winner: Pubkey,
    prize: u64,
) -> Result<()> {
    let recipient = candidates
        .iter()
        .find(|account| account.key() == winner)
        .ok_or(LotteryError::TransferFailed)?;
    require!(recipient.is_writable, LotteryError::TransferFailed);

    let remaining = vault
        .lamports()
        .checked_sub(prize)
        .ok_or(LotteryError::TransferFailed)?;
    require!(remaining >= rent_reserve, LotteryError::TransferFailed);

    vault.sub_lamports(prize)?;
    recipient.add_lamports(prize)?;

    Ok(())
}

/// Accounts required for the pick_winner instruction
#[derive(Accounts)]
pub struct PickWinner<'info> {
    #[account(
        mut,
        seeds = [LOTTERY_SEED, lottery.manager.as_ref()],
        bump = lottery.bump,
    )]
    pub lottery: Account<'info, Lottery>,

    #[account(
        mut,
        seeds = [VAULT_SEED, lottery.key().as_ref()],
        bump = lottery.vault_bump,
    )]
    pub vault: Account<'info, Vault>,

    /// Checked against the lottery manager when the draw runs
    pub manager: Signer<'info>,

    /// The SlotHashes sysvar contains the most recent block hashes
    /// This is used as a source of randomness
    /// CHECK: Using UncheckedAccount because we manually validate the correct sysvar.
    /// This is needed because Anchor will always throw an error on the SlotHashes sysvar.
    pub recent_slothashes: UncheckedAccount<'info>,
}
