use anchor_lang::prelude::*;
use anchor_lang::system_program;

use crate::{
    constants::{LOTTERY_SEED, VAULT_SEED},
    error::LotteryError,
    state::{Lottery, Vault},
};

/// Event emitted when a player enters the lottery
#[event]
pub struct PlayerEntered {
    /// The pubkey of the lottery
    pub lottery: Pubkey,
    /// The player's address
    pub player: Pubkey,
    /// Stake paid in lamports
    pub stake: u64,
    /// Pot after this entry
    pub pot: u64,
    /// Number of entrant slots after this entry
    pub player_count: u64,
}

/// Instruction to enter the lottery with `stake` lamports
///
/// # Arguments
/// * `ctx` - The context object containing all required accounts
/// * `stake` - Lamports to move into the vault, at least the lottery's minimum stake
///
/// # Security Considerations
/// 1. The stake is checked against the minimum before anything is written
/// 2. Pot overflow is checked before the transfer
/// 3. The vault balance is verified to have grown by exactly the stake
///
/// # Implementation Notes
/// - The lottery account grows by one 32 byte slot when it has no room left,
///   with the player covering the extra rent
/// - The account is never shrunk, so slots freed by a draw are reused
///
/// # Account Validations
/// * Lottery - PDA with seeds ["lottery", manager_key]
/// * Vault - PDA with seeds ["vault", lottery_key]
/// * Player - Signer paying the stake
pub fn enter(ctx: Context<Enter>, stake: u64) -> Result<()> {
    let player = ctx.accounts.player.key();

    ctx.accounts.lottery.record_entry(player, stake)?;

    require!(
        ctx.accounts.player.lamports() >= stake,
        LotteryError::InsufficientFunds
    );

    let lottery_info = ctx.accounts.lottery.to_account_info();
    let required_space = Lottery::space_for(ctx.accounts.lottery.players.len());
    if lottery_info.data_len() < required_space {
        let rent_shortfall = Rent::get()?
            .minimum_balance(required_space)
            .saturating_sub(lottery_info.lamports());
        if rent_shortfall > 0 {
            system_program::transfer(
                CpiContext::new(
                    ctx.accounts.system_program.to_account_info(),
                    system_program::Transfer {
                        from: ctx.accounts.player.to_account_info(),
                        to: lottery_info.clone(),
                    },
                ),
                rent_shortfall,
            )?;
        }
        lottery_info.realloc(required_space, false)?;
    }

    let pre_transfer_balance = ctx.accounts.vault.to_account_info().lamports();

    system_program::transfer(
        CpiContext::new(
            ctx.accounts.system_program.to_account_info(),
            system_program::Transfer {
                from: ctx.accounts.player.to_account_info(),
                to: ctx.accounts.vault.to_account_info(),
            },
        ),
        stake,
    )?;

    verify_deposit(
        pre_transfer_balance,
        ctx.accounts.vault.to_account_info().lamports(),
        stake,
    )?;

    let lottery = &ctx.accounts.lottery;
    msg!(
        "Player {} entered with {} lamports, pot is now {}",
        player,
        stake,
        lottery.pot
    );

    emit!(PlayerEntered {
        lottery: lottery.key(),
        player,
        stake,
        pot: lottery.pot,
        player_count: lottery.players.len() as u64,
    });

    Ok(())
}

/// Checks that a balance moved from `pre` to `post` by exactly `stake`.
fn verify_deposit(pre: u64, post: u64, stake: u64) -> Result<()> {
    require!(
        post == pre.checked_add(stake).ok_or(LotteryError::Overflow)?,
        LotteryError::TransferFailed
    );
    Ok(())
}

#[derive(Accounts)]
pub struct Enter<'info> {
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

    #[account(mut)]
    pub player: Signer<'info>,

    pub system_program: Program<'info, System>,
}
