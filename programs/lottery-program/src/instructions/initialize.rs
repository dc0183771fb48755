use anchor_lang::prelude::*;

use crate::{
    constants::{LOTTERY_SEED, VAULT_SEED},
    state::{Lottery, Vault, LOTTERY_ACCOUNT_SIZE, VAULT_ACCOUNT_SIZE},
};

/// Event emitted when a lottery is opened
#[event]
pub struct LotteryInitialized {
    /// The pubkey of the lottery
    pub lottery: Pubkey,
    /// The manager allowed to pick winners
    pub manager: Pubkey,
    /// Minimum stake per entry in lamports
    pub minimum_stake: u64,
}

/// Instruction to open a lottery managed by the signer
///
/// # Arguments
/// * `ctx` - The context object containing all required accounts
/// * `minimum_stake` - Minimum stake per entry in lamports, defaults to 0.01 SOL
///
/// # Account Validations
/// * Lottery - New PDA with seeds ["lottery", manager_key], one per manager
/// * Vault - New PDA with seeds ["vault", lottery_key] holding the staked lamports
/// * Manager - Pays for both accounts and becomes the lottery manager for good
pub fn initialize(ctx: Context<Initialize>, minimum_stake: Option<u64>) -> Result<()> {
    let lottery_key = ctx.accounts.lottery.key();
    let manager = ctx.accounts.manager.key();

    ctx.accounts.lottery.open(
        manager,
        minimum_stake,
        ctx.bumps.lottery,
        ctx.bumps.vault,
    )?;
    ctx.accounts.vault.lottery = lottery_key;
    ctx.accounts.vault.bump = ctx.bumps.vault;

    msg!(
        "Lottery {} opened by {} with minimum stake {}",
        lottery_key,
        manager,
        ctx.accounts.lottery.minimum_stake
    );

    emit!(LotteryInitialized {
        lottery: lottery_key,
        manager,
        minimum_stake: ctx.accounts.lottery.minimum_stake,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct Initialize<'info> {
    #[account(
        init,
        payer = manager,
        space = LOTTERY_ACCOUNT_SIZE,
        seeds = [LOTTERY_SEED, manager.key().as_ref()],
        bump
    )]
    pub lottery: Account<'info, Lottery>,

    #[account(
        init,
        payer = manager,
        space = VAULT_ACCOUNT_SIZE,
        seeds = [VAULT_SEED, lottery.key().as_ref()],
        bump
    )]
    pub vault: Account<'info, Vault>,

    #[account(mut)]
    pub manager: Signer<'info>,

    pub system_program: Program<'info, System>,
}
