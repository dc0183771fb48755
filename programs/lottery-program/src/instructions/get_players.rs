use anchor_lang::prelude::*;

use crate::{constants::LOTTERY_SEED, state::Lottery};

/// Returns up to `limit` entrants starting at `offset`, in entry order,
/// through the transaction's return data. `limit` is clamped to
/// `MAX_PLAYERS_PER_PAGE` so the page fits the 1024 byte return data cap.
/// Read-only, callable by anyone. Walk the list by advancing `offset` until
/// an empty page comes back.
pub fn get_players(ctx: Context<GetPlayers>, offset: u32, limit: u32) -> Result<Vec<Pubkey>> {
    Ok(ctx.accounts.lottery.players_page(offset, limit))
}

#[derive(Accounts)]
pub struct GetPlayers<'info> {
    #[account(
        seeds = [LOTTERY_SEED, lottery.manager.as_ref()],
        bump = lottery.bump,
    )]
    pub lottery: Account<'info, Lottery>,
}
