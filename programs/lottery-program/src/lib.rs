use anchor_lang::prelude::*;
use instructions::*;

pub mod constants;
pub mod error;
pub mod instructions;
pub mod randomness;
pub mod state;

declare_id!("2MASi45ub7Qe4ZE36UT5G6cU4ud8Fhhe4deS4F3cw9KT");

#[program]
pub mod lottery_program {
    use super::*;

    pub fn initialize(ctx: Context<Initialize>, minimum_stake: Option<u64>) -> Result<()> {
        instructions::initialize::initialize(ctx, minimum_stake)
    }

    pub fn enter(ctx: Context<Enter>, stake: u64) -> Result<()> {
        instructions::enter::enter(ctx, stake)
    }

    pub fn pick_winner(ctx: Context<PickWinner>) -> Result<()> {
        instructions::pick_winner::pick_winner(ctx)
    }

    pub fn get_players(ctx: Context<GetPlayers>, offset: u32, limit: u32) -> Result<Vec<Pubkey>> {
        instructions::get_players::get_players(ctx, offset, limit)
    }
}
