use anchor_lang::error_code;

#[error_code]
pub enum LotteryError {
    Overflow,
    #[msg("Stake is below the lottery's minimum")]
    InsufficientStake,
    #[msg("Only the lottery manager can pick a winner")]
    Unauthorized,
    #[msg("There are no entrants to draw from")]
    NoEntrants,
    #[msg("Prize transfer failed")]
    TransferFailed,
    #[msg("Player cannot cover the stake")]
    InsufficientFunds,
    #[msg("Minimum stake must be non-zero and at most 100 SOL")]
    InvalidMinimumStake,
    #[msg("Invalid SlotHashes account provided")]
    InvalidSlotHashesAccount,
}
