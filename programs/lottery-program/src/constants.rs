pub const LOTTERY_SEED: &[u8] = b"lottery";

pub const VAULT_SEED: &[u8] = b"vault";

/// Stake floor used when `initialize` is called without an explicit minimum.
pub const DEFAULT_MINIMUM_STAKE: u64 = 10_000_000; // 0.01 SOL

/// Upper bound for a configured minimum stake.
pub const MAX_MINIMUM_STAKE: u64 = 100_000_000_000; // 100 SOL

/// Largest page `get_players` returns. Return data is capped at 1024 bytes:
/// 4 (vec length) + 32 * 31 = 996.
pub const MAX_PLAYERS_PER_PAGE: u32 = 31;
