use anchor_lang::prelude::*;
use anchor_lang::solana_program::hash::hashv;
use arrayref::array_ref;

use crate::error::LotteryError;

/// Supplies the raw value a draw is derived from.
///
/// The draw only ever asks for one `u64`, so a stronger provider (an oracle
/// account, a commit-reveal scheme) can be dropped in without changing how
/// the lottery settles.
pub trait EntropySource {
    fn entropy(&self) -> u64;
}

/// Default entropy built from whatever the runtime exposes at draw time.
///
/// This is NOT secure. The manager chooses when to submit the draw and a
/// leader can reorder or drop transactions, so both can bias the outcome.
/// Fine for low-stakes pools, nothing more.
#[derive(Clone, Debug)]
pub struct SlotEntropy {
    pub slot: u64,
    pub unix_timestamp: i64,
    pub recent_slot_hash: [u8; 32],
    pub caller: Pubkey,
    pub entrant_count: u64,
    pub round: u64,
}

impl SlotEntropy {
    /// Builds the entropy inputs from raw SlotHashes sysvar data.
    ///
    /// The sysvar is laid out as an 8 byte entry count followed by
    /// `(slot: u64, hash: [u8; 32])` entries, newest first. Only the newest
    /// hash is used.
    pub fn from_slot_hashes(
        slot_hashes: &[u8],
        clock: &Clock,
        caller: Pubkey,
        entrant_count: u64,
        round: u64,
    ) -> Result<Self> {
        require!(
            slot_hashes.len() >= 8 + 8 + 32,
            LotteryError::InvalidSlotHashesAccount
        );

        Ok(Self {
            slot: clock.slot,
            unix_timestamp: clock.unix_timestamp,
            recent_slot_hash: *array_ref![slot_hashes, 16, 32],
            caller,
            entrant_count,
            round,
        })
    }
}

impl EntropySource for SlotEntropy {
    fn entropy(&self) -> u64 {
        let digest = hashv(&[
            &self.slot.to_le_bytes(),
            &self.unix_timestamp.to_le_bytes(),
            &self.recent_slot_hash,
            self.caller.as_ref(),
            &self.entrant_count.to_le_bytes(),
            &self.round.to_le_bytes(),
        ])
        .to_bytes();

        let high = u64::from_le_bytes(*array_ref![digest, 0, 8]);
        let low = u64::from_le_bytes(*array_ref![digest, 8, 8]);
        mix(high, low)
    }
}

/// Picks the winning slot in `[0, entrant_count)`.
///
/// # Errors
/// - `NoEntrants` if `entrant_count` is zero
pub fn pick_index<E: EntropySource + ?Sized>(source: &E, entrant_count: u64) -> Result<u64> {
    unbiased_range(source.entropy(), entrant_count)
}

/// splitmix64 finaliser over the sum of both inputs.
pub fn mix(a: u64, b: u64) -> u64 {
    let mut z = a.wrapping_add(b);

    z = (z ^ (z >> 30)).wrapping_mul(0xbf58476d1ce4e5b9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94d049bb133111eb);
    z ^ (z >> 31)
}

/// Maps `x` into `[0, range)`.
///
/// Powers of two are masked. Small ranges use plain modulo since the bias is
/// at most `range / 2^64`. Larger ranges get a bounded number of rejection
/// rounds before falling back to modulo.
pub fn unbiased_range(x: u64, range: u64) -> Result<u64> {
    require!(range > 0, LotteryError::NoEntrants);

    if range.is_power_of_two() {
        return Ok(x & (range - 1));
    }

    if range <= 256 {
        return Ok(x % range);
    }

    let threshold = u64::MAX - (u64::MAX % range);
    let mut value = x;

    const MAX_ATTEMPTS: u8 = 3;

    for i in 0..MAX_ATTEMPTS {
        if value < threshold {
            return Ok(value % range);
        }
        value = mix(value, value.wrapping_add(i as u64 + 1));
    }

    Ok(value % range)
}
