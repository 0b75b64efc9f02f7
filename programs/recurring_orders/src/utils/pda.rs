pub const SCHEDULER_SEED: &[u8] = b"scheduler";
pub const ORDER_SEED: &[u8] = b"order";
pub const CREATOR_SEED: &[u8] = b"creator";
pub const SLOT_SEED: &[u8] = b"slot";
pub const VAULT_SEED: &[u8] = b"vault";

/// Signer seeds for the Scheduler PDA, which signs vault transfers and
/// delegated pulls.
pub fn scheduler_signer_seeds(bump_bytes: &[u8; 1]) -> [&[u8]; 2] {
    [SCHEDULER_SEED, bump_bytes]
}
