//! Keychain creation
//!
//! Validates and shapes the input seed, then delegates derivation to the
//! external SDK.
//!
//! SECURITY: the working copy of the seed is zeroized on drop. The caller's
//! buffer is never modified.

use zeroize::Zeroizing;

use crate::error::{AdapterError, AdapterResult};
use crate::log_debug;
use crate::sdk::WalletSdk;
use crate::types::Keychain;

/// Required seed length in bytes.
///
/// Stellar and Algorand require exactly 32; most other coins accept 16-64.
/// The strictest length is enforced uniformly so one contract covers every
/// coin type.
pub const SEED_LEN: usize = 32;

/// Derive a keychain for `coin` from a 32-byte seed.
///
/// A backup keychain is derived from a copy of the seed with its first byte
/// incremented (mod 256): the wallet service rejects wallet creation when
/// the user and backup keys are identical, so the two derivation inputs must
/// never collide.
pub fn create_keychain<S: WalletSdk>(
    sdk: &S,
    coin: &str,
    seed: &[u8],
    backup: bool,
) -> AdapterResult<Keychain> {
    if seed.len() != SEED_LEN {
        return Err(
            AdapterError::invalid_input("Missing 32-byte input seed for create_keychain")
                .with_details(format!("got {} bytes", seed.len())),
        );
    }

    let mut buf = Zeroizing::new([0u8; SEED_LEN]);
    buf.copy_from_slice(seed);
    if backup {
        buf[0] = buf[0].wrapping_add(1);
    }

    log_debug!("keychain", "creating keychain", coin = coin, backup = backup);

    sdk.create_keychain(coin, &buf)
        .map_err(|e| AdapterError::collaborator(e.to_string()))
}
