//! Shared value objects for the adapter
//!
//! Everything here is transient: built per call, handed to the collaborator,
//! and dropped. Nothing is persisted or retained between calls. Wire field
//! names follow the collaborator's camelCase shapes.

use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use std::fmt;

/// Key-material object produced by the collaborator's keychain creation.
///
/// `prv` is present for signer-capable roles (user, backup) and absent for
/// watch-only entries. It stays wrapped in [`SecretString`] until the moment
/// it is handed to the signing routine.
#[derive(Clone, Deserialize)]
pub struct Keychain {
    #[serde(rename = "pub")]
    pub public: String,
    #[serde(default, rename = "prv")]
    pub private: Option<SecretString>,
}

impl fmt::Debug for Keychain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Keychain")
            .field("pub", &self.public)
            .field("prv", &self.private.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

/// Unsigned transaction template prepared by a remote party.
///
/// Passed through unmodified; the adapter never interprets its contents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TxPrebuild(pub Value);

/// Result of the collaborator's signing routine, returned uninterpreted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SignedTransaction(pub Value);

/// Auxiliary metadata about a destination address (e.g. expected memo/tag).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AddressInfo(pub Value);

/// A single transfer target.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipient {
    pub address: String,
    /// Amount in the coin's base unit (satoshi/wei/..), kept as a string to
    /// avoid precision loss on large integer values.
    pub amount: String,
}

/// Requested transaction parameters, as the verification routine expects
/// them. The adapter only ever emits a single recipient.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TxParams {
    pub recipients: Vec<Recipient>,
}

/// Everything the collaborator needs to check that a prebuild actually pays
/// the requested amount to the expected address with the expected signers.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifyOptions {
    pub tx_params: TxParams,
    pub tx_prebuild: TxPrebuild,
    pub verification: Verification,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Verification {
    /// Keyed by destination address; verification looks metadata up by the
    /// address it finds in the prebuild.
    pub addresses: HashMap<String, AddressInfo>,
    pub keychains: VerificationKeychains,
    /// Must stay `false`: the verification routine retrieves transaction
    /// details over its own network round-trip and fails without it.
    pub disable_networking: bool,
}

/// The three expected signers of a multi-signature wallet, under the fixed
/// role names the collaborator requires.
#[derive(Debug, Clone, Serialize)]
pub struct VerificationKeychains {
    pub user: PubKeyEntry,
    pub backup: PubKeyEntry,
    pub bitgo: PubKeyEntry,
}

#[derive(Debug, Clone, Serialize)]
pub struct PubKeyEntry {
    #[serde(rename = "pub")]
    pub public: String,
}

/// Inputs for the collaborator's signing routine. Deliberately not
/// serializable: `prv` must not leak through serde.
#[derive(Clone)]
pub struct SignOptions {
    pub tx_prebuild: TxPrebuild,
    pub prv: SecretString,
}

impl fmt::Debug for SignOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SignOptions")
            .field("tx_prebuild", &self.tx_prebuild)
            .field("prv", &"[REDACTED]")
            .finish()
    }
}
