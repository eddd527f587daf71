//! BitGo wallet adapter
//!
//! Thin client-side layer over the external BitGo wallet SDK. The SDK owns
//! key derivation, transaction verification, and signing; this crate only
//! validates inputs, shapes parameters, and sequences the delegated calls.
//!
//! # Architecture
//!
//! - **keychain**: validate a 32-byte seed, perturb it for the backup role,
//!   and delegate keychain derivation to the SDK
//! - **signer**: assemble verification options, have the SDK verify the
//!   prebuilt transaction, and only then have it sign
//! - **sdk**: the collaborator seam — traits the external SDK (or a test
//!   mock) implements
//!
//! The SDK handle is constructed once per process, in a test-network context
//! since no network calls originate on this side, and injected into both
//! operations so each is independently testable against a mocked handle.
//!
//! # Security
//!
//! Seed working copies are zeroized on drop, private key material stays
//! wrapped in `secrecy::SecretString` until handed to the signing routine,
//! and the logging layer redacts sensitive fields.
//!
//! # Example
//!
//! ```rust,ignore
//! use bitgo_adapter::{create_keychain, sign_transaction, SignParams};
//!
//! let user = create_keychain(&sdk, "btc", &seed, false)?;
//! let backup = create_keychain(&sdk, "btc", &seed, true)?;
//! let signed = sign_transaction(&sdk, SignParams { /* .. */ }).await?;
//! ```

pub mod error;
pub mod keychain;
pub mod sdk;
pub mod signer;
pub mod types;
pub mod utils;

// Re-export key types for convenience
pub use error::{AdapterError, AdapterResult, ErrorCode};
pub use keychain::{create_keychain, SEED_LEN};
pub use sdk::{Environment, SdkError, SdkResult, WalletHandle, WalletSdk};
pub use signer::{sign_transaction, SignParams};
pub use types::{
    AddressInfo, Keychain, PubKeyEntry, Recipient, SignOptions, SignedTransaction, TxParams,
    TxPrebuild, Verification, VerificationKeychains, VerifyOptions,
};
