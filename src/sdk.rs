//! Collaborator seam for the external wallet SDK
//!
//! Derivation, verification, and signing all belong to the SDK; the adapter
//! only shapes inputs and sequences calls. The long-lived SDK handle is
//! constructed once per process and injected into both operations, so each
//! can be exercised against a mocked handle.

use async_trait::async_trait;
use thiserror::Error;

use crate::keychain::SEED_LEN;
use crate::types::{Keychain, SignOptions, SignedTransaction, VerifyOptions};

/// Network context the SDK client is constructed for.
///
/// The adapter itself performs no network calls, so the environment only
/// matters to the SDK's own internals; `Test` is the default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Environment {
    #[default]
    Test,
    Production,
}

/// Failure surfaced by the external SDK, message preserved verbatim.
#[derive(Debug, Clone, Error)]
#[error("{0}")]
pub struct SdkError(pub String);

impl SdkError {
    pub fn new(msg: impl Into<String>) -> Self {
        Self(msg.into())
    }
}

pub type SdkResult<T> = Result<T, SdkError>;

/// Per-process handle to the external wallet SDK.
///
/// Read-only configuration after construction; safe to share across
/// concurrent operations.
pub trait WalletSdk: Send + Sync {
    type Wallet: WalletHandle;

    /// Network context this handle was constructed for.
    fn environment(&self) -> Environment;

    /// The SDK's per-coin `keychains().create(seed)` routine, a deterministic
    /// local derivation.
    fn create_keychain(&self, coin: &str, seed: &[u8; SEED_LEN]) -> SdkResult<Keychain>;

    /// The SDK's `newWalletObject()` routine. Produces a local wallet-context
    /// object; no I/O happens here.
    fn new_wallet_object(&self, coin: &str) -> SdkResult<Self::Wallet>;
}

/// Wallet-context object scoped to a coin type.
#[async_trait]
pub trait WalletHandle: Send + Sync {
    /// The SDK's `verifyTransaction` routine. May perform its own network
    /// round-trip to resolve transaction details.
    async fn verify_transaction(&self, options: &VerifyOptions) -> SdkResult<()>;

    /// The SDK's `signTransaction` routine.
    async fn sign_transaction(&self, options: &SignOptions) -> SdkResult<SignedTransaction>;
}

#[cfg(test)]
pub(crate) mod mock {
    //! Recording mock of the SDK seam, shared by the unit tests.

    use super::*;
    use secrecy::SecretString;
    use std::sync::{Arc, Mutex};

    #[derive(Default)]
    pub struct MockState {
        pub environment: Mutex<Environment>,
        /// (coin, derivation input) pairs seen by `create_keychain`.
        pub seeds: Mutex<Vec<(String, Vec<u8>)>>,
        pub verify_options: Mutex<Vec<VerifyOptions>>,
        pub sign_calls: Mutex<usize>,
        pub fail_create: Mutex<Option<String>>,
        pub fail_verify: Mutex<Option<String>>,
        pub fail_sign: Mutex<Option<String>>,
    }

    #[derive(Default, Clone)]
    pub struct MockSdk(pub Arc<MockState>);

    impl MockSdk {
        pub fn failing_verify(msg: &str) -> Self {
            let sdk = Self::default();
            *sdk.0.fail_verify.lock().unwrap() = Some(msg.to_string());
            sdk
        }

        pub fn failing_sign(msg: &str) -> Self {
            let sdk = Self::default();
            *sdk.0.fail_sign.lock().unwrap() = Some(msg.to_string());
            sdk
        }
    }

    impl WalletSdk for MockSdk {
        type Wallet = MockWallet;

        fn environment(&self) -> Environment {
            *self.0.environment.lock().unwrap()
        }

        fn create_keychain(&self, coin: &str, seed: &[u8; SEED_LEN]) -> SdkResult<Keychain> {
            self.0
                .seeds
                .lock()
                .unwrap()
                .push((coin.to_string(), seed.to_vec()));
            if let Some(msg) = self.0.fail_create.lock().unwrap().clone() {
                return Err(SdkError::new(msg));
            }
            Ok(Keychain {
                public: "xpub-mock".to_string(),
                private: Some(SecretString::from("xprv-mock".to_string())),
            })
        }

        fn new_wallet_object(&self, _coin: &str) -> SdkResult<MockWallet> {
            Ok(MockWallet(self.0.clone()))
        }
    }

    pub struct MockWallet(pub Arc<MockState>);

    #[async_trait]
    impl WalletHandle for MockWallet {
        async fn verify_transaction(&self, options: &VerifyOptions) -> SdkResult<()> {
            self.0.verify_options.lock().unwrap().push(options.clone());
            if let Some(msg) = self.0.fail_verify.lock().unwrap().clone() {
                return Err(SdkError::new(msg));
            }
            Ok(())
        }

        async fn sign_transaction(&self, _options: &SignOptions) -> SdkResult<SignedTransaction> {
            *self.0.sign_calls.lock().unwrap() += 1;
            if let Some(msg) = self.0.fail_sign.lock().unwrap().clone() {
                return Err(SdkError::new(msg));
            }
            Ok(SignedTransaction(serde_json::json!({"txHex": "deadbeef"})))
        }
    }
}
