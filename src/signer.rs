//! Transaction signing
//!
//! Shapes caller input into the collaborator's verification options, then
//! runs the strict two-step flow: verification must complete successfully
//! before signing begins. The first failure terminates the call; there are
//! no retries.

use std::collections::HashMap;

use crate::error::{AdapterError, AdapterResult};
use crate::sdk::{Environment, WalletHandle, WalletSdk};
use crate::types::{
    AddressInfo, Keychain, PubKeyEntry, Recipient, SignOptions, SignedTransaction, TxParams,
    TxPrebuild, Verification, VerificationKeychains, VerifyOptions,
};
use crate::{log_error, log_info, log_warn};

/// Inputs for [`sign_transaction`].
#[derive(Debug, Clone)]
pub struct SignParams {
    /// Coin type identifier, e.g. "btc" or "eth".
    pub coin: String,
    /// Must carry `prv`; its private key produces the local signature.
    pub user_keychain: Keychain,
    pub backup_keychain: Keychain,
    /// Public key of the co-signing service, used for verification only.
    pub bitgo_pub: String,
    /// Unsigned transaction prebuild, forwarded unmodified.
    pub tx_prebuild: TxPrebuild,
    /// Destination address.
    pub address: String,
    /// Amount in the coin's base unit, as a string.
    pub amount: String,
    /// Extra metadata for the destination address (e.g. expected memo).
    pub address_info: AddressInfo,
}

/// Verify a prebuilt transaction against the caller's expectations, then
/// sign it with the user keychain's private key.
///
/// Exactly one recipient per call; batched transfers are out of contract.
pub async fn sign_transaction<S: WalletSdk>(
    sdk: &S,
    params: SignParams,
) -> AdapterResult<SignedTransaction> {
    // Signing needs the user private key; reject before any delegation.
    let prv = params.user_keychain.private.clone().ok_or_else(|| {
        AdapterError::invalid_input("user keychain is missing private key material")
    })?;

    // The handle is expected to be built for a non-production context; the
    // verification round-trip below would otherwise hit production services.
    if sdk.environment() == Environment::Production {
        log_warn!(
            "signer",
            "wallet SDK handle is configured for the production network",
            coin = params.coin,
        );
    }

    // Local wallet-context object scoped to the coin; no I/O yet.
    let wallet = sdk
        .new_wallet_object(&params.coin)
        .map_err(|e| AdapterError::collaborator(e.to_string()))?;

    let tx_params = TxParams {
        recipients: vec![Recipient {
            address: params.address.clone(),
            amount: params.amount.clone(),
        }],
    };

    // Verification looks metadata up by destination address, hence a map.
    let mut addresses = HashMap::new();
    addresses.insert(params.address.clone(), params.address_info.clone());

    let verify_options = VerifyOptions {
        tx_params,
        tx_prebuild: params.tx_prebuild.clone(),
        verification: Verification {
            addresses,
            keychains: VerificationKeychains {
                user: PubKeyEntry {
                    public: params.user_keychain.public.clone(),
                },
                backup: PubKeyEntry {
                    public: params.backup_keychain.public.clone(),
                },
                bitgo: PubKeyEntry {
                    public: params.bitgo_pub.clone(),
                },
            },
            // The verification routine retrieves transaction details over
            // its own network round-trip; disabling this makes it fail.
            disable_networking: false,
        },
    };

    // Confirm the prebuild actually pays the requested amount to the
    // expected address before any key material is used.
    if let Err(e) = wallet.verify_transaction(&verify_options).await {
        log_error!(
            "signer",
            "transaction verification rejected",
            coin = params.coin,
            recipient = params.address,
        );
        return Err(AdapterError::verification_failed(e.to_string()));
    }

    let sign_options = SignOptions {
        tx_prebuild: params.tx_prebuild,
        prv,
    };
    let signed = wallet
        .sign_transaction(&sign_options)
        .await
        .map_err(|e| AdapterError::signing_failed(e.to_string()))?;

    log_info!(
        "signer",
        "transaction signed",
        coin = params.coin,
        recipient = params.address,
        amount = params.amount,
    );
    Ok(signed)
}
