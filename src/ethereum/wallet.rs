//! Wallet management and message signing.

use alloy::{
    primitives::{Address, Signature},
    signers::{local::PrivateKeySigner, SignerSync},
};

use crate::error::{ClientError, Result};

/// A locally held signing key and its account address.
#[derive(Clone)]
pub struct Wallet {
    /// The local signer.
    signer: PrivateKeySigner,
    /// Account address.
    address: Address,
}

impl Wallet {
    /// Create a wallet from a private key string.
    pub fn from_private_key(private_key: &str) -> Result<Self> {
        // Remove 0x prefix if present
        let key = private_key.strip_prefix("0x").unwrap_or(private_key);

        let signer: PrivateKeySigner = key
            .parse()
            .map_err(|e: alloy::signers::local::LocalSignerError| {
                ClientError::Signing(e.to_string())
            })?;

        let address = signer.address();

        tracing::info!(address = %address, "Wallet initialized");

        Ok(Self { signer, address })
    }

    /// Get the account address.
    pub fn address(&self) -> Address {
        self.address
    }

    /// Get the signer for transaction signing.
    pub fn signer(&self) -> &PrivateKeySigner {
        &self.signer
    }

    /// Sign arbitrary text with the standard EIP-191 prefixed hash.
    ///
    /// Pure/local operation, no network call.
    pub fn sign_text(&self, text: &str) -> Result<Signature> {
        self.signer
            .sign_message_sync(text.as_bytes())
            .map_err(|e| ClientError::Signing(e.to_string()))
    }
}

/// Recover the signer address from text and an EIP-191 signature.
///
/// The caller compares the recovered address to the expected signer.
/// Pure/local operation, no network call.
pub fn verify_text(text: &str, signature: &Signature) -> Result<Address> {
    signature
        .recover_address_from_msg(text.as_bytes())
        .map_err(|e| ClientError::Signing(e.to_string()))
}

impl std::fmt::Debug for Wallet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Wallet").field("address", &self.address).finish()
    }
}
