/*
    This module implements the private and public key
    value types used by the pipeline.

    Private key bytes are kept in a zeroed-on-drop buffer
    and are only lifted into a secp256k1 SecretKey
    transiently, for scalar validation and point
    multiplication.
*/

use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::{
    Secp256k1,
    PublicKey,
    SecretKey,
    hdwallet::HDWError,
    util
};

/**
    A validated secp256k1 private key.

    Construction rejects the zero scalar and any value greater
    than or equal to the curve order; that validation is
    delegated to the secp256k1 library.
*/
#[derive(Clone, PartialEq, Zeroize, ZeroizeOnDrop)]
pub struct PrivKey {
    bytes: [u8; 32]
}

impl PrivKey {
    /**
        Use a predefined byte array as a secret key.
        Fails on out-of-range scalars instead of wrapping them.
    */
    pub fn from_slice(byte_array: &[u8]) -> Result<Self, HDWError> {
        let key = SecretKey::from_slice(byte_array)
            .map_err(|_| HDWError::InvalidScalar())?;
        Ok(Self { bytes: key.secret_bytes() })
    }

    /**
        Returns the private key as a byte array.
    */
    pub fn as_bytes(&self) -> [u8; 32] {
        self.bytes
    }

    /**
        Explicit hex projection. The Display and Debug impls
        are redacted, revealing the key requires this call.
    */
    pub fn reveal_hex(&self) -> String {
        util::encode_02x(&self.bytes)
    }

    fn secret_key(&self) -> SecretKey {
        //The bytes were range checked at construction
        SecretKey::from_slice(&self.bytes).expect("validated at construction")
    }
}

/**
    A compressed secp256k1 public key.

    Safe to display and share. Deriving it from the private key
    is one way; the reverse direction is the discrete log problem.
*/
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PubKey(PublicKey);

impl PubKey {
    /**
        Finds the compressed public key from a secret key.

        Is the result of static point G on the secp256k1 curve
        multiplied k times, where k is the private key.
    */
    pub fn from_priv_key(k: &PrivKey) -> Self {
        Self(PublicKey::from_secret_key(&Secp256k1::new(), &k.secret_key()))
    }

    /**
        Use a predefined byte array as a public key.
    */
    pub fn from_slice(byte_array: &[u8]) -> Result<Self, HDWError> {
        let key = PublicKey::from_slice(byte_array)
            .map_err(|_| HDWError::InvalidPoint())?;
        Ok(Self(key))
    }

    /**
        Returns the compressed public key as a byte array.
        Len is 33 (32 byte x-coord + y parity prefix, 0x02 or 0x03)
    */
    pub fn as_bytes(&self) -> [u8; 33] {
        self.0.serialize()
    }

    /**
        Returns the compressed public key as a hex string.
    */
    pub fn as_hex(&self) -> String {
        util::encode_02x(&self.as_bytes())
    }
}
