/*
    This module implements the entropy source for the
    derivation pipeline.

    Entropy is always drawn from the OS CSPRNG. There is
    no fallback generator; if the OS RNG is unavailable
    the whole pipeline run fails.
*/

use rand::RngCore;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::{
    OsRng,
    util
};

/**
    Enum for the two entropy strengths BIP-39 supports here.
    12 word phrases come from 128 bits, 24 word phrases from 256 bits.
*/
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum EntropyBits {
    Bits128,
    Bits256
}

impl EntropyBits {
    /**
        Byte length of the entropy for this strength.
    */
    pub fn byte_len(&self) -> usize {
        match self {
            EntropyBits::Bits128 => 16,
            EntropyBits::Bits256 => 32
        }
    }

    pub fn bit_len(&self) -> usize {
        self.byte_len() * 8
    }

    /**
        Checksum bit count for this strength. (entropy bits / 32)
    */
    pub fn checksum_len(&self) -> usize {
        self.bit_len() / 32
    }

    /**
        Strict front door for integer bit lengths.
        Anything other than 128 or 256 is rejected, never clamped.
    */
    pub fn from_bits(bits: usize) -> Result<Self, EntropyErr> {
        match bits {
            128 => Ok(EntropyBits::Bits128),
            256 => Ok(EntropyBits::Bits256),
            x => Err(EntropyErr::InvalidBitLength(x))
        }
    }
}

pub enum EntropyErr {
    InvalidBitLength(usize),
    RngUnavailable(String)
}

/**
    Raw entropy bytes. Zeroed on drop since the entropy alone
    is enough to reconstruct every key in the pipeline.
*/
#[derive(Clone, PartialEq, Zeroize, ZeroizeOnDrop)]
pub struct Entropy {
    bytes: Vec<u8>
}

impl Entropy {
    /**
        Draws fresh entropy of the given strength from the OS CSPRNG.
    */
    pub fn generate(bits: EntropyBits) -> Result<Self, EntropyErr> {
        let mut bytes: Vec<u8> = vec![0; bits.byte_len()];
        OsRng.try_fill_bytes(&mut bytes)
            .map_err(|e| EntropyErr::RngUnavailable(e.to_string()))?;
        Ok(Self { bytes })
    }

    /**
        Wraps caller supplied bytes as entropy.
        Used to re-derive from saved material and by the tests.
    */
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, EntropyErr> {
        match bytes.len() {
            16 | 32 => Ok(Self { bytes: bytes.to_vec() }),
            x => Err(EntropyErr::InvalidBitLength(x * 8))
        }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn bit_len(&self) -> usize {
        self.bytes.len() * 8
    }

    /**
        Explicit hex projection. The Display impl is redacted,
        revealing the raw entropy requires this call.
    */
    pub fn reveal_hex(&self) -> String {
        util::encode_02x(&self.bytes)
    }

    /**
        Binary string projection for didactic display of the bit layout.
    */
    pub fn reveal_binary(&self) -> String {
        util::encode_binary(&self.bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepted_bit_lengths() {
        assert_eq!(EntropyBits::from_bits(128).unwrap(), EntropyBits::Bits128);
        assert_eq!(EntropyBits::from_bits(256).unwrap(), EntropyBits::Bits256);
    }

    #[test]
    fn rejected_bit_lengths() {
        for bits in [0, 64, 127, 129, 160, 192, 224, 512] {
            assert!(EntropyBits::from_bits(bits).is_err());
        }
    }

    #[test]
    fn generated_lengths_match_strength() {
        let e128 = Entropy::generate(EntropyBits::Bits128).unwrap();
        let e256 = Entropy::generate(EntropyBits::Bits256).unwrap();
        assert_eq!(e128.as_bytes().len(), 16);
        assert_eq!(e256.as_bytes().len(), 32);
    }

    #[test]
    fn consecutive_draws_differ() {
        let a = Entropy::generate(EntropyBits::Bits256).unwrap();
        let b = Entropy::generate(EntropyBits::Bits256).unwrap();
        assert_ne!(a.as_bytes(), b.as_bytes());
    }

    #[test]
    fn from_bytes_validates_length() {
        assert!(Entropy::from_bytes(&[0u8; 16]).is_ok());
        assert!(Entropy::from_bytes(&[0u8; 32]).is_ok());
        assert!(Entropy::from_bytes(&[0u8; 20]).is_err());
        assert!(Entropy::from_bytes(&[]).is_err());
    }
}
