/**
    This module combines all the boilerplate
    implementations of fmt::Display and fmt::Debug.

    Secret bearing types (Entropy, Seed, PrivKey) render a
    redacted placeholder from both Display and Debug so that
    derived formatting can never leak key material into logs.
    Their hex projections require an explicit reveal call.
*/

use crate::{
    address::AddressInfo,
    bip39::{Mnemonic, MnemonicErr, Seed},
    entropy::{Entropy, EntropyErr},
    encoding::bech32::Bech32Err,
    hdwallet::HDWError,
    key::{PrivKey, PubKey},
    pipeline::{Derivation, DerivationErr, RevealPolicy}
};
use std::fmt;

const REDACTED: &str = "[redacted]";

/*
    entropy module impls
*/
impl fmt::Display for Entropy {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", REDACTED)
    }
}

impl fmt::Debug for Entropy {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Entropy({} bits, {})", self.bit_len(), REDACTED)
    }
}

impl fmt::Display for EntropyErr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::InvalidBitLength(x) =>
                write!(f, "Expected 128 or 256 bits of entropy. Found {}", x),
            Self::RngUnavailable(x) =>
                write!(f, "Secure random source unavailable: {}", x)
        }
    }
}

impl fmt::Debug for EntropyErr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "EntropyErr({})", self)
    }
}

/*
    bip39 module impls
*/
impl fmt::Display for Mnemonic {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.phrase())
    }
}

impl fmt::Display for Seed {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", REDACTED)
    }
}

impl fmt::Debug for Seed {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Seed(64 bytes, {})", REDACTED)
    }
}

impl fmt::Display for MnemonicErr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let val: String = match self {
            Self::ChecksumUnequal() => "Bad checksum".to_string(),
            Self::InvalidBits(x) => x.to_string(),
            Self::InvalidWord(x) => format!("Word '{}' is not in the word list", x)
        };

        write!(f, "{}", val)
    }
}

impl fmt::Debug for MnemonicErr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "MnemonicErr({})", self)
    }
}

/*
    key module impls
*/
impl fmt::Display for PrivKey {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", REDACTED)
    }
}

impl fmt::Debug for PrivKey {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "PrivKey({})", REDACTED)
    }
}

impl fmt::Display for PubKey {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_hex())
    }
}

/*
    hdwallet module impls
*/
impl fmt::Display for HDWError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let val = match self {
            Self::InvalidScalar() => "Private key scalar out of curve range. Draw fresh entropy",
            Self::InvalidPoint() => "Invalid public key bytes"
        };

        write!(f, "{}", val)
    }
}

impl fmt::Debug for HDWError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "HDWError({})", self)
    }
}

/*
    encoding module impls
*/
impl fmt::Display for Bech32Err {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::InvalidProgramLen(x) =>
                write!(f, "Expected a 20 byte witness program. Found {} bytes", x),
            Self::CannotEncode() => write!(f, "Bech32 encoding failed"),
            Self::InvalidAddress() => write!(f, "Not a valid segwit address")
        }
    }
}

/*
    address module impls
*/
impl fmt::Display for AddressInfo {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.address)
    }
}

/*
    pipeline module impls
*/
impl fmt::Display for DerivationErr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Entropy(e) => write!(f, "{}", e),
            Self::Mnemonic(e) => write!(f, "{}", e),
            Self::MasterKey(e) => write!(f, "{}", e),
            Self::Address(e) => write!(f, "{}", e)
        }
    }
}

impl fmt::Debug for DerivationErr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "DerivationErr({})", self)
    }
}

impl fmt::Display for Derivation {
    /**
        Didactic dump of every pipeline stage. Secret stages are
        shown only when the run was built with RevealPolicy::Reveal.
    */
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let (entropy, seed, priv_key) = match self.reveal {
            RevealPolicy::Reveal => (
                self.entropy.reveal_hex(),
                self.seed.reveal_hex(),
                self.master_key.priv_key().reveal_hex()
            ),
            RevealPolicy::Redacted => (
                REDACTED.to_string(),
                REDACTED.to_string(),
                REDACTED.to_string()
            )
        };

        writeln!(f, "entropy:     {}", entropy)?;
        writeln!(f, "checksum:    {}", self.checksum.bits)?;
        writeln!(f, "mnemonic:    {}", self.mnemonic.phrase())?;
        writeln!(f, "seed:        {}", seed)?;
        writeln!(f, "private key: {}", priv_key)?;
        writeln!(f, "chain code:  {}", self.master_key.chain_code_hex())?;
        writeln!(f, "public key:  {}", self.pub_key.as_hex())?;
        write!(f, "address:     {}", self.address.address)
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        entropy::Entropy,
        pipeline::{derive_from_entropy, RevealPolicy}
    };

    #[test]
    fn default_display_redacts_secrets() {
        let run = derive_from_entropy(Entropy::from_bytes(&[0u8; 16]).unwrap(), "").unwrap();
        let rendered = format!("{}", run);

        assert!(rendered.contains("[redacted]"));
        assert!(!rendered.contains("5eb00bbd"));
        assert!(!rendered.contains("1837c1be"));
        //Public artifacts still show
        assert!(rendered.contains("bc1q"));
    }

    #[test]
    fn reveal_policy_opts_in() {
        let run = derive_from_entropy(Entropy::from_bytes(&[0u8; 16]).unwrap(), "")
            .unwrap()
            .with_reveal(RevealPolicy::Reveal);
        let rendered = format!("{}", run);

        assert!(rendered.contains("5eb00bbd"));
        assert!(rendered.contains("1837c1be"));
    }

    #[test]
    fn debug_never_leaks_key_material() {
        let run = derive_from_entropy(Entropy::from_bytes(&[0u8; 16]).unwrap(), "").unwrap();
        let debugged = format!("{:?} {:?} {:?}", run.entropy, run.seed, run.master_key.priv_key());

        assert!(!debugged.contains("00000000"));
        assert!(!debugged.contains("5eb00bbd"));
        assert!(!debugged.contains("1837c1be"));
    }
}
