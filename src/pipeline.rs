/*
    This module orchestrates the full derivation pipeline:

        Entropy -> Checksum -> Mnemonic -> Seed -> Master Key -> Public Key -> Address

    Each stage is a pure function of the previous stage's output.
    Randomness is consumed exactly once, at the entropy draw. If
    any stage fails the whole run fails; a partially derived
    wallet is meaningless and dangerous to display as if usable.
*/

use crate::{
    address::{Address, AddressInfo},
    bip39::{checksum, Checksum, Language, Mnemonic, MnemonicErr, Seed},
    entropy::{Entropy, EntropyBits, EntropyErr},
    encoding::bech32::Bech32Err,
    hdwallet::{HDWError, MasterKey},
    key::PubKey,
    util::Network
};

/**
    Sum of every stage error. The pipeline never produces a
    partial artifact set; the first error aborts the run.
*/
pub enum DerivationErr {
    Entropy(EntropyErr),
    Mnemonic(MnemonicErr),
    MasterKey(HDWError),
    Address(Bech32Err)
}

impl From<EntropyErr> for DerivationErr {
    fn from(e: EntropyErr) -> Self { Self::Entropy(e) }
}

impl From<MnemonicErr> for DerivationErr {
    fn from(e: MnemonicErr) -> Self { Self::Mnemonic(e) }
}

impl From<HDWError> for DerivationErr {
    fn from(e: HDWError) -> Self { Self::MasterKey(e) }
}

impl From<Bech32Err> for DerivationErr {
    fn from(e: Bech32Err) -> Self { Self::Address(e) }
}

/**
    Whether display code may render secret material.

    Redaction is a caller concern; the cryptographic functions
    themselves never format secrets. Defaults to Redacted.
*/
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum RevealPolicy {
    Redacted,
    Reveal
}

impl Default for RevealPolicy {
    fn default() -> Self {
        RevealPolicy::Redacted
    }
}

/**
    Every intermediate artifact of one derivation run, retained
    for didactic display. The secret stages (entropy, seed,
    master private key) stay in zeroed-on-drop buffers and only
    render through their reveal methods.
*/
pub struct Derivation {
    pub entropy: Entropy,
    pub checksum: Checksum,
    pub mnemonic: Mnemonic,
    pub seed: Seed,
    pub master_key: MasterKey,
    pub pub_key: PubKey,
    pub address: AddressInfo,
    pub reveal: RevealPolicy
}

/**
    Runs the full pipeline from a fresh entropy draw.
*/
pub fn derive(bits: EntropyBits, passphrase: &str) -> Result<Derivation, DerivationErr> {
    let entropy = Entropy::generate(bits)?;
    derive_from_entropy(entropy, passphrase)
}

/**
    Runs the deterministic tail of the pipeline from caller
    supplied entropy. Same entropy and passphrase always produce
    byte identical seed, keys and address.
*/
pub fn derive_from_entropy(entropy: Entropy, passphrase: &str) -> Result<Derivation, DerivationErr> {
    let checksum = checksum(&entropy);
    let mnemonic = Mnemonic::from_entropy(&entropy, Language::English);
    let seed = mnemonic.to_seed(passphrase);
    let master_key = MasterKey::from_seed(&seed)?;
    let pub_key = master_key.pub_key();
    let address = Address::p2wpkh(&pub_key, Network::Bitcoin)?;

    Ok(Derivation {
        entropy,
        checksum,
        mnemonic,
        seed,
        master_key,
        pub_key,
        address,
        reveal: RevealPolicy::default()
    })
}

/**
    Re-derives the deterministic tail of the pipeline from a
    saved mnemonic phrase, the wallet recovery path.
*/
pub fn derive_from_phrase(phrase: &str, passphrase: &str) -> Result<Derivation, DerivationErr> {
    let mnemonic = Mnemonic::from_phrase(phrase, Language::English)?;
    let entropy = mnemonic.to_entropy()?;
    derive_from_entropy(entropy, passphrase)
}

impl Derivation {
    /**
        Opts in to rendering secret material in Display output.
    */
    pub fn with_reveal(mut self, policy: RevealPolicy) -> Self {
        self.reveal = policy;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ABANDON_ENTROPY: [u8; 16] = [0u8; 16];

    fn abandon_run() -> Derivation {
        let entropy = Entropy::from_bytes(&ABANDON_ENTROPY).unwrap();
        derive_from_entropy(entropy, "").unwrap()
    }

    #[test]
    fn full_pipeline_known_answer() {
        let run = abandon_run();

        assert_eq!(
            run.mnemonic.phrase(),
            "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about"
        );
        assert_eq!(
            run.seed.reveal_hex(),
            "5eb00bbddcf069084889a8ab9155568165f5c453ccb85e70811aaed6f6da5fc1\
             9a5ac40b389cd370d086206dec8aa6c43daea6690f20ad3d8d48b2d2ce9e38e4"
        );
        assert_eq!(
            run.master_key.priv_key().reveal_hex(),
            "1837c1be8e2995ec11cda2b066151be2cfb48adf9e47b151d46adab3a21cdf67"
        );
        assert_eq!(
            run.pub_key.as_hex(),
            "03d902f35f560e0470c63313c7369168d9d7df2d49bf295fd9fb7cb109ccee0494"
        );
        assert_eq!(run.address.address, "bc1qw0za5zsr6tggqwmnruzzg2a5pnkjlzaus8upyg");
    }

    #[test]
    fn double_run_is_byte_identical() {
        let a = abandon_run();
        let b = abandon_run();

        assert_eq!(a.seed.as_bytes(), b.seed.as_bytes());
        assert_eq!(a.master_key.priv_key().as_bytes(), b.master_key.priv_key().as_bytes());
        assert_eq!(a.master_key.chain_code(), b.master_key.chain_code());
        assert_eq!(a.pub_key, b.pub_key);
        assert_eq!(a.address, b.address);
    }

    #[test]
    fn fresh_runs_are_isolated() {
        let a = derive(EntropyBits::Bits128, "").unwrap();
        let b = derive(EntropyBits::Bits128, "").unwrap();
        assert_ne!(a.entropy.as_bytes(), b.entropy.as_bytes());
        assert_ne!(a.address, b.address);
    }

    #[test]
    fn passphrase_changes_everything_after_the_mnemonic() {
        let entropy = Entropy::from_bytes(&ABANDON_ENTROPY).unwrap();
        let plain = derive_from_entropy(entropy.clone(), "").unwrap();
        let passworded = derive_from_entropy(entropy, "TREZOR").unwrap();

        assert_eq!(plain.mnemonic.phrase(), passworded.mnemonic.phrase());
        assert_ne!(plain.seed.as_bytes(), passworded.seed.as_bytes());
        assert_ne!(plain.address, passworded.address);
    }

    #[test]
    fn recovery_from_phrase_matches_original_run() {
        let original = abandon_run();
        let recovered = derive_from_phrase(original.mnemonic.phrase(), "").unwrap();

        assert_eq!(original.entropy.as_bytes(), recovered.entropy.as_bytes());
        assert_eq!(original.seed.as_bytes(), recovered.seed.as_bytes());
        assert_eq!(original.address, recovered.address);
    }

    #[test]
    fn checksum_projection_matches_mnemonic_suffix() {
        let run = abandon_run();
        let bit_string = run.mnemonic.binary_string();
        assert_eq!(&bit_string[128..], run.checksum.bits);
        assert_eq!(run.checksum.hash, crate::hash::sha256(run.entropy.as_bytes()));
    }

    #[test]
    fn word_count_follows_entropy_strength() {
        let r128 = derive(EntropyBits::Bits128, "").unwrap();
        let r256 = derive(EntropyBits::Bits256, "").unwrap();
        assert_eq!(r128.mnemonic.word_count(), 12);
        assert_eq!(r256.mnemonic.word_count(), 24);
    }
}
