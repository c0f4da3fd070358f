/*
    This module implements the master key level of BIP-32
    hierarchical deterministic wallets.

    The 64 byte seed is split with HMAC-SHA512 under the
    fixed key "Bitcoin seed". The left 32 bytes become the
    master private key, the right 32 bytes the master chain
    code. Child key derivation is intentionally out of scope;
    the chain code is still produced correctly for any
    downstream consumer that wants to derive children.

    Reference:
        https://github.com/bitcoin/bips/blob/master/bip-0032.mediawiki
*/

use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::{
    bip39::Seed,
    key::{
        PrivKey,
        PubKey
    },
    hash,
    util
};

//Fixed HMAC key for the master key split, per BIP-32.
const MASTER_KEY_HMAC_KEY: &[u8] = b"Bitcoin seed";

pub enum HDWError {
    InvalidScalar(),
    InvalidPoint()
}

/**
    The root of the HD key tree: master private key plus
    master chain code.

    The chain code is treated as secret material alongside the
    private key and is zeroed on drop with it.
*/
pub struct MasterKey {
    priv_key: PrivKey,
    chain_code: ChainCode
}

#[derive(Clone, PartialEq, Zeroize, ZeroizeOnDrop)]
pub struct ChainCode([u8; 32]);

impl MasterKey {
    /**
        Derives the master key from a seed.

        Fails if the left half of the HMAC output is not a valid
        curve scalar (zero or >= curve order). That case signals
        the caller to draw fresh entropy; the rejected scalar is
        never reused or wrapped.
    */
    pub fn from_seed(seed: &Seed) -> Result<Self, HDWError> {
        let split: [u8; 64] = hash::hmac_sha512(seed.as_bytes(), MASTER_KEY_HMAC_KEY);

        let priv_key = PrivKey::from_slice(&split[0..32])?;
        let chain_code = ChainCode(util::try_into(split[32..64].to_vec()));

        Ok(Self { priv_key, chain_code })
    }

    pub fn priv_key(&self) -> &PrivKey {
        &self.priv_key
    }

    pub fn chain_code(&self) -> &[u8; 32] {
        &self.chain_code.0
    }

    /**
        The master public key. One way; safe to share.
    */
    pub fn pub_key(&self) -> PubKey {
        PubKey::from_priv_key(&self.priv_key)
    }

    /**
        Explicit hex projection of the chain code.
    */
    pub fn chain_code_hex(&self) -> String {
        util::encode_02x(&self.chain_code.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bip39::{Language, Mnemonic};

    const ABANDON_PHRASE: &str =
        "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about";

    fn seed_of(phrase: &str) -> Seed {
        Mnemonic::from_phrase(phrase, Language::English)
            .unwrap()
            .to_seed("")
    }

    #[test]
    fn master_key_known_answer() {
        let master = MasterKey::from_seed(&seed_of(ABANDON_PHRASE)).unwrap();
        assert_eq!(
            master.priv_key().reveal_hex(),
            "1837c1be8e2995ec11cda2b066151be2cfb48adf9e47b151d46adab3a21cdf67"
        );
        assert_eq!(
            master.chain_code_hex(),
            "7923408dadd3c7b56eed15567707ae5e5dca089de972e07f3b860450e2a3b70e"
        );
    }

    #[test]
    fn master_key_known_answer_24_words() {
        let phrase = "zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo vote";
        let master = MasterKey::from_seed(&seed_of(phrase)).unwrap();
        assert_eq!(
            master.priv_key().reveal_hex(),
            "8472fc35dbe9f8ccf7ed306295e84902c0e606e576e5cb3f6c32d98537a21282"
        );
        assert_eq!(
            master.chain_code_hex(),
            "15aa79fafb75cffcfda898a6b92f6e13d3693ddf269a0cf482cbe10c744f712c"
        );
    }

    #[test]
    fn master_pub_key_known_answer() {
        let master = MasterKey::from_seed(&seed_of(ABANDON_PHRASE)).unwrap();
        assert_eq!(
            master.pub_key().as_hex(),
            "03d902f35f560e0470c63313c7369168d9d7df2d49bf295fd9fb7cb109ccee0494"
        );
    }

    #[test]
    fn key_and_chain_code_lengths() {
        let master = MasterKey::from_seed(&seed_of(ABANDON_PHRASE)).unwrap();
        assert_eq!(master.priv_key().as_bytes().len(), 32);
        assert_eq!(master.chain_code().len(), 32);
    }

    #[test]
    fn derivation_is_deterministic() {
        let a = MasterKey::from_seed(&seed_of(ABANDON_PHRASE)).unwrap();
        let b = MasterKey::from_seed(&seed_of(ABANDON_PHRASE)).unwrap();
        assert_eq!(a.priv_key().as_bytes(), b.priv_key().as_bytes());
        assert_eq!(a.chain_code(), b.chain_code());
    }

    #[test]
    fn seed_from_slice_validates_length() {
        assert!(Seed::from_slice(&[0u8; 64]).is_some());
        assert!(Seed::from_slice(&[0u8; 32]).is_none());
    }
}
