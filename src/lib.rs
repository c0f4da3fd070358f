/*
    Library to derive deterministic keys and addresses
    for Bitcoin from BIP-39 mnemonic phrases.

    Implements the full derivation pipeline:
        Entropy -> Checksum -> Mnemonic -> Seed -> Master Key -> Public Key -> Address

    Educational use only. Not for use with real funds.

    References:
        - BIP-39 (https://github.com/bitcoin/bips/blob/master/bip-0039.mediawiki)
            for the mnemonic encoding and seed derivation rules

        - BIP-32 (https://github.com/bitcoin/bips/blob/master/bip-0032.mediawiki)
            for the master key split

        - BIP-173 (https://github.com/bitcoin/bips/blob/master/bip-0173.mediawiki)
            for segwit v0 bech32 addresses

        - The Bitcoin Book (https://github.com/bitcoinbook/bitcoinbook/)
            most of the general concepts come from here
*/

//Outward facing modules
pub mod entropy;
pub mod key;
pub mod address;
pub mod bip39;
pub mod hdwallet;
pub mod pipeline;
pub mod encoding;

//Modules for internal use
mod hash;
pub mod util;
mod impls;
pub mod prelude;

//Dependencies
use rand::rngs::OsRng;
use secp256k1::{PublicKey, Secp256k1, SecretKey};
use hmac::{Hmac, Mac};
use sha2::{Sha256, Sha512, Digest};
use ripemd::Ripemd160;
