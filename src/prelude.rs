/*
    This module contains the default imports for the library.

    Import the library using:
        use btc_keyderive::prelude::*;
    to quickly import the essential parts of the library.
*/

pub use crate::{

    entropy::{
        Entropy,
        EntropyBits,
        EntropyErr
    },

    key::{
        PubKey,
        PrivKey
    },

    address::{
        Address,
        AddressInfo
    },

    bip39::{
        MnemonicErr,
        Language,
        Mnemonic,
        Checksum,
        WordGroup,
        Seed
    },

    hdwallet::{
        MasterKey,
        HDWError
    },

    encoding::bech32::Bech32Err,

    pipeline::{
        derive,
        derive_from_entropy,
        derive_from_phrase,
        Derivation,
        DerivationErr,
        RevealPolicy
    },

    util::{
        encode_02x,
        decode_02x,
        Network
    }

};
