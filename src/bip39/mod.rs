/*
    This module implements the BIP-39 standard for
    mnemonic phrases: checksum computation, entropy to
    word encoding and the inverse, and the PBKDF2 seed
    stretch.

    Reference:
        https://github.com/bitcoin/bips/blob/master/bip-0039.mediawiki
*/

mod lang;
pub mod mnemonic;

pub use mnemonic::Mnemonic as Mnemonic;
pub use mnemonic::Checksum as Checksum;
pub use mnemonic::WordGroup as WordGroup;
pub use mnemonic::Seed as Seed;
pub use mnemonic::checksum as checksum;
pub use lang::Language as Language;

pub enum MnemonicErr {
    InvalidWord(String),
    InvalidBits(String),
    ChecksumUnequal()
}
