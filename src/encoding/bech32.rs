/*
    Module implements segwit v0 bech32 address encoding on top
    of the rust-bitcoin bech32 crate. The charset and checksum
    polynomial are fixed by BIP-173; this is a wire format
    compatibility requirement, not a tunable.
*/

use bech32::{hrp, segwit, Hrp};

use crate::util::Network;

#[derive(Debug, PartialEq)]
pub enum Bech32Err {
    //A witness program that is not exactly 20 bytes here means an
    //upstream invariant was violated, not a user facing error.
    InvalidProgramLen(usize),
    CannotEncode(),
    InvalidAddress()
}

fn hrp_of(network: &Network) -> Hrp {
    match network {
        Network::Bitcoin => hrp::BC,
        Network::Testnet => hrp::TB
    }
}

/**
    Encodes a 20 byte public key hash as a P2WPKH address.

    The hash is regrouped into 5 bit words, the witness version 0
    is prepended (rendered as the "q" character) and the whole is
    checksummed per the Bech32 algorithm.
*/
pub fn encode_p2wpkh(pubkey_hash: &[u8], network: &Network) -> Result<String, Bech32Err> {
    if pubkey_hash.len() != 20 {
        return Err(Bech32Err::InvalidProgramLen(pubkey_hash.len()));
    }

    segwit::encode_v0(hrp_of(network), pubkey_hash)
        .map_err(|_| Bech32Err::CannotEncode())
}

/**
    Decodes a segwit address back into its witness version and
    program. Used to verify round trips.
*/
pub fn decode(address: &str) -> Result<(u8, Vec<u8>), Bech32Err> {
    let (_, version, program) = segwit::decode(address)
        .map_err(|_| Bech32Err::InvalidAddress())?;
    Ok((version.to_u8(), program))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::decode_02x;

    //HASH160 of the abandon-vector master public key
    const TEST_HASH160: &str = "73c5da0a03d2d0803b731f04242bb40ced2f8bbc";

    #[test]
    fn encode_known_hash() {
        let hash = decode_02x(TEST_HASH160);
        assert_eq!(
            encode_p2wpkh(&hash, &Network::Bitcoin).unwrap(),
            "bc1qw0za5zsr6tggqwmnruzzg2a5pnkjlzaus8upyg"
        );
        assert_eq!(
            encode_p2wpkh(&hash, &Network::Testnet).unwrap(),
            "tb1qw0za5zsr6tggqwmnruzzg2a5pnkjlzau6p8jlm"
        );
    }

    #[test]
    fn decode_round_trip() {
        let hash = decode_02x(TEST_HASH160);
        let address = encode_p2wpkh(&hash, &Network::Bitcoin).unwrap();
        let (version, program) = decode(&address).unwrap();
        assert_eq!(version, 0);
        assert_eq!(program, hash);
    }

    #[test]
    fn bad_program_length_rejected() {
        assert_eq!(
            encode_p2wpkh(&[0u8; 19], &Network::Bitcoin),
            Err(Bech32Err::InvalidProgramLen(19))
        );
        assert_eq!(
            encode_p2wpkh(&[0u8; 32], &Network::Bitcoin),
            Err(Bech32Err::InvalidProgramLen(32))
        );
    }

    #[test]
    fn v0_addresses_start_with_q() {
        let hash = decode_02x(TEST_HASH160);
        let address = encode_p2wpkh(&hash, &Network::Bitcoin).unwrap();
        //Witness version 0 is the "q" character in the bech32 charset
        assert!(address.starts_with("bc1q"));
    }
}
