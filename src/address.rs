use crate::{
    key::PubKey,
    hash,
    encoding::bech32,
    util::Network
};

/**
    A derived P2WPKH address together with the HASH160 it encodes.

    Both fields are safe to display and publish; they authenticate
    the owner of the corresponding private key without revealing it.
*/
#[derive(Debug, Clone, PartialEq)]
pub struct AddressInfo {
    pub hash160: [u8; 20],
    pub address: String
}

pub struct Address;

impl Address {
    /**
        Creates a segwit v0 wallet address from a compressed public key.
        * Bech32( version 0 | Ripemd160( Sha256( Public Key ) ) )
    */
    pub fn p2wpkh(pk: &PubKey, network: Network) -> Result<AddressInfo, bech32::Bech32Err> {
        let hash160 = hash::hash160(pk.as_bytes());
        let address = bech32::encode_p2wpkh(&hash160, &network)?;

        Ok(AddressInfo { hash160, address })
    }
}

impl AddressInfo {
    pub fn hash160_hex(&self) -> String {
        crate::util::encode_02x(&self.hash160)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        key::{PrivKey, PubKey},
        util::decode_02x
    };

    //Master public key of the "abandon ... about" BIP-39 vector
    const TEST_PUB_KEY_HEX: &str = "03d902f35f560e0470c63313c7369168d9d7df2d49bf295fd9fb7cb109ccee0494";

    fn test_pub_key() -> PubKey {
        PubKey::from_slice(&decode_02x(TEST_PUB_KEY_HEX)).unwrap()
    }

    #[test]
    fn p2wpkh_address_known_answer() {
        let info = Address::p2wpkh(&test_pub_key(), Network::Bitcoin).unwrap();
        assert_eq!(info.hash160_hex(), "73c5da0a03d2d0803b731f04242bb40ced2f8bbc");
        assert_eq!(info.address, "bc1qw0za5zsr6tggqwmnruzzg2a5pnkjlzaus8upyg");
    }

    #[test]
    fn testnet_p2wpkh_address_known_answer() {
        let info = Address::p2wpkh(&test_pub_key(), Network::Testnet).unwrap();
        assert_eq!(info.address, "tb1qw0za5zsr6tggqwmnruzzg2a5pnkjlzau6p8jlm");
    }

    #[test]
    fn decoded_program_matches_hash160() {
        let info = Address::p2wpkh(&test_pub_key(), Network::Bitcoin).unwrap();
        let (version, program) = crate::encoding::bech32::decode(&info.address).unwrap();
        assert_eq!(version, 0);
        assert_eq!(program, info.hash160);
    }

    #[test]
    fn random_p2wpkh_addresses() {
        use crate::entropy::{Entropy, EntropyBits};

        for _ in 0..5 {
            let entropy = Entropy::generate(EntropyBits::Bits256).unwrap();
            let k = PrivKey::from_slice(entropy.as_bytes()).unwrap();
            let pk = PubKey::from_priv_key(&k);
            let info = Address::p2wpkh(&pk, Network::Bitcoin).unwrap();
            assert!(info.address.starts_with("bc1q"));
            assert_eq!(info.hash160.len(), 20);
        }
    }
}
