/*
    Hash module includes the hash primitives needed by the
    derivation pipeline. All heavy lifting is delegated to
    the RustCrypto crates; this module only fixes the
    compositions the pipeline uses.
*/

use crate::{
    Ripemd160, Sha256, Sha512, Digest,
    Hmac, Mac
};

/*
    Takes in a byte array and returns the sha256 hash of it as a 32 byte array
*/
pub fn sha256<T>(input: T) -> [u8; 32]
where T: AsRef<[u8]>
{
    let mut r = Sha256::new();
    r.update(input);
    r.finalize().into()
}

/*
    Takes in a byte array and returns the Ripemd160(Sha256()) hash of it.
    This is the standard public-key-to-address hash (HASH160).
*/
pub fn hash160<T>(input: T) -> [u8; 20]
where T: AsRef<[u8]>
{
    let mut r = Ripemd160::new();
    r.update(sha256(input));
    r.finalize().into()
}

/*
    HMAC-SHA512 of the given data under the given key.
    Used for the BIP-32 master key split.
*/
pub fn hmac_sha512(data: &[u8], key: &[u8]) -> [u8; 64] {
    let mut mac = Hmac::<Sha512>::new_from_slice(key)
        .expect("HMAC accepts keys of any length");
    mac.update(data);

    let mut out = [0u8; 64];
    out.copy_from_slice(&mac.finalize().into_bytes());
    out
}

/*
    PBKDF2 with HMAC-SHA512 as the PRF.
    Used for the BIP-39 mnemonic to seed stretch.
    The iteration count is an intentional slow-hashing defense.
*/
pub fn pbkdf2_hmac_sha512(password: &[u8], salt: &[u8], rounds: u32) -> [u8; 64] {
    let mut out = [0u8; 64];
    pbkdf2::pbkdf2_hmac::<Sha512>(password, salt, rounds, &mut out);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::encode_02x;

    #[test]
    fn sha256_empty_input() {
        assert_eq!(
            encode_02x(&sha256([])),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }

    #[test]
    fn hash160_of_known_pub_key() {
        let pub_key = crate::util::decode_02x(
            "03d902f35f560e0470c63313c7369168d9d7df2d49bf295fd9fb7cb109ccee0494"
        );
        assert_eq!(
            encode_02x(&hash160(&pub_key)),
            "73c5da0a03d2d0803b731f04242bb40ced2f8bbc"
        );
    }

    #[test]
    fn hmac_sha512_splits_to_64_bytes() {
        let out = hmac_sha512(&[0u8; 64], b"Bitcoin seed");
        assert_eq!(out.len(), 64);
    }
}
