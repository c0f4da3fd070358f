use unicode_normalization::UnicodeNormalization;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::{
    hash,
    util,
    entropy::Entropy
};
use super::{
    lang::Language,
    MnemonicErr
};

//Fixed BIP-39 seed stretch parameters. Do not tune these,
//they are part of the interoperability contract.
const PBKDF2_ROUNDS: u32 = 2048;
const SALT_PREFIX: &str = "mnemonic";

/**
    The SHA-256 based integrity suffix appended to the entropy
    before word encoding.

    Keeps the full digest around for didactic display; only the
    leading entropy_bits/32 bits take part in the encoding.
*/
pub struct Checksum {
    pub hash: [u8; 32],
    pub bits: String
}

/**
    Computes the checksum of the given entropy.
    The checksum is the leading entropy_bits/32 bits of
    Sha256(entropy). (4 bits for 128 bit entropy, 8 for 256)
*/
pub fn checksum(entropy: &Entropy) -> Checksum {
    let hash = hash::sha256(entropy.as_bytes());
    let checksum_len = entropy.bit_len() / 32;
    let bits = util::encode_binary(&hash)[0..checksum_len].to_string();

    Checksum { hash, bits }
}

/**
    One 11 bit group of the entropy+checksum bit string and the
    word it indexes. Retained purely for display; the canonical
    value is the word sequence itself.
*/
#[derive(Debug, Clone, PartialEq)]
pub struct WordGroup {
    pub bits: String,
    pub index: usize,
    pub word: String
}

pub struct Mnemonic {
    lang: Language,
    groups: Vec<WordGroup>,
    phrase: String
}

impl Mnemonic {
    /**
        Encodes entropy into a mnemonic phrase.

        The entropy bits are concatenated with the checksum bits,
        partitioned into consecutive 11 bit groups left to right,
        and each group indexes the fixed 2048 word dictionary.
    */
    pub fn from_entropy(entropy: &Entropy, lang: Language) -> Self {
        let checksum = checksum(entropy);
        let bit_string = format!("{}{}", util::encode_binary(entropy.as_bytes()), checksum.bits);

        //12 words for 128 bit entropy, 24 for 256. Divides evenly by construction.
        let mut groups: Vec<WordGroup> = Vec::with_capacity(bit_string.len() / 11);
        for i in 0..bit_string.len() / 11 {
            let bits = &bit_string[i*11..i*11 + 11];
            let index = util::decode_binary_string(bits);
            groups.push(WordGroup {
                bits: bits.to_string(),
                index,
                word: lang.word_list()[index].to_string()
            });
        }

        let phrase = groups.iter()
            .map(|g| g.word.as_str())
            .collect::<Vec<&str>>()
            .join(" ");

        Self { lang, groups, phrase }
    }

    /**
        Recovers a mnemonic from a saved phrase.

        Every word must be in the dictionary, the word count must
        be 12 or 24, and the embedded checksum must match the
        embedded entropy.
    */
    pub fn from_phrase(phrase: &str, lang: Language) -> Result<Self, MnemonicErr> {
        let words: Vec<&str> = phrase.split_whitespace().collect();
        match words.len() {
            12 | 24 => { },
            x => return Err(MnemonicErr::InvalidBits(
                format!("Expected 12 or 24 words. Found {}", x)
            ))
        }

        let mut groups: Vec<WordGroup> = Vec::with_capacity(words.len());
        for word in words {
            let index = match lang.word_index(word) {
                Some(x) => x,
                None => return Err(MnemonicErr::InvalidWord(word.to_string()))
            };
            groups.push(WordGroup {
                bits: format!("{:011b}", index),
                index,
                word: word.to_string()
            });
        }

        let mnemonic = Self {
            lang,
            phrase: groups.iter()
                .map(|g| g.word.as_str())
                .collect::<Vec<&str>>()
                .join(" "),
            groups
        };

        //Checksum validation happens while decoding back to entropy
        mnemonic.to_entropy()?;
        Ok(mnemonic)
    }

    /**
        Decodes the mnemonic back into its entropy, verifying the
        embedded checksum on the way. Inverse of from_entropy().
    */
    pub fn to_entropy(&self) -> Result<Entropy, MnemonicErr> {
        let bit_string = self.binary_string();
        let entropy_bits = bit_string.len() * 32 / 33;
        let checksum_bits = &bit_string[entropy_bits..];

        let mut bytes: Vec<u8> = Vec::with_capacity(entropy_bits / 8);
        for i in 0..entropy_bits / 8 {
            bytes.push(util::decode_binary_string(&bit_string[i*8..i*8 + 8]) as u8);
        }

        let entropy = Entropy::from_bytes(&bytes)
            .map_err(|_| MnemonicErr::InvalidBits(
                format!("Expected 128 or 256 entropy bits. Found {}", entropy_bits)
            ))?;

        //Recompute the checksum over the decoded entropy and compare
        if checksum(&entropy).bits != checksum_bits {
            return Err(MnemonicErr::ChecksumUnequal());
        }

        Ok(entropy)
    }

    /**
        Stretches the mnemonic (plus optional passphrase) into the
        64 byte seed.

        PBKDF2-HMAC-SHA512 over the NFKD normalized phrase with
        salt "mnemonic"+passphrase, 2048 rounds. NFKD is part of
        the interoperability contract, not a nicety.
    */
    pub fn to_seed(&self, passphrase: &str) -> Seed {
        let password = self.phrase.nfkd().collect::<String>();
        let salt = format!("{}{}", SALT_PREFIX, passphrase).nfkd().collect::<String>();

        Seed(hash::pbkdf2_hmac_sha512(
            password.as_bytes(),
            salt.as_bytes(),
            PBKDF2_ROUNDS
        ))
    }

    pub fn phrase(&self) -> &str {
        &self.phrase
    }

    pub fn groups(&self) -> &[WordGroup] {
        &self.groups
    }

    pub fn word_count(&self) -> usize {
        self.groups.len()
    }

    pub fn language(&self) -> Language {
        self.lang
    }

    /**
        The full entropy+checksum bit string the words encode.
    */
    pub fn binary_string(&self) -> String {
        self.groups.iter().map(|g| g.bits.as_str()).collect::<String>()
    }
}

/**
    The 64 byte seed produced by the PBKDF2 stretch.
    Root secret of the HD tree, zeroed on drop.
*/
#[derive(Clone, PartialEq, Zeroize, ZeroizeOnDrop)]
pub struct Seed(pub(crate) [u8; 64]);

impl Seed {
    pub fn from_slice(bytes: &[u8]) -> Option<Self> {
        if bytes.len() != 64 { return None }
        Some(Self(util::try_into(bytes.to_vec())))
    }

    pub fn as_bytes(&self) -> &[u8; 64] {
        &self.0
    }

    /**
        Explicit hex projection; Display is redacted.
    */
    pub fn reveal_hex(&self) -> String {
        util::encode_02x(&self.0)
    }
}
