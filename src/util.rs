use std::convert::TryInto;

/*
    Decodes hex strings into a byte vector
*/
pub fn decode_02x(hex_str: &str) -> Vec<u8> {
    hex::decode(hex_str).expect("Hex decode error")
}

/*
    Encodes byte slices into hex string
*/
pub fn encode_02x(bytes: &[u8]) -> String {
    hex::encode(bytes)
}

/*
    Encodes byte slices into a binary string, 8 bits per byte
*/
pub fn encode_binary(bytes: &[u8]) -> String {
    bytes.iter().map(|x| format!("{:08b}", x)).collect::<String>()
}

/**
    Takes in a binary integer as a string and returns its integer value.
*/
pub fn decode_binary_string(b: &str) -> usize {
    usize::from_str_radix(b, 2).expect("Binary decode error")
}

/**
    Converts a vector into an array
*/
pub fn try_into<T, const N: usize>(v: Vec<T>) -> [T; N] {
    v.try_into()
        .unwrap_or_else(|v: Vec<T>| panic!("Expected {}, found {}", N, v.len()))
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Network {
    Bitcoin,
    Testnet
}
