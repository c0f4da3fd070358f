pub mod bech32;
