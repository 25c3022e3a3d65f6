pub mod decode;
pub mod encode;
pub use crate::base_common::Alphabet;

pub const ALPHABET: Alphabet<32> = match Alphabet::new(b"ABCDEFGHIJKLMNOPQRSTUVWXYZ234567") {
    Ok(alphabet) => alphabet,
    Err(_) => panic!("Could not build alphabet"),
};

pub const HEX_ALPHABET: Alphabet<32> = match Alphabet::new(b"0123456789ABCDEFGHIJKLMNOPQRSTUV") {
    Ok(alphabet) => alphabet,
    Err(_) => panic!("Could not build alphabet"),
};

pub use decode::{decode, decode_into, decode_lenient, Decoder};
pub use encode::{encode, encode_into, encode_unpadded, Encoder};
