use super::{Alphabet, ALPHABET, HEX_ALPHABET};
pub use crate::base_padded::encode::Error;

pub struct Encoder<'a> {
    encoder: crate::base_padded::Encoder<'a, 32>,
}

impl<'a> Encoder<'a> {
    pub const fn new(alphabet: &'a Alphabet<32>, padding: u8) -> Result<Self, Error> {
        match crate::base_padded::Encoder::new(alphabet, padding, 5) {
            Ok(encoder) => Ok(Self { encoder }),
            Err(error) => Err(error),
        }
    }

    pub fn encode_into(&self, input: impl AsRef<[u8]>, output: &mut impl AsMut<[u8]>) -> Result<usize, Error> {
        self.encoder.encode_into(input, output)
    }

    pub fn encode(&self, input: impl AsRef<[u8]>) -> String {
        self.encoder.encode(input)
    }

    pub fn encode_unpadded(&self, input: impl AsRef<[u8]>) -> String {
        self.encoder.encode_unpadded(input)
    }

    pub fn default() -> &'static Self {
        &ENCODER
    }

    pub fn hex() -> &'static Self {
        &HEX_ENCODER
    }
}

const ENCODER: Encoder = match Encoder::new(&ALPHABET, 0x3d) {
    Ok(encoder) => encoder,
    Err(_) => panic!("Could not build encoder"),
};

const HEX_ENCODER: Encoder = match Encoder::new(&HEX_ALPHABET, 0x3d) {
    Ok(encoder) => encoder,
    Err(_) => panic!("Could not build encoder"),
};

pub fn encode_into(input: impl AsRef<[u8]>, output: &mut impl AsMut<[u8]>) -> Result<usize, Error> {
    Encoder::default().encode_into(input, output)
}

pub fn encode(input: impl AsRef<[u8]>) -> String {
    Encoder::default().encode(input)
}

pub fn encode_unpadded(input: impl AsRef<[u8]>) -> String {
    Encoder::default().encode_unpadded(input)
}
