use super::{Alphabet, ALPHABET, URL_ALPHABET};
pub use crate::base_padded::decode::Error;

// A single symbol carries 6 bits, less than one byte, so three padding
// characters never appear in well-formed output.
const INVALID_PAD_COUNTS: &[usize] = &[3];

pub struct Decoder<'a> {
    decoder: crate::base_padded::Decoder<'a, 64>,
}

impl<'a> Decoder<'a> {
    pub const fn new(alphabet: &'a Alphabet<64>, padding: u8) -> Result<Self, Error> {
        match crate::base_padded::Decoder::new(alphabet, padding, 6, INVALID_PAD_COUNTS) {
            Ok(decoder) => Ok(Self { decoder }),
            Err(error) => Err(error),
        }
    }

    pub fn decode_into(&self, input: impl AsRef<[u8]>, output: &mut impl AsMut<[u8]>) -> Result<usize, Error> {
        self.decoder.decode_into(input, output)
    }

    pub fn decode(&self, input: impl AsRef<[u8]>) -> Result<Vec<u8>, Error> {
        self.decoder.decode(input)
    }

    pub fn decode_lenient(&self, input: impl AsRef<[u8]>) -> Result<Vec<u8>, Error> {
        self.decoder.decode_lenient(input)
    }

    pub fn default() -> &'static Self {
        &DECODER
    }

    pub fn url() -> &'static Self {
        &URL_DECODER
    }
}

const DECODER: Decoder = match Decoder::new(&ALPHABET, 0x3d) {
    Ok(decoder) => decoder,
    Err(_) => panic!("Could not build decoder"),
};

const URL_DECODER: Decoder = match Decoder::new(&URL_ALPHABET, 0x3d) {
    Ok(decoder) => decoder,
    Err(_) => panic!("Could not build decoder"),
};

pub fn decode_into(input: impl AsRef<[u8]>, output: &mut impl AsMut<[u8]>) -> Result<usize, Error> {
    Decoder::default().decode_into(input, output)
}

pub fn decode(input: impl AsRef<[u8]>) -> Result<Vec<u8>, Error> {
    Decoder::default().decode(input)
}

pub fn decode_lenient(input: impl AsRef<[u8]>) -> Result<Vec<u8>, Error> {
    Decoder::default().decode_lenient(input)
}
