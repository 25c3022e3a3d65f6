use super::{div_ceil, Alphabet};
use std::{error, fmt};

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Error {
    BufferTooSmall,
    InvalidPaddingCharacter { character: u8 },
}

impl error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Error::BufferTooSmall => write!(f, "Output buffer too small"),
            Error::InvalidPaddingCharacter { character } => write!(f, "Invalid padding character {:#02x}", character),
        }
    }
}

pub struct Encoder<'a, const N: usize> {
    alphabet: &'a Alphabet<N>,
    padding: u8,
    bits: usize,
}

impl<'a, const N: usize> Encoder<'a, N> {
    /// The padding character must be ascii and must not collide with an
    /// alphabet symbol.
    pub const fn new(alphabet: &'a Alphabet<N>, padding: u8, bits: usize) -> Result<Self, Error> {
        assert!(alphabet.len() == (1 << bits));
        if padding >= 128 || alphabet.contains(padding) {
            return Err(Error::InvalidPaddingCharacter { character: padding });
        }
        Ok(Self { alphabet, padding, bits })
    }

    fn encode_into_slice(&self, input: &[u8], output: &mut [u8], include_padding: bool) -> Result<usize, Error> {
        let mut accumulator: usize = 0;
        let mut bits: usize = 0;
        let mut index = 0;
        for &value in input {
            accumulator = (accumulator << 8) | (value as usize);
            bits += 8;
            while bits >= self.bits {
                bits -= self.bits;
                *output.get_mut(index).ok_or(Error::BufferTooSmall)? = self.alphabet.encode(accumulator >> bits);
                index += 1;
                accumulator = accumulator & ((1 << bits) - 1);
            }
        }
        if bits > 0 {
            *output.get_mut(index).ok_or(Error::BufferTooSmall)? = self.alphabet.encode(accumulator << (self.bits - bits));
            index += 1;
        }
        if include_padding {
            while (index * self.bits) % 8 != 0 {
                *output.get_mut(index).ok_or(Error::BufferTooSmall)? = self.padding;
                index += 1;
            }
        }
        Ok(index)
    }

    fn encode_string(&self, input: &[u8], include_padding: bool) -> String {
        let mut output = vec![0u8; div_ceil(input.len(), self.bits) * 8];
        let len = self.encode_into_slice(input, &mut output, include_padding).unwrap();
        output.truncate(len);
        unsafe { String::from_utf8_unchecked(output) }
    }

    pub fn encode_into(&self, input: impl AsRef<[u8]>, output: &mut impl AsMut<[u8]>) -> Result<usize, Error> {
        self.encode_into_slice(input.as_ref(), output.as_mut(), true)
    }

    pub fn encode(&self, input: impl AsRef<[u8]>) -> String {
        self.encode_string(input.as_ref(), true)
    }

    pub fn encode_unpadded(&self, input: impl AsRef<[u8]>) -> String {
        self.encode_string(input.as_ref(), false)
    }
}
