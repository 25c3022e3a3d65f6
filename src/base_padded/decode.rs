use super::{div_ceil, Alphabet};
use crate::base_common::alphabet;
use std::{error, fmt};

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Error {
    BufferTooSmall,
    InvalidCharacter { character: char, index: usize },
    InvalidData { length: usize },
    InvalidPadding { count: usize },
    InvalidPaddingCharacter { character: u8 },
    NonAsciiCharacter { character: u8, index: usize },
}

impl error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::BufferTooSmall => write!(f, "Output buffer too small"),
            Self::InvalidCharacter { character, index } => write!(f, "Invalid character '{}' at index {}", character, index),
            Self::InvalidData { length } => write!(f, "Invalid data length {}", length),
            Self::InvalidPadding { count } => write!(f, "Invalid number of padding characters ({})", count),
            Self::InvalidPaddingCharacter { character } => write!(f, "Invalid padding character {:#02x}", character),
            Self::NonAsciiCharacter { character, index } => write!(f, "Non-ascii character {:#02x} at index {}", character, index),
        }
    }
}

impl From<alphabet::DecodeError> for Error {
    fn from(error: alphabet::DecodeError) -> Self {
        match error {
            alphabet::DecodeError::InvalidCharacter { character, index } => Error::InvalidCharacter { character, index },
            alphabet::DecodeError::NonAsciiCharacter { character, index } => Error::NonAsciiCharacter { character, index },
        }
    }
}

pub struct Decoder<'a, const N: usize> {
    alphabet: &'a Alphabet<N>,
    padding: u8,
    bits: usize,
    group_symbols: usize,
    invalid_pad_counts: &'static [usize],
}

impl<'a, const N: usize> Decoder<'a, N> {
    /// `invalid_pad_counts` enumerates the per-group padding counts that do
    /// not correspond to a whole number of decoded bytes.
    pub const fn new(
        alphabet: &'a Alphabet<N>,
        padding: u8,
        bits: usize,
        invalid_pad_counts: &'static [usize],
    ) -> Result<Self, Error> {
        assert!(alphabet.len() == (1 << bits));
        if padding >= 128 || alphabet.contains(padding) {
            return Err(Error::InvalidPaddingCharacter { character: padding });
        }
        let mut group_symbols = 1;
        while (group_symbols * bits) % 8 != 0 {
            group_symbols += 1;
        }
        Ok(Self {
            alphabet,
            padding,
            bits,
            group_symbols,
            invalid_pad_counts,
        })
    }

    fn decode_into_slice(&self, input: &[u8], output: &mut [u8], strict: bool) -> Result<usize, Error> {
        let group_count = div_ceil(input.len(), self.group_symbols);
        let mut output_index = 0;
        for group_index in 0..group_count {
            let mut accumulator: u64 = 0;
            let mut values = 0;
            let mut pad_count = 0;
            for position in 0..self.group_symbols {
                let index = group_index * self.group_symbols + position;
                match input.get(index) {
                    Some(&character) if character == self.padding => {
                        // Padding is only valid in the last group.
                        if group_index + 1 != group_count {
                            return Err(Error::InvalidCharacter {
                                character: character as char,
                                index,
                            });
                        }
                        pad_count += 1;
                    }
                    Some(&character) => {
                        let value = self.alphabet.decode(character, index)?;
                        accumulator = (accumulator << self.bits) | (value as u64);
                        values += 1;
                    }
                    None => {
                        if strict {
                            return Err(Error::InvalidData { length: input.len() });
                        }
                        pad_count += 1;
                    }
                }
            }
            if self.invalid_pad_counts.contains(&pad_count) {
                return Err(Error::InvalidPadding { count: pad_count });
            }
            let width = self.group_symbols * self.bits;
            let buffer = accumulator << (pad_count * self.bits);
            let mut count = (values * self.bits) / 8;
            if count == 0 {
                // A group consisting of padding alone still decodes to a
                // single zero byte.
                count = 1;
            }
            for position in 0..count {
                *output.get_mut(output_index).ok_or(Error::BufferTooSmall)? = (buffer >> (width - 8 * (position + 1))) as u8;
                output_index += 1;
            }
        }
        Ok(output_index)
    }

    fn decode_vec(&self, input: &[u8], strict: bool) -> Result<Vec<u8>, Error> {
        let mut output = vec![0u8; div_ceil(input.len() * self.bits, 8)];
        let len = self.decode_into_slice(input, &mut output, strict)?;
        output.truncate(len);
        Ok(output)
    }

    pub fn decode_into(&self, input: impl AsRef<[u8]>, output: &mut impl AsMut<[u8]>) -> Result<usize, Error> {
        self.decode_into_slice(input.as_ref(), output.as_mut(), true)
    }

    pub fn decode(&self, input: impl AsRef<[u8]>) -> Result<Vec<u8>, Error> {
        self.decode_vec(input.as_ref(), true)
    }

    pub fn decode_lenient(&self, input: impl AsRef<[u8]>) -> Result<Vec<u8>, Error> {
        self.decode_vec(input.as_ref(), false)
    }
}
