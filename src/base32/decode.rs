use super::{Alphabet, ALPHABET, HEX_ALPHABET};
pub use crate::base_padded::decode::Error;

// Padding counts with no corresponding whole-byte truncation of a 5-byte
// group (valid counts are 0, 1, 3, 4 and 6).
const INVALID_PAD_COUNTS: &[usize] = &[8, 7, 5, 2];

pub struct Decoder<'a> {
    decoder: crate::base_padded::Decoder<'a, 32>,
}

impl<'a> Decoder<'a> {
    pub const fn new(alphabet: &'a Alphabet<32>, padding: u8) -> Result<Self, Error> {
        match crate::base_padded::Decoder::new(alphabet, padding, 5, INVALID_PAD_COUNTS) {
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

    pub fn hex() -> &'static Self {
        &HEX_DECODER
    }
}

const DECODER: Decoder = match Decoder::new(&ALPHABET, 0x3d) {
    Ok(decoder) => decoder,
    Err(_) => panic!("Could not build decoder"),
};

const HEX_DECODER: Decoder = match Decoder::new(&HEX_ALPHABET, 0x3d) {
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

#[cfg(test)]
mod tests {
    use super::{Decoder, Error, ALPHABET};

    #[test]
    fn decode() {
        assert_eq!(super::decode(""), Ok(b"".to_vec()));
        assert_eq!(super::decode("MY======"), Ok(b"f".to_vec()));
        assert_eq!(super::decode("MZXQ===="), Ok(b"fo".to_vec()));
        assert_eq!(super::decode("MZXW6==="), Ok(b"foo".to_vec()));
        assert_eq!(super::decode("MZXW6YQ="), Ok(b"foob".to_vec()));
        assert_eq!(super::decode("MZXW6YTB"), Ok(b"fooba".to_vec()));
        assert_eq!(super::decode("MZXW6YTBOI======"), Ok(b"foobar".to_vec()));
        assert_eq!(super::decode("CT5ZYA6ZPY======"), Ok(vec![0x14, 0xfb, 0x9c, 0x03, 0xd9, 0x7e]));
    }

    #[test]
    fn decode_hex() {
        assert_eq!(Decoder::hex().decode("CO======"), Ok(b"f".to_vec()));
        assert_eq!(Decoder::hex().decode("CPNG===="), Ok(b"fo".to_vec()));
        assert_eq!(Decoder::hex().decode("CPNMU==="), Ok(b"foo".to_vec()));
        assert_eq!(Decoder::hex().decode("CPNMUOG="), Ok(b"foob".to_vec()));
        assert_eq!(Decoder::hex().decode("CPNMUOJ1"), Ok(b"fooba".to_vec()));
        assert_eq!(Decoder::hex().decode("CPNMUOJ1E8======"), Ok(b"foobar".to_vec()));
    }

    #[test]
    fn decode_lenient() {
        assert_eq!(super::decode_lenient(""), Ok(b"".to_vec()));
        assert_eq!(super::decode_lenient("MY"), Ok(b"f".to_vec()));
        assert_eq!(super::decode_lenient("MZXQ"), Ok(b"fo".to_vec()));
        assert_eq!(super::decode_lenient("MZXW6"), Ok(b"foo".to_vec()));
        assert_eq!(super::decode_lenient("MZXW6YQ"), Ok(b"foob".to_vec()));
        assert_eq!(super::decode_lenient("MZXW6YTBOI"), Ok(b"foobar".to_vec()));
        // Explicit padding is still accepted.
        assert_eq!(super::decode_lenient("MZXW6==="), Ok(b"foo".to_vec()));
    }

    #[test]
    fn invalid_data() {
        assert_eq!(super::decode("MZXW6"), Err(Error::InvalidData { length: 5 }));
        assert_eq!(super::decode("MY"), Err(Error::InvalidData { length: 2 }));
        assert_eq!(super::decode("MZXW6YTBOI"), Err(Error::InvalidData { length: 10 }));
    }

    #[test]
    fn invalid_padding() {
        assert_eq!(super::decode("MZXW6Y=="), Err(Error::InvalidPadding { count: 2 }));
        assert_eq!(super::decode("MZX====="), Err(Error::InvalidPadding { count: 5 }));
        assert_eq!(super::decode("M======="), Err(Error::InvalidPadding { count: 7 }));
        assert_eq!(super::decode("========"), Err(Error::InvalidPadding { count: 8 }));
        assert_eq!(super::decode_lenient("MZXW6Y"), Err(Error::InvalidPadding { count: 2 }));
        assert_eq!(super::decode_lenient("M"), Err(Error::InvalidPadding { count: 7 }));
    }

    #[test]
    fn padding_outside_final_group() {
        assert_eq!(
            super::decode("MY======MZXW6==="),
            Err(Error::InvalidCharacter { character: '=', index: 2 })
        );
    }

    #[test]
    fn invalid_character() {
        assert_eq!(
            super::decode("M@XW6==="),
            Err(Error::InvalidCharacter { character: '@', index: 1 })
        );
        assert_eq!(
            super::decode("mzxw6==="),
            Err(Error::InvalidCharacter { character: 'm', index: 0 })
        );
        assert_eq!(
            super::decode([0xc3, 0x28]),
            Err(Error::NonAsciiCharacter { character: 0xc3, index: 0 })
        );
    }

    #[test]
    fn decode_into() {
        let mut output = [0u8; 3];
        assert_eq!(super::decode_into("MZXW6===", &mut output), Ok(3));
        assert_eq!(&output, b"foo");
        let mut output = [0u8; 2];
        assert_eq!(super::decode_into("MZXW6===", &mut output), Err(Error::BufferTooSmall));
    }

    #[test]
    fn custom_padding() {
        let decoder = Decoder::new(&ALPHABET, b'*').unwrap();
        assert_eq!(decoder.decode("MZXW6***"), Ok(b"foo".to_vec()));
        assert_eq!(
            decoder.decode("MZXW6==="),
            Err(Error::InvalidCharacter { character: '=', index: 5 })
        );
    }

    #[test]
    fn invalid_padding_character() {
        assert_eq!(
            Decoder::new(&ALPHABET, b'Z').err(),
            Some(Error::InvalidPaddingCharacter { character: b'Z' })
        );
    }
}
