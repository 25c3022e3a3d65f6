//! Configurable base32 and base64 binary-to-text codecs.
//!
//! Both codecs share the same shape: a [`base_common::Alphabet`] validated
//! at construction, an `Encoder` with padded and unpadded output, and a
//! `Decoder` with strict and lenient input handling. Standard, extended-hex
//! (base32) and URL-safe (base64) instances are predefined; custom alphabets
//! and padding characters are supported through the codec constructors.
//!
//! # Example
//!
//! ```
//! let encoded = base_encoding::base64::encode(b"foobar");
//! assert_eq!(encoded, "Zm9vYmFy");
//! let decoded = base_encoding::base64::decode(&encoded).unwrap();
//! assert_eq!(decoded, b"foobar");
//! ```

pub mod base32;
pub mod base64;
pub mod base_common;
pub mod base_padded;
