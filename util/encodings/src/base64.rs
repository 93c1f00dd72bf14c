// Copyright (c) 2018-2024 The MobileCoin Foundation

//! To/From Base64 traits

use crate::error::Error;
use alloc::{string::String, vec::Vec};
use base64::{engine::general_purpose::STANDARD, Engine};

/// A trait to support reading a string as base64.
pub trait FromBase64: Sized {
    /// The error type used to handle parse errors
    type Error;

    /// Deserialize the given string into a new object.
    fn from_base64(s: &str) -> Result<Self, Self::Error>;
}

/// A trait to support encoding a given object as a base64 string.
pub trait ToBase64 {
    /// Serialize the contents of this object into a newly allocated string.
    fn to_base64_owned(&self) -> String;
}

impl<T: AsRef<[u8]>> ToBase64 for T {
    fn to_base64_owned(&self) -> String {
        b64_encode(self.as_ref())
    }
}

/// Decode a standard-alphabet, padded base64 string.
pub fn b64_decode(s: &str) -> Result<Vec<u8>, Error> {
    Ok(STANDARD.decode(s)?)
}

/// Encode the given bytes as a standard-alphabet, padded base64 string.
pub fn b64_encode(bytes: &[u8]) -> String {
    STANDARD.encode(bytes)
}

#[cfg(test)]
mod tests {
    extern crate std;
    use super::*;

    #[test]
    fn round_trip() {
        let data = [0u8, 1, 2, 3, 254, 255];
        let encoded = b64_encode(&data);
        assert_eq!(
            b64_decode(&encoded).expect("Could not decode encoded bytes"),
            &data
        );
    }

    #[test]
    fn empty_round_trip() {
        assert_eq!(b64_encode(&[]), "");
        assert!(b64_decode("")
            .expect("Could not decode empty string")
            .is_empty());
    }

    #[test]
    fn invalid_character() {
        assert_eq!(b64_decode("ab!d"), Err(Error::InvalidInput));
    }

    #[test]
    fn invalid_length() {
        assert_eq!(b64_decode("abcde"), Err(Error::InvalidInputLength));
    }
}
