// Copyright (c) 2018-2024 The MobileCoin Foundation

//! Bare quote payloads.

use crate::error::BlobError;
use alloc::{borrow::ToOwned, vec::Vec};
use core::{
    fmt::{Display, Formatter, Result as FmtResult},
    ops::Deref,
};
use hex_fmt::HexFmt;
use mc_util_encodings::{b64_decode, FromBase64};
use serde::{Deserialize, Serialize};

/// A quote delivered without the wrapped-blob framing.
///
/// Some callers submit the attestation library's quote directly: no header,
/// no key material, just the quote bytes as base64. The payload is opaque
/// to this crate and handed to downstream verifiers verbatim.
#[derive(Clone, Debug, Default, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
#[repr(transparent)]
pub struct BareQuote {
    data: Vec<u8>,
}

impl BareQuote {
    pub fn new(quote: &[u8]) -> Self {
        BareQuote {
            data: quote.to_owned(),
        }
    }

    pub fn size(&self) -> u32 {
        self.data.len() as u32
    }
}

impl Deref for BareQuote {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        self.data.as_ref()
    }
}

impl Display for BareQuote {
    fn fmt(&self, formatter: &mut Formatter) -> FmtResult {
        write!(formatter, "{}", HexFmt(self))
    }
}

impl AsRef<[u8]> for BareQuote {
    fn as_ref(&self) -> &[u8] {
        self.data.as_ref()
    }
}

impl FromBase64 for BareQuote {
    type Error = BlobError;

    /// Decode a base64-encoded bare quote, with no layout interpretation.
    fn from_base64(s: &str) -> Result<Self, BlobError> {
        if s.is_empty() {
            return Err(BlobError::EmptyInput);
        }
        Ok(BareQuote {
            data: b64_decode(s)?,
        })
    }
}

#[cfg(test)]
mod test {
    extern crate std;

    use super::*;
    use mc_util_encodings::{b64_encode, Error as EncodingError, ToBase64};
    use std::string::ToString;

    #[test]
    fn round_trip() {
        let payload: std::vec::Vec<u8> = (0..437).map(|i| (i * 7) as u8).collect();
        let quote =
            BareQuote::from_base64(&b64_encode(&payload)).expect("Could not decode quote");
        assert_eq!(&*quote, &payload[..]);
        assert_eq!(quote.size(), 437);
        assert_eq!(quote.to_base64_owned(), b64_encode(&payload));
    }

    #[test]
    fn empty_input() {
        assert_eq!(BareQuote::from_base64(""), Err(BlobError::EmptyInput));
    }

    #[test]
    fn bad_base64() {
        assert_eq!(
            BareQuote::from_base64("@@@@"),
            Err(BlobError::Encoding(EncodingError::InvalidInput))
        );
    }

    #[test]
    fn display_is_hex() {
        let quote = BareQuote::new(&[0xde, 0xad, 0xbe, 0xef]);
        assert_eq!(quote.to_string(), "deadbeef");
    }
}
