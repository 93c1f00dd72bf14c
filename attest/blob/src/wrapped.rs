// Copyright (c) 2018-2024 The MobileCoin Foundation

//! The wrapped quote blob format.
//!
//! The upstream key caching library frames its attestation payload as a
//! fixed 20-byte header, a signing-key descriptor, a quote descriptor, an
//! optional PCK certificate, the raw public key material (big-endian
//! exponent then modulus for RSA keys), and finally the quote itself. All
//! header and descriptor integers are little-endian; only the key material
//! is big-endian.

use crate::{
    error::{BlobError, PubKeyError},
    header::{BlobHeader, KeyDetails, KeyType, QuoteInfo, QuoteType},
    pubkey,
    reader::BlobReader,
};
use alloc::{string::String, vec::Vec};
use core::{
    fmt::{Debug, Formatter, Result as FmtResult},
    ops::Range,
};
use hex_fmt::HexFmt;
use mc_util_encodings::{b64_decode, FromBase64};
use serde::{Deserialize, Serialize};

/// Fixed padding between the descriptors and the quote on the EC path.
///
/// The EC descriptor does not describe its key material size; the writer
/// reserves these bytes instead. The EC layout has not been confirmed
/// against a producing implementation, so nothing in them is exposed.
const EC_KEY_PADDING: usize = 8;

/// A parsed wrapped quote blob.
///
/// Owns the decoded payload; the accessors return views into it. The
/// payload is never modified after construction.
#[derive(Clone, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct WrappedQuote {
    header: BlobHeader,
    key_details: KeyDetails,
    quote_info: QuoteInfo,
    pub_key_range: Range<usize>,
    quote_range: Range<usize>,
    data: Vec<u8>,
}

impl WrappedQuote {
    /// Parse an already-decoded wrapped blob payload.
    ///
    /// The certificate, public key and quote ranges are computed and
    /// validated against the payload length here; a blob whose descriptors
    /// point outside the payload is rejected, never truncated.
    pub fn parse(data: Vec<u8>) -> Result<Self, BlobError> {
        let mut reader = BlobReader::new(&data);
        let header = BlobHeader::parse(&mut reader)?;
        let key_details = KeyDetails::parse(header.key_type(), &mut reader)?;
        let quote_info = QuoteInfo::parse(header.quote_type(), &mut reader)?;

        // An ECDSA blob embeds the PCK certificate between the descriptors
        // and the public key. It is skipped, not exposed.
        reader.skip(quote_info.cert_len())?;

        let pub_key_range = reader.read_range(key_details.public_key_len())?;
        if let KeyDetails::Ec { .. } = key_details {
            reader.skip(EC_KEY_PADDING)?;
        }
        let quote_range = reader.read_range(header.quote_size() as usize)?;

        Ok(Self {
            header,
            key_details,
            quote_info,
            pub_key_range,
            quote_range,
            data,
        })
    }

    /// The parsed blob header.
    pub fn header(&self) -> &BlobHeader {
        &self.header
    }

    /// The parsed signing-key descriptor.
    pub fn key_details(&self) -> &KeyDetails {
        &self.key_details
    }

    /// The parsed quote descriptor.
    pub fn quote_info(&self) -> &QuoteInfo {
        &self.quote_info
    }

    /// Flavor of the embedded quote.
    pub fn quote_type(&self) -> QuoteType {
        self.header.quote_type()
    }

    /// Flavor of the described signing key.
    pub fn key_type(&self) -> KeyType {
        self.header.key_type()
    }

    /// Total length in bytes of the decoded payload.
    pub fn raw_len(&self) -> usize {
        self.data.len()
    }

    /// The embedded attestation quote.
    pub fn quote_bytes(&self) -> &[u8] {
        &self.data[self.quote_range.clone()]
    }

    /// The embedded raw public key material.
    ///
    /// For RSA keys this is the big-endian exponent followed by the
    /// big-endian modulus; for EC keys the layout exposes no key material
    /// and this is empty.
    pub fn public_key_bytes(&self) -> &[u8] {
        &self.data[self.pub_key_range.clone()]
    }

    /// Exponent length in bytes of an embedded RSA key.
    pub fn rsa_exponent_len(&self) -> Option<u32> {
        match self.key_details {
            KeyDetails::Rsa { exponent_len, .. } => Some(exponent_len),
            KeyDetails::Ec { .. } => None,
        }
    }

    /// Reconstruct the embedded RSA public key as a PEM document.
    ///
    /// Refuses blobs which do not describe an RSA key; the EC layout
    /// exposes no key material to reconstruct from.
    pub fn rsa_public_key_pem(&self) -> Result<String, PubKeyError> {
        match self.key_details {
            KeyDetails::Rsa { exponent_len, .. } => {
                pubkey::rsa_public_key_pem(self.public_key_bytes(), exponent_len)
            }
            KeyDetails::Ec { .. } => Err(PubKeyError::WrongKeyType(self.key_type())),
        }
    }
}

/// The AsRef implementation for WrappedQuote returns the full decoded
/// payload.
impl AsRef<[u8]> for WrappedQuote {
    fn as_ref(&self) -> &[u8] {
        &self.data
    }
}

impl Debug for WrappedQuote {
    fn fmt(&self, f: &mut Formatter) -> FmtResult {
        write!(
            f,
            "WrappedQuote: {{ header: {:?}, key_details: {:?}, quote_info: {:?}, public_key: {}, quote: {} }}",
            self.header,
            self.key_details,
            self.quote_info,
            HexFmt(self.public_key_bytes()),
            HexFmt(self.quote_bytes()),
        )
    }
}

impl FromBase64 for WrappedQuote {
    type Error = BlobError;

    /// Parse a base64-encoded string containing a wrapped quote blob.
    fn from_base64(s: &str) -> Result<Self, BlobError> {
        if s.is_empty() {
            return Err(BlobError::EmptyInput);
        }
        Self::parse(b64_decode(s)?)
    }
}
