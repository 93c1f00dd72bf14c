// Copyright (c) 2018-2024 The MobileCoin Foundation

//! The wrapped-blob header and the key/quote descriptors it selects.

use crate::{error::BlobError, reader::BlobReader};
use core::fmt::{Display, Formatter, Result as FmtResult};
use serde::{Deserialize, Serialize};

/// Length in bytes of the fixed header at the front of every wrapped blob.
pub const HEADER_LEN: usize = 20;

/// An enumeration of quote flavors a wrapped blob can carry
#[derive(Clone, Copy, Debug, Deserialize, Hash, Eq, Ord, PartialEq, PartialOrd, Serialize)]
#[repr(u32)]
pub enum QuoteType {
    /// An ECDSA quote, preceded in the payload by its PCK certificate
    Ecdsa = 1,
    /// A simulated quote produced without hardware support
    Software = 2,
}

impl Display for QuoteType {
    fn fmt(&self, formatter: &mut Formatter) -> FmtResult {
        let text = match self {
            QuoteType::Ecdsa => "ECDSA",
            QuoteType::Software => "Software",
        };
        write!(formatter, "{}", text)
    }
}

impl TryFrom<u32> for QuoteType {
    type Error = BlobError;

    fn try_from(src: u32) -> Result<Self, BlobError> {
        match src {
            1 => Ok(QuoteType::Ecdsa),
            2 => Ok(QuoteType::Software),
            other => Err(BlobError::UnknownQuoteType(other)),
        }
    }
}

/// An enumeration of signing key flavors a wrapped blob can describe
#[derive(Clone, Copy, Debug, Deserialize, Hash, Eq, Ord, PartialEq, PartialOrd, Serialize)]
#[repr(u32)]
pub enum KeyType {
    /// An RSA signing key
    Rsa = 1,
    /// An EC signing key
    Ec = 2,
}

impl Display for KeyType {
    fn fmt(&self, formatter: &mut Formatter) -> FmtResult {
        let text = match self {
            KeyType::Rsa => "RSA",
            KeyType::Ec => "EC",
        };
        write!(formatter, "{}", text)
    }
}

impl TryFrom<u32> for KeyType {
    type Error = BlobError;

    fn try_from(src: u32) -> Result<Self, BlobError> {
        match src {
            1 => Ok(KeyType::Rsa),
            2 => Ok(KeyType::Ec),
            other => Err(BlobError::UnknownKeyType(other)),
        }
    }
}

/// The fixed 20-byte header prefixed to every wrapped blob.
///
/// All fields are little-endian on the wire.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
pub struct BlobHeader {
    major_version: u32,
    minor_version: u32,
    quote_size: u32,
    quote_type: QuoteType,
    key_type: KeyType,
}

impl BlobHeader {
    /// Parse the header from the front of the payload.
    ///
    /// The key type is validated before the quote type, so a blob that is
    /// wrong on both counts reports the key type first.
    pub(crate) fn parse(reader: &mut BlobReader<'_>) -> Result<Self, BlobError> {
        let major_version = reader.read_u32()?;
        let minor_version = reader.read_u32()?;
        let quote_size = reader.read_u32()?;
        let quote_type_raw = reader.read_u32()?;
        let key_type_raw = reader.read_u32()?;

        let key_type = KeyType::try_from(key_type_raw)?;
        let quote_type = QuoteType::try_from(quote_type_raw)?;

        Ok(Self {
            major_version,
            minor_version,
            quote_size,
            quote_type,
            key_type,
        })
    }

    /// Read the major version of the wrapping layout.
    pub fn major_version(&self) -> u32 {
        self.major_version
    }

    /// Read the minor version of the wrapping layout.
    pub fn minor_version(&self) -> u32 {
        self.minor_version
    }

    /// Read the size in bytes of the embedded quote.
    pub fn quote_size(&self) -> u32 {
        self.quote_size
    }

    /// Read the flavor of the embedded quote.
    pub fn quote_type(&self) -> QuoteType {
        self.quote_type
    }

    /// Read the flavor of the described signing key.
    pub fn key_type(&self) -> KeyType {
        self.key_type
    }
}

/// The signing-key descriptor which follows the header, selected by
/// [`KeyType`].
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
pub enum KeyDetails {
    /// RSA keys describe their raw material as exponent then modulus.
    Rsa {
        /// Length in bytes of the big-endian public exponent
        exponent_len: u32,
        /// Length in bytes of the big-endian modulus
        modulus_len: u32,
    },
    /// The EC descriptor is a single reserved word.
    Ec {
        /// Reserved, carried but uninterpreted
        reserved: u32,
    },
}

impl KeyDetails {
    /// Parse the descriptor matching the header's key type.
    pub(crate) fn parse(
        key_type: KeyType,
        reader: &mut BlobReader<'_>,
    ) -> Result<Self, BlobError> {
        match key_type {
            KeyType::Rsa => Ok(KeyDetails::Rsa {
                exponent_len: reader.read_u32()?,
                modulus_len: reader.read_u32()?,
            }),
            KeyType::Ec => Ok(KeyDetails::Ec {
                reserved: reader.read_u32()?,
            }),
        }
    }

    /// Size in bytes of the raw public key material, where the layout
    /// defines one.
    ///
    /// The EC descriptor does not describe its key material, so EC blobs
    /// expose an empty key range.
    pub fn public_key_len(&self) -> usize {
        match self {
            KeyDetails::Rsa {
                exponent_len,
                modulus_len,
            } => (*exponent_len as usize) + (*modulus_len as usize),
            KeyDetails::Ec { .. } => 0,
        }
    }
}

/// The quote descriptor which follows the key descriptor, selected by
/// [`QuoteType`].
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
pub enum QuoteInfo {
    /// ECDSA quotes are preceded by a PCK certificate of this size.
    Ecdsa {
        /// Size in bytes of the embedded PCK certificate
        pck_cert_size: u32,
    },
    /// The software descriptor is a single reserved word.
    Software {
        /// Reserved, carried but uninterpreted
        reserved: u32,
    },
}

impl QuoteInfo {
    /// Parse the descriptor matching the header's quote type.
    pub(crate) fn parse(
        quote_type: QuoteType,
        reader: &mut BlobReader<'_>,
    ) -> Result<Self, BlobError> {
        match quote_type {
            QuoteType::Ecdsa => Ok(QuoteInfo::Ecdsa {
                pck_cert_size: reader.read_u32()?,
            }),
            QuoteType::Software => Ok(QuoteInfo::Software {
                reserved: reader.read_u32()?,
            }),
        }
    }

    /// Size in bytes of the certificate embedded ahead of the public key.
    pub fn cert_len(&self) -> usize {
        match self {
            QuoteInfo::Ecdsa { pck_cert_size } => *pck_cert_size as usize,
            QuoteInfo::Software { .. } => 0,
        }
    }
}
