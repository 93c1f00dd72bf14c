// Copyright (c) 2018-2024 The MobileCoin Foundation

//! Errors which can occur while handling wrapped quote blobs.

use crate::header::KeyType;
use alloc::string::{String, ToString};
use displaydoc::Display;
use mc_util_encodings::Error as EncodingError;
use serde::{Deserialize, Serialize};

/// An enumeration of errors while decoding a wrapped quote blob
#[derive(
    Clone, Copy, Debug, Deserialize, Display, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize,
)]
pub enum BlobError {
    /// The blob input was empty
    EmptyInput,
    /// Could not decode the base64 payload: {0}
    Encoding(EncodingError),
    /// Unknown signing key type: {0}
    UnknownKeyType(u32),
    /// Unknown quote type: {0}
    UnknownQuoteType(u32),
    /// The field at {0}..{1} exceeds the {2} byte payload
    MalformedLayout(usize, usize, usize),
}

impl From<EncodingError> for BlobError {
    fn from(src: EncodingError) -> Self {
        BlobError::Encoding(src)
    }
}

/// An enumeration of errors while reconstructing an RSA public key from the
/// raw key material embedded in a wrapped quote blob
#[derive(Clone, Debug, Deserialize, Display, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
pub enum PubKeyError {
    /// Key reconstruction requires an RSA blob, found {0}
    WrongKeyType(KeyType),
    /// No public key material present
    EmptyKeyMaterial,
    /// The exponent length {0} exceeds the {1} byte key material
    ExponentLength(u32, usize),
    /// The public exponent does not fit in a machine integer
    ExponentOverflow,
    /// The key material was rejected: {0}
    InvalidKey(String),
    /// Could not encode the public key: {0}
    Encoding(String),
}

impl From<rsa::Error> for PubKeyError {
    fn from(src: rsa::Error) -> Self {
        match src {
            rsa::Error::PublicExponentTooLarge => PubKeyError::ExponentOverflow,
            other => PubKeyError::InvalidKey(other.to_string()),
        }
    }
}

impl From<rsa::pkcs8::spki::Error> for PubKeyError {
    fn from(src: rsa::pkcs8::spki::Error) -> Self {
        PubKeyError::Encoding(src.to_string())
    }
}
