// Copyright (c) 2018-2024 The MobileCoin Foundation

//! Decoding for wrapped quote blobs.
//!
//! The secure key caching library bundles a hardware attestation quote
//! together with a description of the enclave's signing key into a single
//! binary "wrapped" blob, transmitted as base64. This crate parses that
//! layout into [`WrappedQuote`], handles the bare (unwrapped) quote payload
//! as [`BareQuote`], and rebuilds a standard PEM-encoded RSA public key
//! from the raw key material a blob embeds.
//!
//! Signature verification of the quote itself, and certificate validation
//! of the reconstructed key, are the business of downstream consumers.

#![no_std]

extern crate alloc;

mod bare;
mod error;
mod header;
mod pubkey;
mod reader;
mod wrapped;

pub use crate::{
    bare::BareQuote,
    error::{BlobError, PubKeyError},
    header::{BlobHeader, KeyDetails, KeyType, QuoteInfo, QuoteType, HEADER_LEN},
    pubkey::rsa_public_key_pem,
    wrapped::WrappedQuote,
};
