// Copyright (c) 2018-2024 The MobileCoin Foundation

//! Traits and support for common encoding types

#![cfg_attr(all(not(test), not(doctest)), no_std)]

extern crate alloc;

mod base64;
mod error;

pub use crate::{
    base64::{b64_decode, b64_encode, FromBase64, ToBase64},
    error::Error,
};
