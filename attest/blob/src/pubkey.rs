// Copyright (c) 2018-2024 The MobileCoin Foundation

//! RSA public key reconstruction from raw wrapped-blob key material.

use crate::error::PubKeyError;
use alloc::string::String;
use rsa::{
    pkcs8::{EncodePublicKey, LineEnding},
    BigUint, RsaPublicKey,
};

/// Rebuild a PEM-encoded RSA public key from raw key material.
///
/// The wrapped blob stores the key as the big-endian public exponent
/// followed by the big-endian modulus; `exponent_len` is the split point,
/// taken from the blob's key descriptor. The output is a standard
/// SubjectPublicKeyInfo document in PEM armor.
///
/// Exponents wider than 64 bits are rejected with
/// [`PubKeyError::ExponentOverflow`] rather than truncated; this bounds the
/// supported exponent size.
pub fn rsa_public_key_pem(key_bytes: &[u8], exponent_len: u32) -> Result<String, PubKeyError> {
    if key_bytes.is_empty() {
        return Err(PubKeyError::EmptyKeyMaterial);
    }
    if exponent_len as usize > key_bytes.len() {
        return Err(PubKeyError::ExponentLength(exponent_len, key_bytes.len()));
    }
    let (exponent_bytes, modulus_bytes) = key_bytes.split_at(exponent_len as usize);

    let exponent = BigUint::from_bytes_be(exponent_bytes);
    let modulus = BigUint::from_bytes_be(modulus_bytes);

    if exponent.bits() > 64 {
        return Err(PubKeyError::ExponentOverflow);
    }

    let key = RsaPublicKey::new(modulus, exponent)?;
    Ok(key.to_public_key_pem(LineEnding::LF)?)
}

#[cfg(test)]
mod test {
    extern crate std;

    use super::*;
    use alloc::{vec, vec::Vec};
    use rsa::{pkcs8::DecodePublicKey, traits::PublicKeyParts};

    /// A deterministic 2048-bit modulus, high bit set, odd.
    fn modulus_bytes() -> Vec<u8> {
        let mut bytes: Vec<u8> = (0..256).map(|i| (i as u8).wrapping_mul(31) | 1).collect();
        bytes[0] |= 0x80;
        bytes
    }

    #[test]
    fn reconstruct_known_key() {
        let modulus = modulus_bytes();
        let mut key_bytes = vec![0x01, 0x00, 0x01];
        key_bytes.extend_from_slice(&modulus);

        let pem = rsa_public_key_pem(&key_bytes, 3).expect("Could not reconstruct key");
        assert!(pem.starts_with("-----BEGIN PUBLIC KEY-----\n"));
        assert!(pem.ends_with("-----END PUBLIC KEY-----\n"));

        let parsed = RsaPublicKey::from_public_key_pem(&pem).expect("Could not parse PEM back");
        assert_eq!(parsed.e(), &BigUint::from(65537u32));
        assert_eq!(parsed.n(), &BigUint::from_bytes_be(&modulus));
    }

    #[test]
    fn empty_key_material() {
        assert_eq!(
            rsa_public_key_pem(&[], 3),
            Err(PubKeyError::EmptyKeyMaterial)
        );
    }

    #[test]
    fn exponent_len_past_end() {
        assert_eq!(
            rsa_public_key_pem(&[1, 0, 1], 4),
            Err(PubKeyError::ExponentLength(4, 3))
        );
    }

    #[test]
    fn exponent_overflow() {
        let mut key_bytes = vec![0xffu8; 9];
        key_bytes.extend_from_slice(&modulus_bytes());
        assert_eq!(
            rsa_public_key_pem(&key_bytes, 9),
            Err(PubKeyError::ExponentOverflow)
        );
    }

    #[test]
    fn rejected_key_material() {
        // An exponent of zero is not a usable public key.
        let mut key_bytes = vec![0x00];
        key_bytes.extend_from_slice(&modulus_bytes());
        assert!(matches!(
            rsa_public_key_pem(&key_bytes, 1),
            Err(PubKeyError::InvalidKey(_))
        ));
    }
}
