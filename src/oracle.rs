//! The primitive oracles `H`, `KDF` and `Ext` that the protocol consumes.
//!
//! All three are deterministic functions of their inputs; the protocol's
//! integrity tag relies on the encryptor and the decryptor deriving the
//! very same values from `D` and `D'`.

use crate::domain_sep::{DOM_SEP_EXT, DOM_SEP_HASH_CT, DOM_SEP_KDF};
use crate::engine::{Group, PairingEngine, ScalarField};
use crate::ibe_err::IbeError;
use crate::prng::expand;
use crate::util::{encode_list, hash_to_field};
use hkdf::Hkdf;
use sha2::Sha512;
use zeroize::Zeroize;

/// The oracle suite of an engine.
pub trait Oracles<E: PairingEngine> {
    /// `H(c1, c2, c3, label) -> Zp`
    fn hash(c1: &E::Gt, c2: &E::G2, c3: &E::G2, label: &[u8]) -> E::Scalar;

    /// `KDF(x) -> (k1, k2)`
    fn kdf(x: &E::Gt) -> Result<(E::Scalar, E::Scalar), IbeError>;

    /// `Ext(x, label) -> GT`, a one-time pad for the message.
    fn ext(x: &E::Gt, label: &[u8]) -> Result<E::Gt, IbeError>;
}

/// SHA-256 hash-to-field for `H`; HKDF-SHA512 for `KDF` and `Ext`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Sha2Oracles;

impl<E: PairingEngine> Oracles<E> for Sha2Oracles {
    fn hash(c1: &E::Gt, c2: &E::G2, c3: &E::G2, label: &[u8]) -> E::Scalar {
        let input = encode_list(&[&c1.to_bytes(), &c2.to_bytes(), &c3.to_bytes(), label]);
        hash_to_field(DOM_SEP_HASH_CT.as_ref(), &input, 0)
    }

    fn kdf(x: &E::Gt) -> Result<(E::Scalar, E::Scalar), IbeError> {
        let mut ikm = x.to_bytes();
        let hk = Hkdf::<Sha512>::extract(Some(DOM_SEP_KDF.as_ref()), &ikm);
        ikm.zeroize();

        let mut okm = [0u8; 128];
        let res = expand(&hk, &[], &mut okm);
        let keys = (
            E::Scalar::from_okm(&okm[0..64]),
            E::Scalar::from_okm(&okm[64..128]),
        );
        okm.zeroize();
        res.map(|_| keys)
    }

    fn ext(x: &E::Gt, label: &[u8]) -> Result<E::Gt, IbeError> {
        let mut ikm = x.to_bytes();
        let hk = Hkdf::<Sha512>::extract(Some(DOM_SEP_EXT.as_ref()), &ikm);
        ikm.zeroize();

        let mut okm = [0u8; 64];
        let res = expand(&hk, label, &mut okm);
        let h = E::Scalar::from_okm(&okm);
        okm.zeroize();
        res?;
        Ok(E::Gt::generator().pow(&h))
    }
}
