// this is an implementation of a key-insulated identity based encryption scheme
// with verifiable key rotation, over curve BLS12-381

extern crate bigint;
extern crate ff;
extern crate hkdf;
#[macro_use]
extern crate lazy_static;
extern crate pairing_plus as pairing;
extern crate sha2;
extern crate zeroize;

mod bls12;
mod ciphertext;
mod domain_sep;
mod engine;
mod ibe_err;
mod identity;
mod keystore;
mod membership;
mod oracle;
mod param;
mod prng;
mod serdes;
#[cfg(any(test, feature = "toy"))]
mod toy;
mod user_key;
mod util;

#[cfg(test)]
mod test;

pub use bls12::{Bls12Engine, CipherGroup, KeyGroup};
pub use ciphertext::Ciphertext;
pub use engine::{Dual, Group, PairingEngine, ScalarField};
pub use ibe_err::IbeError;
pub use identity::Identity;
pub use keystore::KeyStore;
pub use oracle::{Oracles, Sha2Oracles};
pub use param::{MasterSecret, SystemParameters, MIN_SEED_LEN, VALID_CIPHERSUITE};
pub use prng::PRNG;
pub use serdes::IbeSerDes;
#[cfg(any(test, feature = "toy"))]
pub use toy::{ToyEngine, ToyGt, ToyPoint, ToyScalar, TOY_ORDER};
pub use user_key::UserKey;

use std::marker::PhantomData;

/// Insulate's interface, parameterized by a pairing engine and
/// an oracle suite.
///
/// The five phases are:
/// * `param_gen`: issuer samples the system parameters and the master secret
/// * `key_gen`: issuer extracts the key of an identity, at version 1
/// * `key_update`: the key holder advances the key, without the master secret
/// * `encrypt`: anyone encrypts a message of GT to an identity
/// * `decrypt`: the key holder checks the tag and recovers the message
#[derive(Debug, Clone, Copy, Default)]
pub struct Insulate<E: PairingEngine, O: Oracles<E> = Sha2Oracles> {
    _engine: PhantomData<E>,
    _oracles: PhantomData<O>,
}

/// Insulate over BLS12-381.
pub type InsulateBls12 = Insulate<Bls12Engine>;

impl<E: PairingEngine, O: Oracles<E>> Insulate<E, O> {
    /// Generates the system parameters and the master secret from a seed.
    /// Returns an error if
    /// * the seed is not long enough
    /// * the ciphersuite is not supported
    /// * a sampled exponent is zero
    pub fn param_gen(seed: &[u8]) -> Result<(SystemParameters<E>, MasterSecret<E>), IbeError> {
        SystemParameters::setup(seed)
    }

    /// Issues the version 1 key of an identity.
    /// Returns an error if
    /// * the seed is not long enough
    /// * the parameters and the master secret disagree on the ciphersuite
    /// * the identity is degenerate
    pub fn key_gen(
        pp: &SystemParameters<E>,
        msk: &MasterSecret<E>,
        id: &Identity,
        seed: &[u8],
    ) -> Result<UserKey<E>, IbeError> {
        UserKey::init(pp, msk, &id.to_scalar(), seed)
    }

    /// Advances a key to the target version. The key is left as is
    /// on error.
    pub fn key_update(
        sk: &mut UserKey<E>,
        pp: &SystemParameters<E>,
        tar_version: u64,
        seed: &[u8],
    ) -> Result<(), IbeError> {
        sk.update(pp, tar_version, seed)
    }

    /// Encrypts a message to an identity, under a label.
    pub fn encrypt(
        pp: &SystemParameters<E>,
        id: &Identity,
        msg: &E::Gt,
        label: &[u8],
        seed: &[u8],
    ) -> Result<Ciphertext<E>, IbeError> {
        Ciphertext::encrypt::<O>(pp, &id.to_scalar(), msg, label, seed)
    }

    /// Decrypts a ciphertext. Returns `IntegrityFailure` if the tag
    /// does not verify under the key.
    pub fn decrypt(
        ct: &Ciphertext<E>,
        sk: &UserKey<E>,
        pp: &SystemParameters<E>,
    ) -> Result<E::Gt, IbeError> {
        ct.decrypt::<O>(sk, pp)
    }

    /// Checks a key against the public parameters.
    pub fn validate_key(sk: &UserKey<E>, pp: &SystemParameters<E>) -> bool {
        sk.validate(pp)
    }
}
