use crate::engine::Group;
use crate::util::hash_to_field;
use crate::Bls12Engine;
use pairing::bls12_381::{Fq12, Fr};







/// This module tests the prng and the os2ip conversion.
mod prng;


pub(crate) const PARAM_SEED: &[u8] = b"this is a very very long seed for parameter testing";
pub(crate) const KEY_SEED: &[u8] = b"this is a very very long seed for key gen testing";
pub(crate) const UPDATE_SEED: &[u8] = b"this is a very very long seed for key update testing";
pub(crate) const ENC_SEED: &[u8] = b"this is a very very long seed for encryption testing";

/// A message of GT derived from a tag, e(P1, P2)^H(tag).
pub(crate) fn gt_message(tag: &[u8]) -> Fq12 {
    let x: Fr = hash_to_field(b"test message", tag, 0);
    <Fq12 as Group>::generator().pow(&x)
}

/// An encryption seed that differs per index.
pub(crate) fn indexed_seed(base: &[u8], i: u64) -> Vec<u8> {
    let mut seed = base.to_vec();
    seed.extend_from_slice(&i.to_be_bytes());
    seed
}

pub(crate) type Bls = Bls12Engine;
