//! This file implements the additional utilities that are required by the oracles.
use crate::engine::ScalarField;
use sha2::Digest;

/// Hash an octet string into `Zp`, as in the `hash_to_field` of the
/// [BLS draft](https://github.com/pairingwg/bls_standard/blob/master/minutes/spec-v1.md)
/// with `m = 1`, `hash_fn = sha256` and `hash_reps = 2`:
///
///   `msg' = sha256(dst | input) | ctr`,
///   `t = sha256(msg' | 1 | 1) | sha256(msg' | 1 | 2)`,
///   `e = OS2IP(t) mod p`.
///
/// The 64 bytes of `t` keep the reduction bias negligible.
pub fn hash_to_field<S: ScalarField>(dst: &[u8], input: &[u8], ctr: u8) -> S {
    let mut hasher = sha2::Sha256::new();
    hasher.input(dst);
    hasher.input(input);
    let mut m_prime = hasher.result().to_vec();
    m_prime.append(&mut i2osp(ctr, 1));

    let mut t: Vec<u8> = Vec::with_capacity(64);
    for j in 1..=2u8 {
        let mut hasher = sha2::Sha256::new();
        hasher.input(&m_prime);
        hasher.input(&i2osp(1, 1));
        hasher.input(&i2osp(j, 1));
        t.extend_from_slice(hasher.result().as_ref());
    }

    S::from_okm(&t)
}

/// Length-prefixed concatenation, so that distinct lists of
/// byte strings never hash to the same input.
pub fn encode_list(parts: &[&[u8]]) -> Vec<u8> {
    let mut out = vec![];
    for p in parts {
        out.extend_from_slice(&(p.len() as u64).to_be_bytes());
        out.extend_from_slice(p);
    }
    out
}

// I2OSP for a single byte integer, left padded to `len` bytes
fn i2osp(int: u8, len: usize) -> Vec<u8> {
    let mut tmp = vec![0u8; len - 1];
    tmp.push(int);
    tmp
}
