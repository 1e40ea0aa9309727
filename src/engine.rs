//! The pairing engine capability that the protocol is written against.
//!
//! The protocol never touches a concrete curve. It asks a `PairingEngine`
//! for three groups of a common prime order `p`, the scalar field `Zp`,
//! and the bilinear map `e: G1 x G2 -> GT`. All groups are written
//! multiplicatively, matching the algebra of the scheme.
//!
//! Two engines ship with the crate:
//! * `Bls12Engine` over BLS12-381, the production backend;
//! * `ToyEngine`, a symmetric group of order 23 for test vectors,
//!   built for tests and with the `toy` feature.

use crate::ibe_err::IbeError;
use std::fmt::Debug;

/// The scalar field `Zp` shared by all groups of an engine.
pub trait ScalarField: Sized + Clone + PartialEq + Debug + Send + Sync + 'static {
    /// Length of the canonical encoding, in bytes.
    const BYTES: usize;

    fn zero() -> Self;

    fn one() -> Self;

    fn is_zero(&self) -> bool;

    /// `self + other mod p`
    fn add(&self, other: &Self) -> Self;

    /// `self * other mod p`
    fn mul(&self, other: &Self) -> Self;

    /// `-self mod p`
    fn neg(&self) -> Self;

    /// `v mod p`
    fn from_u64(v: u64) -> Self;

    /// Interpret a big-endian octet string as an integer and reduce it mod p.
    /// This is how both the PRNG and the oracles land in `Zp`.
    fn from_okm(okm: &[u8]) -> Self;

    /// Canonical big-endian encoding of `BYTES` bytes.
    fn to_bytes(&self) -> Vec<u8>;

    /// Decode a canonical encoding; values `>= p` are rejected.
    fn from_bytes(bytes: &[u8]) -> Result<Self, IbeError>;
}

/// A cyclic group of prime order, written multiplicatively.
pub trait Group: Sized + Clone + PartialEq + Debug + Send + Sync + 'static {
    type Scalar: ScalarField;

    /// Length of the canonical encoding, in bytes.
    const BYTES: usize;

    /// The neutral element.
    fn identity() -> Self;

    /// The fixed generator of the group.
    fn generator() -> Self;

    fn is_identity(&self) -> bool;

    /// The group law.
    fn mul(&self, other: &Self) -> Self;

    /// `self^e`
    fn pow(&self, e: &Self::Scalar) -> Self;

    /// `self^{-1}`
    fn inv(&self) -> Self;

    /// Canonical encoding of `BYTES` bytes.
    fn to_bytes(&self) -> Vec<u8>;

    /// Decode a canonical encoding. Implementations reject values that are
    /// not members of the prime order group.
    fn from_bytes(bytes: &[u8]) -> Result<Self, IbeError>;
}

/// A bilinear group setting `e: G1 x G2 -> GT` with
/// `e(a^x, b^y) = e(a, b)^{xy}`.
///
/// `G1` is the group holding the secret keys and `g2, g3`;
/// `G2` is the group holding the ciphertext components and `g1`.
/// For a symmetric setting the two may be the same type.
///
/// Engines are zero sized markers; the supertraits only let the
/// structures that are generic over an engine derive their impls.
pub trait PairingEngine:
    Sized + Clone + Copy + Debug + Default + PartialEq + Eq + Send + Sync + 'static
{
    type Scalar: ScalarField;
    type G1: Group<Scalar = Self::Scalar>;
    type G2: Group<Scalar = Self::Scalar>;
    type Gt: Group<Scalar = Self::Scalar>;

    /// Identifies the engine together with its oracle suite.
    const CIPHERSUITE: u8;

    /// The bilinear map.
    fn pair(a: &Self::G1, b: &Self::G2) -> Self::Gt;
}

/// A value that lives in both source groups with the same discrete log,
/// e.g. `g = (P1^r, P2^r)`. The scheme pairs `g`, `U` and `V` against
/// elements of either side, so both copies are kept.
#[derive(Clone, PartialEq, Debug)]
pub struct Dual<E: PairingEngine> {
    /// the copy in the key-side group
    pub key: E::G1,
    /// the copy in the ciphertext-side group
    pub ct: E::G2,
}

impl<E: PairingEngine> Dual<E> {
    /// `(P1^x, P2^x)` for the fixed generators of the two groups.
    pub fn from_exponent(x: &E::Scalar) -> Self {
        Dual {
            key: E::G1::generator().pow(x),
            ct: E::G2::generator().pow(x),
        }
    }

    pub fn mul(&self, other: &Self) -> Self {
        Dual {
            key: self.key.mul(&other.key),
            ct: self.ct.mul(&other.ct),
        }
    }

    pub fn pow(&self, e: &E::Scalar) -> Self {
        Dual {
            key: self.key.pow(e),
            ct: self.ct.pow(e),
        }
    }

    /// True if either copy is the identity.
    pub fn is_identity(&self) -> bool {
        self.key.is_identity() || self.ct.is_identity()
    }

    /// Checks that both copies share one discrete log:
    /// `e(key, P2) == e(P1, ct)`.
    pub fn is_consistent(&self) -> bool {
        E::pair(&self.key, &E::G2::generator()) == E::pair(&E::G1::generator(), &self.ct)
    }
}
