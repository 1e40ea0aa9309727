//! A toy engine of prime order 23, for hand-checkable test vectors.
//!
//! Every group is represented by exponents: an element `g^x` is stored as
//! `x mod 23`. The group law becomes addition, exponentiation becomes
//! multiplication and the pairing becomes `e(g^a, g^b) = gt^{ab}`.
//! This offers no security whatsoever.

use crate::engine::{Group, PairingEngine, ScalarField};
use crate::ibe_err::IbeError;

/// The order of every toy group.
pub const TOY_ORDER: u64 = 23;

/// A symmetric toy setting where `G1 = G2`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ToyEngine;

/// An element of `Z_23`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ToyScalar(u64);

/// An element of the source group, held as its discrete log.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ToyPoint(u64);

/// An element of the target group, held as its discrete log.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ToyGt(u64);

impl ToyScalar {
    pub fn new(v: u64) -> Self {
        ToyScalar(v % TOY_ORDER)
    }

    pub fn value(self) -> u64 {
        self.0
    }
}

impl ToyPoint {
    /// `g^x` for the generator `g`.
    pub fn new(x: u64) -> Self {
        ToyPoint(x % TOY_ORDER)
    }

    /// The discrete log of the point.
    pub fn log(self) -> u64 {
        self.0
    }
}

impl ToyGt {
    pub fn new(x: u64) -> Self {
        ToyGt(x % TOY_ORDER)
    }

    pub fn log(self) -> u64 {
        self.0
    }
}

impl PairingEngine for ToyEngine {
    type Scalar = ToyScalar;
    type G1 = ToyPoint;
    type G2 = ToyPoint;
    type Gt = ToyGt;

    const CIPHERSUITE: u8 = 0xFF;

    fn pair(a: &ToyPoint, b: &ToyPoint) -> ToyGt {
        ToyGt((a.0 * b.0) % TOY_ORDER)
    }
}

fn decode_residue(bytes: &[u8]) -> Result<u64, IbeError> {
    if bytes.len() != 1 || u64::from(bytes[0]) >= TOY_ORDER {
        return Err(IbeError::Deserialization);
    }
    Ok(u64::from(bytes[0]))
}

impl ScalarField for ToyScalar {
    const BYTES: usize = 1;

    fn zero() -> Self {
        ToyScalar(0)
    }

    fn one() -> Self {
        ToyScalar(1)
    }

    fn is_zero(&self) -> bool {
        self.0 == 0
    }

    fn add(&self, other: &Self) -> Self {
        ToyScalar((self.0 + other.0) % TOY_ORDER)
    }

    fn mul(&self, other: &Self) -> Self {
        ToyScalar((self.0 * other.0) % TOY_ORDER)
    }

    fn neg(&self) -> Self {
        ToyScalar((TOY_ORDER - self.0) % TOY_ORDER)
    }

    fn from_u64(v: u64) -> Self {
        ToyScalar(v % TOY_ORDER)
    }

    fn from_okm(okm: &[u8]) -> Self {
        let v = okm
            .iter()
            .fold(0u64, |acc, b| (acc * 256 + u64::from(*b)) % TOY_ORDER);
        ToyScalar(v)
    }

    fn to_bytes(&self) -> Vec<u8> {
        vec![self.0 as u8]
    }

    fn from_bytes(bytes: &[u8]) -> Result<Self, IbeError> {
        decode_residue(bytes).map(ToyScalar)
    }
}

macro_rules! toy_group_impl {
    ($name:ident) => {
        impl Group for $name {
            type Scalar = ToyScalar;

            const BYTES: usize = 1;

            fn identity() -> Self {
                $name(0)
            }

            fn generator() -> Self {
                $name(1)
            }

            fn is_identity(&self) -> bool {
                self.0 == 0
            }

            fn mul(&self, other: &Self) -> Self {
                $name((self.0 + other.0) % TOY_ORDER)
            }

            fn pow(&self, e: &ToyScalar) -> Self {
                $name((self.0 * e.0) % TOY_ORDER)
            }

            fn inv(&self) -> Self {
                $name((TOY_ORDER - self.0) % TOY_ORDER)
            }

            fn to_bytes(&self) -> Vec<u8> {
                vec![self.0 as u8]
            }

            fn from_bytes(bytes: &[u8]) -> Result<Self, IbeError> {
                decode_residue(bytes).map($name)
            }
        }
    };
}

toy_group_impl!(ToyPoint);
toy_group_impl!(ToyGt);
