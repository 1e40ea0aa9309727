//! The BLS12-381 backend.
//!
//! The scheme's key-side group is mapped to the curve's G2 and the
//! ciphertext-side group to the curve's G1, so ciphertexts get the
//! short points.
//!
//! Encodings:
//! * `Fr`: 32 bytes, big endian;
//! * key-side points: 96 bytes, compressed;
//! * ciphertext-side points: 48 bytes, compressed;
//! * `Fq12`: 576 bytes, the 12 `Fq` coefficients in big endian,
//!   ordered `c0.c0.c0, c0.c0.c1, c0.c1.c0, ..., c1.c2.c1`.

use crate::engine::{Group, PairingEngine, ScalarField};
use crate::ibe_err::IbeError;
use crate::membership::MembershipTesting;
use bigint::U512;
use ff::{Field, PrimeField};
use pairing::bls12_381::{
    Bls12, Fq, Fq12, FqRepr, Fr, FrRepr, G1Affine, G1Compressed, G2Affine, G2Compressed, G1, G2,
};
use pairing::{CurveAffine, CurveProjective, EncodedPoint, Engine};
use std::ops::Rem;
use zeroize::Zeroize;

/// The group that holds user keys and `g2, g3`.
pub type KeyGroup = G2;

/// The group that holds `c2, c3` and `g1`.
pub type CipherGroup = G1;

lazy_static! {
    // e(P1, P2), computed once; every `Ext` evaluation raises it
    static ref GT_GENERATOR: Fq12 = Bls12::pairing(G1Affine::one(), G2Affine::one());
}

/// BLS12-381 with the SHA-256 / HKDF-SHA512 oracle suite.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Bls12Engine;

impl PairingEngine for Bls12Engine {
    type Scalar = Fr;
    type G1 = KeyGroup;
    type G2 = CipherGroup;
    type Gt = Fq12;

    const CIPHERSUITE: u8 = 0x00;

    fn pair(a: &KeyGroup, b: &CipherGroup) -> Fq12 {
        // the curve's pairing takes the G1 point first
        Bls12::pairing(b.into_affine(), a.into_affine())
    }
}

impl ScalarField for Fr {
    const BYTES: usize = 32;

    fn zero() -> Self {
        <Fr as Field>::zero()
    }

    fn one() -> Self {
        <Fr as Field>::one()
    }

    fn is_zero(&self) -> bool {
        <Fr as Field>::is_zero(self)
    }

    fn add(&self, other: &Self) -> Self {
        let mut r = *self;
        r.add_assign(other);
        r
    }

    fn mul(&self, other: &Self) -> Self {
        let mut r = *self;
        r.mul_assign(other);
        r
    }

    fn neg(&self) -> Self {
        let mut r = *self;
        r.negate();
        r
    }

    fn from_u64(v: u64) -> Self {
        os2ip_mod_p(&v.to_be_bytes())
    }

    fn from_okm(okm: &[u8]) -> Self {
        os2ip_mod_p(okm)
    }

    fn to_bytes(&self) -> Vec<u8> {
        let repr = self.into_repr();
        // limbs are stored least significant first
        let mut buf = Vec::with_capacity(32);
        for limb in repr.as_ref().iter().rev() {
            buf.extend_from_slice(&limb.to_be_bytes());
        }
        buf
    }

    fn from_bytes(bytes: &[u8]) -> Result<Self, IbeError> {
        if bytes.len() != 32 {
            return Err(IbeError::Deserialization);
        }
        let mut limbs = [0u64; 4];
        for (i, chunk) in bytes.chunks(8).enumerate() {
            let mut tmp = [0u8; 8];
            tmp.copy_from_slice(chunk);
            limbs[3 - i] = u64::from_be_bytes(tmp);
        }
        Fr::from_repr(FrRepr(limbs)).map_err(|_| IbeError::Deserialization)
    }
}

// G1 and G2 only differ by their encodings.
macro_rules! curve_group_impl {
    ($projective:ident, $affine:ident, $compressed:ident, $len:expr) => {
        impl Group for $projective {
            type Scalar = Fr;

            const BYTES: usize = $len;

            fn identity() -> Self {
                $projective::zero()
            }

            fn generator() -> Self {
                $projective::one()
            }

            fn is_identity(&self) -> bool {
                self.is_zero()
            }

            fn mul(&self, other: &Self) -> Self {
                let mut r = *self;
                r.add_assign(other);
                r
            }

            fn pow(&self, e: &Fr) -> Self {
                let mut r = *self;
                r.mul_assign(*e);
                r
            }

            fn inv(&self) -> Self {
                let mut r = *self;
                r.negate();
                r
            }

            fn to_bytes(&self) -> Vec<u8> {
                $compressed::from_affine(self.into_affine()).as_ref().to_vec()
            }

            fn from_bytes(bytes: &[u8]) -> Result<Self, IbeError> {
                if bytes.len() != $len {
                    return Err(IbeError::Deserialization);
                }
                let mut buf = $compressed::empty();
                buf.as_mut().copy_from_slice(bytes);
                let p: $affine = match buf.into_affine() {
                    Ok(p) => p,
                    Err(_e) => {
                        tracing::debug!("invalid point encoding: {}", _e);
                        return Err(IbeError::Deserialization);
                    }
                };
                let p = p.into_projective();
                if !p.is_in_prime_group() {
                    return Err(IbeError::Deserialization);
                }
                Ok(p)
            }
        }
    };
}

curve_group_impl!(G1, G1Affine, G1Compressed, 48);
curve_group_impl!(G2, G2Affine, G2Compressed, 96);

impl Group for Fq12 {
    type Scalar = Fr;

    const BYTES: usize = 12 * 48;

    fn identity() -> Self {
        <Fq12 as Field>::one()
    }

    /// `e(P1, P2)` for the fixed curve generators.
    fn generator() -> Self {
        *GT_GENERATOR
    }

    fn is_identity(&self) -> bool {
        *self == <Fq12 as Field>::one()
    }

    fn mul(&self, other: &Self) -> Self {
        let mut r = *self;
        r.mul_assign(other);
        r
    }

    fn pow(&self, e: &Fr) -> Self {
        <Fq12 as Field>::pow(self, e.into_repr())
    }

    fn inv(&self) -> Self {
        // only zero has no inverse, and zero never enters the group
        self.inverse().unwrap_or_else(<Fq12 as Field>::zero)
    }

    fn to_bytes(&self) -> Vec<u8> {
        let mut buf = Vec::with_capacity(12 * 48);
        for fq6 in [&self.c0, &self.c1].iter() {
            for fq2 in [&fq6.c0, &fq6.c1, &fq6.c2].iter() {
                fq_to_bytes(&fq2.c0, &mut buf);
                fq_to_bytes(&fq2.c1, &mut buf);
            }
        }
        buf
    }

    fn from_bytes(bytes: &[u8]) -> Result<Self, IbeError> {
        if bytes.len() != 12 * 48 {
            return Err(IbeError::Deserialization);
        }
        let mut coeffs = Vec::with_capacity(12);
        for chunk in bytes.chunks(48) {
            coeffs.push(fq_from_bytes(chunk)?);
        }
        let mut x = <Fq12 as Field>::zero();
        {
            let mut slots = [
                &mut x.c0.c0.c0,
                &mut x.c0.c0.c1,
                &mut x.c0.c1.c0,
                &mut x.c0.c1.c1,
                &mut x.c0.c2.c0,
                &mut x.c0.c2.c1,
                &mut x.c1.c0.c0,
                &mut x.c1.c0.c1,
                &mut x.c1.c1.c0,
                &mut x.c1.c1.c1,
                &mut x.c1.c2.c0,
                &mut x.c1.c2.c1,
            ];
            for (slot, c) in slots.iter_mut().zip(coeffs.into_iter()) {
                **slot = c;
            }
        }
        if !x.is_in_prime_group() {
            return Err(IbeError::Deserialization);
        }
        Ok(x)
    }
}

fn fq_to_bytes(x: &Fq, buf: &mut Vec<u8>) {
    let repr = x.into_repr();
    for limb in repr.as_ref().iter().rev() {
        buf.extend_from_slice(&limb.to_be_bytes());
    }
}

fn fq_from_bytes(bytes: &[u8]) -> Result<Fq, IbeError> {
    let mut limbs = [0u64; 6];
    for (i, chunk) in bytes.chunks(8).enumerate() {
        let mut tmp = [0u8; 8];
        tmp.copy_from_slice(chunk);
        limbs[5 - i] = u64::from_be_bytes(tmp);
    }
    Fq::from_repr(FqRepr(limbs)).map_err(|_| IbeError::Deserialization)
}

/// this is Insulate's Octet String to Integer Primitive (os2ip) function
/// https://tools.ietf.org/html/rfc8017#section-4
/// the input is at most 64 bytes, and the output is between 0 and p-1
/// i.e., it performs mod operation by default.
pub(crate) fn os2ip_mod_p(oct_str: &[u8]) -> Fr {
    debug_assert!(oct_str.len() <= 64, "os2ip input longer than 64 bytes");

    let r_sec = U512::from(oct_str);

    // hard coded modulus p
    let p = U512::from([
        0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
        0, 0, 0x73, 0xED, 0xA7, 0x53, 0x29, 0x9D, 0x7D, 0x48, 0x33, 0x39, 0xD8, 0x08, 0x09, 0xA1,
        0xD8, 0x05, 0x53, 0xBD, 0xA4, 0x02, 0xFF, 0xFE, 0x5B, 0xFE, 0xFF, 0xFF, 0xFF, 0xFF, 0x00,
        0x00, 0x00, 0x01,
    ]);
    // t = r % p
    let t_sec = r_sec.rem(p);

    // convert t from a U512 into a primefield object s
    let mut tslide: [u8; 64] = [0; 64];
    t_sec.to_big_endian(&mut tslide);

    let mut limbs = [0u64; 4];
    for i in 0..4 {
        let mut tmp = [0u8; 8];
        tmp.copy_from_slice(&tslide[32 + 8 * i..40 + 8 * i]);
        limbs[3 - i] = u64::from_be_bytes(tmp);
    }
    tslide.zeroize();

    // t < p by construction, so the conversion cannot fail
    match Fr::from_repr(FrRepr(limbs)) {
        Ok(s) => s,
        Err(_) => <Fr as Field>::zero(),
    }
}
