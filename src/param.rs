//! System parameters and the issuer's master secret.

use crate::domain_sep::{DOM_SEP_PARAM_GEN, DOM_SEP_PARAM_INFO};
use crate::engine::{Dual, Group, PairingEngine, ScalarField};
use crate::ibe_err::IbeError;
use crate::prng::PRNG;
use std::fmt;
use zeroize::Zeroize;

/// The ciphersuite ids accepted by the crate:
/// * `0x00`: BLS12-381 with SHA-256 / HKDF-SHA512 oracles;
/// * `0xFF`: the toy group of order 23, only with the `toy` feature
///   or in tests.
#[cfg(not(any(test, feature = "toy")))]
pub const VALID_CIPHERSUITE: &[u8] = &[0x00];

#[cfg(any(test, feature = "toy"))]
pub const VALID_CIPHERSUITE: &[u8] = &[0x00, 0xFF];

/// Every seed fed into the crate must carry at least this many bytes.
pub const MIN_SEED_LEN: usize = 32;

/// The public parameters of the scheme.
///
/// `g`, `U` and `V` are kept in both source groups; `g2, g3` live in the
/// key-side group and `g1 = g^alpha` in the ciphertext-side group.
/// `e(g2, g1)` and `e(g3, g1)` are cached since every encryption needs them.
#[derive(Clone, PartialEq, Debug)]
pub struct SystemParameters<E: PairingEngine> {
    ciphersuite: u8,
    g: Dual<E>,
    g1: E::G2,
    g2: E::G1,
    g3: E::G1,
    u: Dual<E>,
    v: Dual<E>,
    e_g2_g1: E::Gt,
    e_g3_g1: E::Gt,
}

/// The issuer-only secret `alpha`. It is wiped when dropped and
/// never printed.
pub struct MasterSecret<E: PairingEngine> {
    ciphersuite: u8,
    alpha: E::Scalar,
}

impl<E: PairingEngine> fmt::Debug for MasterSecret<E> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "MasterSecret {{ ciphersuite: {}, .. }}", self.ciphersuite)
    }
}

impl<E: PairingEngine> Zeroize for MasterSecret<E> {
    fn zeroize(&mut self) {
        self.alpha = E::Scalar::zero();
    }
}

impl<E: PairingEngine> Drop for MasterSecret<E> {
    fn drop(&mut self) {
        self.zeroize();
    }
}

impl<E: PairingEngine> MasterSecret<E> {
    /// Build a master secret from a known exponent. Used by test vectors.
    pub fn construct(alpha: E::Scalar) -> Self {
        MasterSecret {
            ciphersuite: E::CIPHERSUITE,
            alpha,
        }
    }

    /// Returns the ciphersuite id of the master secret.
    pub fn ciphersuite(&self) -> u8 {
        self.ciphersuite
    }

    pub(crate) fn alpha(&self) -> &E::Scalar {
        &self.alpha
    }
}

/// Checks that a seed is long enough.
pub(crate) fn check_seed(seed: &[u8]) -> Result<(), IbeError> {
    if seed.len() < MIN_SEED_LEN {
        tracing::debug!(
            "the seed length {} is not long enough (required as least {} bytes)",
            seed.len(),
            MIN_SEED_LEN
        );
        return Err(IbeError::InvalidSeed(seed.len()));
    }
    Ok(())
}

/// Checks that two objects were produced under the same ciphersuite.
pub(crate) fn check_ciphersuite(expected: u8, got: u8) -> Result<(), IbeError> {
    if expected != got {
        tracing::debug!("ciphersuite mismatch: expected {}, got {}", expected, got);
        return Err(IbeError::Ciphersuite(got));
    }
    Ok(())
}

impl<E: PairingEngine> SystemParameters<E> {
    /// Generate fresh parameters and the master secret from a seed.
    ///
    /// The seed is extracted with
    ///  `m = HKDF-Extract(DOM_SEP_PARAM_GEN | ciphersuite, seed)`
    /// and the exponents of `g, alpha, g2, g3, U, V` are sampled from `m`
    /// in this order.
    /// Returns an error if
    /// * the seed is not long enough
    /// * the ciphersuite is not supported
    /// * a sampled exponent is zero
    pub fn setup(seed: &[u8]) -> Result<(Self, MasterSecret<E>), IbeError> {
        check_seed(seed)?;
        if !VALID_CIPHERSUITE.contains(&E::CIPHERSUITE) {
            return Err(IbeError::Ciphersuite(E::CIPHERSUITE));
        }

        let salt = [DOM_SEP_PARAM_GEN.as_bytes(), &[E::CIPHERSUITE][..]].concat();
        let mut prng = PRNG::init(seed, &salt[..])?;

        let mut exps: Vec<E::Scalar> = Vec::with_capacity(6);
        for i in 0..6u8 {
            let info = [DOM_SEP_PARAM_INFO.as_bytes(), &[i][..]].concat();
            let x: E::Scalar = prng.sample_then_update(info)?;
            if x.is_zero() {
                tracing::warn!("sampled a zero exponent during setup");
                return Err(IbeError::SamplingFailure);
            }
            exps.push(x);
        }

        let g = Dual::from_exponent(&exps[0]);
        let alpha = exps[1].clone();
        let g2 = E::G1::generator().pow(&exps[2]);
        let g3 = E::G1::generator().pow(&exps[3]);
        let u = Dual::from_exponent(&exps[4]);
        let v = Dual::from_exponent(&exps[5]);
        for x in exps.iter_mut() {
            *x = E::Scalar::zero();
        }

        let msk = MasterSecret::construct(alpha);
        let pp = Self::construct(g, msk.alpha(), g2, g3, u, v)?;
        Ok((pp, msk))
    }

    /// Build parameters from known generators and `alpha`;
    /// `g1 = g^alpha` is derived here.
    /// Returns `DegenerateParameter` if any input is the identity.
    pub fn construct(
        g: Dual<E>,
        alpha: &E::Scalar,
        g2: E::G1,
        g3: E::G1,
        u: Dual<E>,
        v: Dual<E>,
    ) -> Result<Self, IbeError> {
        let g1 = g.ct.pow(alpha);
        Self::from_public(E::CIPHERSUITE, g, g1, g2, g3, u, v)
    }

    /// Build parameters from their public components only, e.g. when
    /// deserializing. Returns `DegenerateParameter` if any input is the
    /// identity, and `Ciphersuite` if the id does not match the engine.
    pub fn from_public(
        ciphersuite: u8,
        g: Dual<E>,
        g1: E::G2,
        g2: E::G1,
        g3: E::G1,
        u: Dual<E>,
        v: Dual<E>,
    ) -> Result<Self, IbeError> {
        check_ciphersuite(E::CIPHERSUITE, ciphersuite)?;
        if g.is_identity() {
            return Err(IbeError::DegenerateParameter("g"));
        }
        if g1.is_identity() {
            return Err(IbeError::DegenerateParameter("g1"));
        }
        if g2.is_identity() {
            return Err(IbeError::DegenerateParameter("g2"));
        }
        if g3.is_identity() {
            return Err(IbeError::DegenerateParameter("g3"));
        }
        if u.is_identity() {
            return Err(IbeError::DegenerateParameter("U"));
        }
        if v.is_identity() {
            return Err(IbeError::DegenerateParameter("V"));
        }
        let e_g2_g1 = E::pair(&g2, &g1);
        let e_g3_g1 = E::pair(&g3, &g1);
        Ok(SystemParameters {
            ciphersuite,
            g,
            g1,
            g2,
            g3,
            u,
            v,
            e_g2_g1,
            e_g3_g1,
        })
    }

    /// The identity binding value `W = U^id * V`.
    ///
    /// Rejects `id = 0` before exponentiating, and `W = 1`
    /// (either copy), i.e., `id = -log(V)/log(U)`.
    pub fn identity_binding(&self, id: &E::Scalar) -> Result<Dual<E>, IbeError> {
        if id.is_zero() {
            tracing::debug!("rejecting the zero identity");
            return Err(IbeError::DegenerateParameter("identity"));
        }
        let w = self.u.pow(id).mul(&self.v);
        if w.is_identity() {
            tracing::debug!("identity binding value is the group identity");
            return Err(IbeError::DegenerateParameter("W"));
        }
        Ok(w)
    }

    /// Checks that every dual value shares one discrete log across the
    /// two source groups. This costs six pairings.
    pub fn is_consistent(&self) -> bool {
        self.g.is_consistent() && self.u.is_consistent() && self.v.is_consistent()
    }

    /// Returns the ciphersuite id of the parameters.
    pub fn ciphersuite(&self) -> u8 {
        self.ciphersuite
    }

    pub fn g(&self) -> &Dual<E> {
        &self.g
    }

    pub fn g1(&self) -> &E::G2 {
        &self.g1
    }

    pub fn g2(&self) -> &E::G1 {
        &self.g2
    }

    pub fn g3(&self) -> &E::G1 {
        &self.g3
    }

    pub fn u(&self) -> &Dual<E> {
        &self.u
    }

    pub fn v(&self) -> &Dual<E> {
        &self.v
    }

    /// `e(g2, g1)`
    pub fn e_g2_g1(&self) -> &E::Gt {
        &self.e_g2_g1
    }

    /// `e(g3, g1)`
    pub fn e_g3_g1(&self) -> &E::Gt {
        &self.e_g3_g1
    }
}
