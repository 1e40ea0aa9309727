//! The per-identity decryption key, and its insulated update.

use crate::domain_sep::{DOM_SEP_SK_INIT, DOM_SEP_SK_RERANDOMIZE, DOM_SEP_SK_UPDATE};
use crate::engine::{Dual, Group, PairingEngine, ScalarField};
use crate::ibe_err::IbeError;
use crate::param::{check_ciphersuite, check_seed, MasterSecret, SystemParameters};
use crate::prng::PRNG;
use std::fmt;
use zeroize::Zeroize;

/// A user key at some version.
///
/// With `W = U^id * V` and blinding exponents `t1, t2`:
/// * `sk1 = g3^alpha * W^t1`, `sk2 = g^-t1`;
/// * `sk3 = g2^alpha * W^t2`, `sk4 = g^-t2`.
///
/// An update multiplies in `W^m1, g^-m1, W^m2, g^-m2`, which moves the
/// blinding exponents to `t1 + m1, t2 + m2` and leaves the key valid.
/// The embedded PRNG samples `m1, m2`; it is forwarded after every sample.
#[derive(Clone, PartialEq)]
pub struct UserKey<E: PairingEngine> {
    /// ciphersuite id
    ciphersuite: u8,
    /// the identity, mapped into Zp
    id: E::Scalar,
    /// starts at 1, and grows by 1 per update step
    version: u64,
    sk1: E::G1,
    sk2: E::G1,
    sk3: E::G1,
    sk4: E::G1,
    /// a seed that is used to generate the randomness during key updating
    prng: PRNG,
}

impl<E: PairingEngine> fmt::Debug for UserKey<E> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "UserKey {{ ciphersuite: {}, version: {}, .. }}",
            self.ciphersuite, self.version
        )
    }
}

impl<E: PairingEngine> Zeroize for UserKey<E> {
    fn zeroize(&mut self) {
        self.sk1 = E::G1::identity();
        self.sk2 = E::G1::identity();
        self.sk3 = E::G1::identity();
        self.sk4 = E::G1::identity();
        self.prng.zeroize();
    }
}

impl<E: PairingEngine> Drop for UserKey<E> {
    fn drop(&mut self) {
        self.zeroize();
    }
}

impl<E: PairingEngine> UserKey<E> {
    /// Build a user key from the given inputs. Does not check
    /// the validity of the key.
    pub fn construct(
        ciphersuite: u8,
        id: E::Scalar,
        version: u64,
        sk: [E::G1; 4],
        prng: PRNG,
    ) -> Self {
        let [sk1, sk2, sk3, sk4] = sk;
        UserKey {
            ciphersuite,
            id,
            version,
            sk1,
            sk2,
            sk3,
            sk4,
            prng,
        }
    }

    /// This function issues the key of an identity at version 1.
    /// The blinding exponents are sampled from a PRNG extracted with
    ///  `m = HKDF-Extract(DOM_SEP_SK_INIT | ciphersuite | id, seed)`
    /// so one issuer seed yields independent keys per identity.
    /// Returns an error if
    /// * the seed is not long enough
    /// * the ciphersuites of the inputs differ
    /// * the identity is degenerate
    /// * a blinding exponent is zero
    pub fn init(
        pp: &SystemParameters<E>,
        msk: &MasterSecret<E>,
        id: &E::Scalar,
        seed: &[u8],
    ) -> Result<Self, IbeError> {
        check_seed(seed)?;
        check_ciphersuite(pp.ciphersuite(), msk.ciphersuite())?;
        let w = pp.identity_binding(id)?;

        let salt = [
            DOM_SEP_SK_INIT.as_bytes(),
            &[pp.ciphersuite()][..],
            &id.to_bytes()[..],
        ]
        .concat();
        let mut prng = PRNG::init(seed, &salt[..])?;

        let mut t1: E::Scalar = prng.sample_then_update(DOM_SEP_SK_INIT)?;
        let mut t2: E::Scalar = prng.sample_then_update(DOM_SEP_SK_INIT)?;
        if t1.is_zero() || t2.is_zero() {
            tracing::warn!("sampled a zero blinding exponent during key generation");
            return Err(IbeError::SamplingFailure);
        }

        let sk = Self::init_det(pp, msk, id, &w, &t1, &t2, prng);
        t1 = E::Scalar::zero();
        t2 = E::Scalar::zero();
        debug_assert!(t1.is_zero() && t2.is_zero());
        Ok(sk)
    }

    /// This function issues a version 1 key with the given blinding
    /// exponents. The caller has already derived `W` from `id`.
    pub fn init_det(
        pp: &SystemParameters<E>,
        msk: &MasterSecret<E>,
        id: &E::Scalar,
        w: &Dual<E>,
        t1: &E::Scalar,
        t2: &E::Scalar,
        prng: PRNG,
    ) -> Self {
        let alpha = msk.alpha();
        UserKey {
            ciphersuite: pp.ciphersuite(),
            id: id.clone(),
            version: 1,
            sk1: pp.g3().pow(alpha).mul(&w.key.pow(t1)),
            sk2: pp.g().key.pow(&t1.neg()),
            sk3: pp.g2().pow(alpha).mul(&w.key.pow(t2)),
            sk4: pp.g().key.pow(&t2.neg()),
            prng,
        }
    }

    /// Updates the key to the target version, one step at a time.
    /// The caller supplied seed is mixed into the PRNG first, then
    /// `m1, m2` are sampled per step with the forward-secure
    /// `sample_then_update`.
    ///
    /// The key is untouched when an error is returned, which happens if
    /// * the ciphersuites do not match
    /// * the target version is not larger than the current one
    /// * the seed is not long enough
    /// * the PRNG fails
    pub fn update(
        &mut self,
        pp: &SystemParameters<E>,
        tar_version: u64,
        seed: &[u8],
    ) -> Result<(), IbeError> {
        check_ciphersuite(pp.ciphersuite(), self.ciphersuite)?;
        if tar_version <= self.version {
            tracing::debug!(
                "the target version {} does not follow the current version {}",
                tar_version,
                self.version
            );
            return Err(IbeError::VersionMismatch {
                current: self.version,
                target: tar_version,
            });
        }
        check_seed(seed)?;
        let w = pp.identity_binding(&self.id)?;

        // work on a copy, so that a failure leaves self as is
        let mut new_key = self.clone();
        let salt = [DOM_SEP_SK_RERANDOMIZE.as_bytes(), &[self.ciphersuite][..]].concat();
        new_key.prng.rerandomize(seed, &salt[..])?;

        while new_key.version < tar_version {
            let mut m1: E::Scalar = new_key.prng.sample_then_update(DOM_SEP_SK_UPDATE)?;
            let mut m2: E::Scalar = new_key.prng.sample_then_update(DOM_SEP_SK_UPDATE)?;
            new_key.update_det(pp, &w, &m1, &m2);
            m1 = E::Scalar::zero();
            m2 = E::Scalar::zero();
            debug_assert!(m1.is_zero() && m2.is_zero());
        }

        *self = new_key;
        Ok(())
    }

    /// One update step with the given exponents:
    /// `sk1 * W^m1, sk2 * g^-m1, sk3 * W^m2, sk4 * g^-m2`.
    /// The second and fourth components follow `g^-t`, hence the negation.
    pub fn update_det(
        &mut self,
        pp: &SystemParameters<E>,
        w: &Dual<E>,
        m1: &E::Scalar,
        m2: &E::Scalar,
    ) {
        self.sk1 = self.sk1.mul(&w.key.pow(m1));
        self.sk2 = self.sk2.mul(&pp.g().key.pow(&m1.neg()));
        self.sk3 = self.sk3.mul(&w.key.pow(m2));
        self.sk4 = self.sk4.mul(&pp.g().key.pow(&m2.neg()));
        self.version += 1;
    }

    /// Checks the key against the public parameters:
    /// * `e(sk1, g) * e(sk2, W) == e(g3, g1)`
    /// * `e(sk3, g) * e(sk4, W) == e(g2, g1)`
    ///
    /// No master secret is needed.
    pub fn validate(&self, pp: &SystemParameters<E>) -> bool {
        if self.ciphersuite != pp.ciphersuite() {
            tracing::debug!("ciphersuite mismatch during key validation");
            return false;
        }
        let w = match pp.identity_binding(&self.id) {
            Ok(w) => w,
            Err(_) => return false,
        };
        let lhs1 = E::pair(&self.sk1, &pp.g().ct).mul(&E::pair(&self.sk2, &w.ct));
        let lhs2 = E::pair(&self.sk3, &pp.g().ct).mul(&E::pair(&self.sk4, &w.ct));
        lhs1 == *pp.e_g3_g1() && lhs2 == *pp.e_g2_g1()
    }

    /// Returns the ciphersuite id of the key.
    pub fn ciphersuite(&self) -> u8 {
        self.ciphersuite
    }

    /// Returns the identity the key was issued for.
    pub fn id(&self) -> &E::Scalar {
        &self.id
    }

    /// Returns the current version of the key.
    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn sk1(&self) -> &E::G1 {
        &self.sk1
    }

    pub fn sk2(&self) -> &E::G1 {
        &self.sk2
    }

    pub fn sk3(&self) -> &E::G1 {
        &self.sk3
    }

    pub fn sk4(&self) -> &E::G1 {
        &self.sk4
    }

    /// Returns the prng.
    pub fn prng(&self) -> &PRNG {
        &self.prng
    }
}
