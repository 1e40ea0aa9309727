//! Encryption, and decryption with the mandatory integrity check.

use crate::domain_sep::DOM_SEP_ENC;
use crate::engine::{Dual, Group, PairingEngine, ScalarField};
use crate::ibe_err::IbeError;
use crate::oracle::Oracles;
use crate::param::{check_ciphersuite, check_seed, SystemParameters};
use crate::prng::PRNG;
use crate::user_key::UserKey;

/// A ciphertext `(c1, c2, c3, theta)` under a label `eta`.
///
/// * `c1 = Ext(e(g2, g1)^s, eta) * M` masks the message;
/// * `c2 = g^s` and `c3 = W^s` let a key holder rebuild `e(g2, g1)^s`;
/// * `theta = s * k1 + k2` is the integrity tag, where `(k1, k2)` are
///   derived from `D = e(g3, g1)^s * e(g2, g1)^(beta * s)` and
///   `beta = H(c1, c2, c3, eta)`.
///
/// Ciphertexts are not bound to a key version.
#[derive(Clone, PartialEq, Debug)]
pub struct Ciphertext<E: PairingEngine> {
    ciphersuite: u8,
    label: Vec<u8>,
    c1: E::Gt,
    c2: E::G2,
    c3: E::G2,
    theta: E::Scalar,
}

impl<E: PairingEngine> Ciphertext<E> {
    /// Build a ciphertext from the given inputs. Does not check
    /// the validity of the ciphertext.
    pub fn construct(
        ciphersuite: u8,
        label: Vec<u8>,
        c1: E::Gt,
        c2: E::G2,
        c3: E::G2,
        theta: E::Scalar,
    ) -> Self {
        Ciphertext {
            ciphersuite,
            label,
            c1,
            c2,
            c3,
            theta,
        }
    }

    /// Encrypts a message of GT to an identity, under a label.
    /// The randomness `s` is extracted from the seed with
    ///  `m = HKDF-Extract(DOM_SEP_ENC | ciphersuite, seed)`.
    /// Returns an error if
    /// * the seed is not long enough
    /// * the identity is degenerate
    /// * `s` is zero
    pub fn encrypt<O: Oracles<E>>(
        pp: &SystemParameters<E>,
        id: &E::Scalar,
        msg: &E::Gt,
        label: &[u8],
        seed: &[u8],
    ) -> Result<Self, IbeError> {
        check_seed(seed)?;
        let w = pp.identity_binding(id)?;

        let salt = [DOM_SEP_ENC.as_bytes(), &[pp.ciphersuite()][..]].concat();
        let prng = PRNG::init(seed, &salt[..])?;
        let mut s: E::Scalar = prng.sample(DOM_SEP_ENC)?;
        if s.is_zero() {
            tracing::warn!("sampled a zero exponent during encryption");
            return Err(IbeError::SamplingFailure);
        }

        let res = Self::encrypt_det::<O>(pp, &w, msg, label, &s);
        s = E::Scalar::zero();
        debug_assert!(s.is_zero());
        res.map(|(ct, _)| ct)
    }

    /// Encrypts with a given `s` and identity binding value `W`.
    /// Also returns the double pairing value `D`, so that tests can
    /// compare it with the decryptor's reconstruction.
    /// Fails only if an oracle fails.
    pub fn encrypt_det<O: Oracles<E>>(
        pp: &SystemParameters<E>,
        w: &Dual<E>,
        msg: &E::Gt,
        label: &[u8],
        s: &E::Scalar,
    ) -> Result<(Self, E::Gt), IbeError> {
        let c2 = pp.g().ct.pow(s);
        let c3 = w.ct.pow(s);
        let y = pp.e_g2_g1().pow(s);
        let c1 = O::ext(&y, label)?.mul(msg);

        // beta is only defined once c1 is fixed
        let beta = O::hash(&c1, &c2, &c3, label);
        let d = pp.e_g3_g1().pow(s).mul(&y.pow(&beta));
        let (k1, k2) = O::kdf(&d)?;
        let theta = s.mul(&k1).add(&k2);

        Ok((
            Ciphertext {
                ciphersuite: pp.ciphersuite(),
                label: label.to_vec(),
                c1,
                c2,
                c3,
                theta,
            },
            d,
        ))
    }

    /// Decrypts with a key of any version.
    ///
    /// The tag is checked first, `g^theta == c2^k1 * g^k2` with `(k1, k2)`
    /// derived from the key side reconstruction `D'`; nothing about the
    /// message is released when it fails.
    pub fn decrypt<O: Oracles<E>>(
        &self,
        sk: &UserKey<E>,
        pp: &SystemParameters<E>,
    ) -> Result<E::Gt, IbeError> {
        check_ciphersuite(pp.ciphersuite(), self.ciphersuite)?;
        check_ciphersuite(pp.ciphersuite(), sk.ciphersuite())?;

        let (x1, x2) = self.decapsulate(sk);
        let d = self.double_pairing::<O>(&x1, &x2);
        let (k1, k2) = O::kdf(&d)?;

        let lhs = pp.g().ct.pow(&self.theta);
        let rhs = self.c2.pow(&k1).mul(&pp.g().ct.pow(&k2));
        if lhs != rhs {
            tracing::debug!(
                "integrity check failed for a key at version {}",
                sk.version()
            );
            return Err(IbeError::IntegrityFailure);
        }

        // X2 = e(g2, g1)^s, the value the message was masked with
        Ok(self.c1.mul(&O::ext(&x2, &self.label)?.inv()))
    }

    /// The key side pairings:
    /// * `X1 = e(sk1, c2) * e(sk2, c3) = e(g3, g1)^s`
    /// * `X2 = e(sk3, c2) * e(sk4, c3) = e(g2, g1)^s`
    ///
    /// for a key that matches the ciphertext's identity.
    pub fn decapsulate(&self, sk: &UserKey<E>) -> (E::Gt, E::Gt) {
        let x1 = E::pair(sk.sk1(), &self.c2).mul(&E::pair(sk.sk2(), &self.c3));
        let x2 = E::pair(sk.sk3(), &self.c2).mul(&E::pair(sk.sk4(), &self.c3));
        (x1, x2)
    }

    /// `D' = X1 * X2^beta`
    pub fn double_pairing<O: Oracles<E>>(&self, x1: &E::Gt, x2: &E::Gt) -> E::Gt {
        let beta = O::hash(&self.c1, &self.c2, &self.c3, &self.label);
        x1.mul(&x2.pow(&beta))
    }

    /// Returns the ciphersuite id of the ciphertext.
    pub fn ciphersuite(&self) -> u8 {
        self.ciphersuite
    }

    pub fn label(&self) -> &[u8] {
        &self.label
    }

    pub fn c1(&self) -> &E::Gt {
        &self.c1
    }

    pub fn c2(&self) -> &E::G2 {
        &self.c2
    }

    pub fn c3(&self) -> &E::G2 {
        &self.c3
    }

    pub fn theta(&self) -> &E::Scalar {
        &self.theta
    }
}
