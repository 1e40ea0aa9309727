/// This file implements the functions that we will be using to, initiate, maintain and update
/// the seeds of random number generators.
use crate::domain_sep::DOM_SEP_PRNG_INIT;
use crate::engine::ScalarField;
use crate::ibe_err::IbeError;
// use hkdf-sha512 to extract and expand a seed
use hkdf::Hkdf;
use sha2::Sha512;
use zeroize::Zeroize;

/// A PRNG in Insulate is a wrapper of 64 byte array.
/// This array is initiated during key generation (or encryption),
/// stored as part of the user key, updated when
/// the key is updated, and is used to generate
/// random field elements.
#[derive(Clone)]
pub struct PRNG([u8; 64]);

/// implement the Default trait for PRNG
impl Default for PRNG {
    fn default() -> Self {
        PRNG([0u8; 64])
    }
}

/// The seed is secret: only a fingerprint of its first bytes is printed.
impl std::fmt::Debug for PRNG {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "PRNG {{ 0x{:02x}{:02x}{:02x}{:02x}.. }}",
            self.0[0], self.0[1], self.0[2], self.0[3]
        )
    }
}

/// convenient function to compare PRNGs
impl std::cmp::PartialEq for PRNG {
    fn eq(&self, other: &Self) -> bool {
        self.0[..] == other.0[..]
    }
}

impl Zeroize for PRNG {
    fn zeroize(&mut self) {
        self.0.zeroize();
    }
}

impl Drop for PRNG {
    fn drop(&mut self) {
        self.zeroize();
    }
}

impl PRNG {
    /// Expose the seed.
    pub fn seed(&self) -> &[u8; 64] {
        &self.0
    }

    /// Build a prng from an rngseed.
    pub fn construct(rngseed: [u8; 64]) -> Self {
        Self(rngseed)
    }

    /// This function takes in a seed, and a salt,
    /// and instantiate a PRNG by extracting the randomness
    /// from the seed using HKDF-Extract, then expanding
    /// it into a 64 bytes state.
    pub fn init<Blob: AsRef<[u8]>>(seed: Blob, salt: Blob) -> Result<Self, IbeError> {
        // m = hkdf-extract(salt, seed)
        let hk = Hkdf::<Sha512>::extract(Some(salt.as_ref()), seed.as_ref());
        let mut state = [0u8; 64];
        expand(&hk, DOM_SEP_PRNG_INIT.as_ref(), &mut state)?;
        Ok(Self(state))
    }

    /// This function takes in a PRNG, some public info,
    /// and sample a field element; the PRNG is updated.
    pub fn sample_then_update<S: ScalarField, Blob: AsRef<[u8]>>(
        &mut self,
        info: Blob,
    ) -> Result<S, IbeError> {
        // re-build the hkdf-sha512 from the PRNG seed
        let hk = Hkdf::<Sha512>::extract(None, &self.0);

        // hkdf-expand(seed, info): the first half is the sample,
        // the second half is the new seed
        let mut output_sec = [0u8; 128];
        expand(&hk, info.as_ref(), &mut output_sec)?;
        let r = S::from_okm(&output_sec[0..64]);

        self.0.copy_from_slice(&output_sec[64..128]);
        output_sec.zeroize();

        Ok(r)
    }

    /// This function takes in a PRNG, some public info,
    /// and sample a field element; the PRNG is NOT updated.
    pub fn sample<S: ScalarField, Blob: AsRef<[u8]>>(&self, info: Blob) -> Result<S, IbeError> {
        let hk = Hkdf::<Sha512>::extract(None, &self.0);

        let mut output_sec = [0u8; 64];
        expand(&hk, info.as_ref(), &mut output_sec)?;
        let r = S::from_okm(&output_sec);
        output_sec.zeroize();

        Ok(r)
    }

    /// Mix new entropy into the PRNG.
    pub fn rerandomize<Blob: AsRef<[u8]>>(&mut self, seed: Blob, salt: Blob) -> Result<(), IbeError> {
        let mut m = [&self.0[..], seed.as_ref()].concat();
        let hk = Hkdf::<Sha512>::extract(Some(salt.as_ref()), m.as_ref());
        m.zeroize();
        expand(&hk, DOM_SEP_PRNG_INIT.as_ref(), &mut self.0)
    }
}

pub(crate) fn expand(hk: &Hkdf<Sha512>, info: &[u8], okm: &mut [u8]) -> Result<(), IbeError> {
    let len = okm.len();
    hk.expand(info, okm).map_err(|_e| {
        tracing::error!("hkdf expand failed for {} bytes", len);
        IbeError::SamplingFailure
    })
}
