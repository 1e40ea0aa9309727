//! A list of error messages, and the error type returned by every protocol operation.

use thiserror::Error;

pub const ERR_SEED_TOO_SHORT: &str = "The seed length is too short";
pub const ERR_CIPHERSUITE: &str = "Invalid ciphersuite ID";
pub const ERR_SAMPLING: &str = "Failed to sample a usable group element";
pub const ERR_DEGENERATE: &str = "A parameter evaluates to the group identity";
pub const ERR_INTEGRITY: &str = "Ciphertext integrity check failed";
pub const ERR_VERSION: &str = "Invalid key version";
pub const ERR_UNKNOWN_ID: &str = "No key is registered for this identity";
pub const ERR_ID_EXISTS: &str = "A key is already registered for this identity";
pub const ERR_ID_MISMATCH: &str = "The key was issued for another identity";
pub const ERR_SERIAL: &str = "Fail to convert the element to a blob";
pub const ERR_DESERIAL: &str = "Fail to convert a blob to the element";

/// Failures of the five protocol phases and of the key store.
///
/// `IntegrityFailure` is an ordinary outcome of decryption, not a bug:
/// callers are expected to match on it.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum IbeError {
    /// The PRNG or the group sampler could not produce a usable element.
    #[error("{}", ERR_SAMPLING)]
    SamplingFailure,
    /// The identity binding value, the identity itself, or a generator
    /// evaluates to the group identity.
    #[error("{}: {0}", ERR_DEGENERATE)]
    DegenerateParameter(&'static str),
    /// The tag `theta` does not match the keys derived from the key side.
    #[error("{}", ERR_INTEGRITY)]
    IntegrityFailure,
    /// The requested version does not follow the key's current version.
    #[error("{}: current version {current}, requested {target}", ERR_VERSION)]
    VersionMismatch { current: u64, target: u64 },
    /// The seed does not carry enough entropy.
    #[error("{}: got {0} bytes", ERR_SEED_TOO_SHORT)]
    InvalidSeed(usize),
    /// The objects were created under different (or unsupported) ciphersuites.
    #[error("{}: {0}", ERR_CIPHERSUITE)]
    Ciphersuite(u8),
    #[error("{}", ERR_UNKNOWN_ID)]
    UnknownIdentity,
    #[error("{}", ERR_ID_EXISTS)]
    IdentityExists,
    /// A key was filed under an identity it was not issued for.
    #[error("{}", ERR_ID_MISMATCH)]
    IdentityMismatch,
    #[error("{}", ERR_DESERIAL)]
    Deserialization,
}
