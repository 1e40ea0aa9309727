//! Identities, and their mapping into `Zp`.

use crate::domain_sep::DOM_SEP_IDENTITY;
use crate::engine::ScalarField;
use crate::util::hash_to_field;

/// An opaque identity.
///
/// A numeric identity is reduced mod p; a byte string is hashed into `Zp`.
/// Either way an identity that lands on zero is rejected by the protocol.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Identity {
    Numeric(u64),
    Bytes(Vec<u8>),
}

impl Identity {
    pub fn to_scalar<S: ScalarField>(&self) -> S {
        match self {
            Identity::Numeric(n) => S::from_u64(*n),
            Identity::Bytes(b) => hash_to_field(DOM_SEP_IDENTITY.as_ref(), b, 0),
        }
    }

    /// A stable byte encoding, used as the key of a `KeyStore`.
    pub fn to_bytes(&self) -> Vec<u8> {
        match self {
            Identity::Numeric(n) => {
                let mut out = vec![0u8];
                out.extend_from_slice(&n.to_be_bytes());
                out
            }
            Identity::Bytes(b) => {
                let mut out = vec![1u8];
                out.extend_from_slice(b);
                out
            }
        }
    }
}

impl From<u64> for Identity {
    fn from(n: u64) -> Self {
        Identity::Numeric(n)
    }
}

impl From<&str> for Identity {
    fn from(s: &str) -> Self {
        Identity::Bytes(s.as_bytes().to_vec())
    }
}

impl From<&[u8]> for Identity {
    fn from(b: &[u8]) -> Self {
        Identity::Bytes(b.to_vec())
    }
}
