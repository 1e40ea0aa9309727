//! Subgroup checks for decoded elements. Compressed points only prove that
//! they lie on the curve; both curves have cofactors, and `Fq12` holds far
//! more than the order `r` subgroup that the pairing lands in.
use ff::{Field, PrimeField};
use pairing::{bls12_381::*, CurveProjective};

pub trait MembershipTesting {
    /// Returns true iff `self` lies in the subgroup of prime order r.
    fn is_in_prime_group(&self) -> bool;
}

// a point P is in the subgroup iff r * P is the point at infinity
macro_rules! curve_membership_impl {
    ($curve:ident) => {
        impl MembershipTesting for $curve {
            fn is_in_prime_group(&self) -> bool {
                let mut p = *self;
                p.mul_assign(Fr::char());
                p.is_zero()
            }
        }
    };
}

curve_membership_impl!(G1);
curve_membership_impl!(G2);

impl MembershipTesting for Fq12 {
    fn is_in_prime_group(&self) -> bool {
        // zero has no multiplicative order
        !self.is_zero() && self.pow(Fr::char()) == Fq12::one()
    }
}
