extern crate insulate;
extern crate pairing_plus as pairing;
extern crate rand;

pub mod bench_api;
pub mod bench_group;

use self::insulate::{Group, ScalarField};
use self::pairing::bls12_381::{Fq12, Fr};
use self::rand::Rng;

/// a fresh 32 character seed
pub fn fresh_seed() -> String {
    rand::thread_rng()
        .gen_ascii_chars()
        .take(32)
        .collect::<String>()
}

/// a uniformly looking scalar, good enough for timing
pub fn random_scalar() -> Fr {
    Fr::from_u64(rand::thread_rng().gen::<u64>() | 1)
}

/// a random message in GT
pub fn random_message() -> Fq12 {
    <Fq12 as Group>::generator().pow(&random_scalar())
}
