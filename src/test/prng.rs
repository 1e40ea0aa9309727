use crate::bls12::os2ip_mod_p;
use crate::engine::ScalarField;
use crate::ibe_err::IbeError;
use crate::prng::{expand, PRNG};
use crate::toy::ToyScalar;
use ff::PrimeField;
use hkdf::Hkdf;
use pairing::bls12_381::Fr;
use sha2::Sha512;

// examples from
// https://crypto.stackexchange.com/questions/37537/what-are-i2osp-os2ip-in-rsa-pkcs1
//  0  ->  00:00
//  1  ->  00:01
// 255  ->  00:FF
// 256  ->  01:00
// 65535  ->  FF:FF
// additional example
//  2^128
//  2^256 % p
//  2^384 % p
#[test]
fn test_os2ip() {
    assert_eq!(Fr::from_str("0").unwrap(), os2ip_mod_p(&[0u8, 0u8]));
    assert_eq!(Fr::from_str("1").unwrap(), os2ip_mod_p(&[0u8, 1u8]));
    assert_eq!(Fr::from_str("255").unwrap(), os2ip_mod_p(&[0u8, 0xffu8]));
    assert_eq!(Fr::from_str("256").unwrap(), os2ip_mod_p(&[1u8, 0u8]));
    assert_eq!(
        Fr::from_str("65535").unwrap(),
        os2ip_mod_p(&[0xffu8, 0xffu8])
    );
    // 2^128
    assert_eq!(
        Fr::from_str("340282366920938463463374607431768211456").unwrap(),
        // 1 followed by 128/8 = 16 zeros
        os2ip_mod_p(&[1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0])
    );
    // 2^256 % p
    assert_eq!(
        Fr::from_str(
            "10920338887063814464675503992315976177888879664585288394250266608035967270910"
        )
        .unwrap(),
        os2ip_mod_p(&[
            // 1 followed by 256/8 = 32 zeros
            1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
            0, 0, 0, 0
        ])
    );
    // 2^384 % p
    assert_eq!(
        Fr::from_str(
            "20690987792304517493546419304065979215229097455316523017309531943206242971949"
        )
        .unwrap(),
        os2ip_mod_p(&[
            // 1 followed by 384/8 = 48 zeros
            1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
            0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0
        ])
    );
}

#[test]
fn test_prng() {
    // init is deterministic in the seed and the salt
    let prng = PRNG::init("seed", "salt").unwrap();
    assert_eq!(prng, PRNG::init("seed", "salt").unwrap());
    assert_ne!(prng, PRNG::init("seed", "pepper").unwrap());
    assert_ne!(prng, PRNG::init("deed", "salt").unwrap());

    // sample does not move the state
    let r1: Fr = prng.sample("info").unwrap();
    let r2: Fr = prng.sample("info").unwrap();
    assert_eq!(r1, r2);
    let r3: Fr = prng.sample("other info").unwrap();
    assert_ne!(r1, r3);

    // sample_then_update returns the same element as sample,
    // then moves the state
    let mut prng2 = prng.clone();
    let r4: Fr = prng2.sample_then_update("info").unwrap();
    assert_eq!(r1, r4);
    assert_ne!(prng, prng2);
    let r5: Fr = prng2.sample_then_update("info").unwrap();
    assert_ne!(r4, r5);

    // re-randomize mixes in new entropy, deterministically
    let mut prng3 = prng2.clone();
    let mut prng4 = prng2.clone();
    prng3.rerandomize("seed", "info").unwrap();
    prng4.rerandomize("seed", "info").unwrap();
    assert_eq!(prng3, prng4);
    assert_ne!(prng3, prng2);
    prng4.rerandomize("another seed", "info").unwrap();
    assert_ne!(prng3, prng4);
}

// the forwarded state does not depend on which field the sample lands in
#[test]
fn test_prng_is_field_agnostic() {
    let mut a = PRNG::init("seed", "salt").unwrap();
    let mut b = a.clone();
    let _: Fr = a.sample_then_update("info").unwrap();
    let _: ToyScalar = b.sample_then_update("info").unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_prng_debug_is_redacted() {
    let prng = PRNG::construct([0xab; 64]);
    assert_eq!(format!("{:?}", prng), "PRNG { 0xabababab.. }");
}

#[test]
fn test_fr_encoding() {
    let x = Fr::from_str("1234567890123456789012345678901234567890").unwrap();
    let bytes = ScalarField::to_bytes(&x);
    assert_eq!(bytes.len(), 32);
    // big endian, the same order os2ip reads
    assert_eq!(os2ip_mod_p(&bytes), x);
    assert_eq!(<Fr as ScalarField>::from_bytes(&bytes), Ok(x));

    // 1 is 0x00..01
    let one = ScalarField::to_bytes(&<Fr as ScalarField>::one());
    assert_eq!(one[31], 1);
    assert!(one[..31].iter().all(|b| *b == 0));

    // values above the modulus are rejected
    assert!(<Fr as ScalarField>::from_bytes(&[0xff; 32]).is_err());
    assert!(<Fr as ScalarField>::from_bytes(&[0x00; 31]).is_err());
}

#[test]
fn test_toy_from_okm() {
    assert_eq!(ToyScalar::from_okm(&[]), ToyScalar::new(0));
    assert_eq!(ToyScalar::from_okm(&[22]), ToyScalar::new(22));
    assert_eq!(ToyScalar::from_okm(&[23]), ToyScalar::new(0));
    // 256 = 11 * 23 + 3
    assert_eq!(ToyScalar::from_okm(&[1, 0]), ToyScalar::new(3));
}

// HKDF-SHA512 refuses more than 255 * 64 bytes; the failure surfaces
// as an error instead of a zero filled output
#[test]
fn test_expand_failure_is_an_error() {
    let hk = Hkdf::<Sha512>::extract(Some(b"salt".as_ref()), b"seed");
    let mut okm = vec![0u8; 255 * 64 + 1];
    assert_eq!(expand(&hk, b"info", &mut okm), Err(IbeError::SamplingFailure));

    let mut okm = vec![0u8; 255 * 64];
    assert!(expand(&hk, b"info", &mut okm).is_ok());
    assert!(okm.iter().any(|b| *b != 0));
}
