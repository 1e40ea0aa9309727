use super::insulate::{
    Bls12Engine, Ciphertext, Identity, InsulateBls12, MasterSecret, SystemParameters, UserKey,
};
use super::pairing::bls12_381::Fq12;
use super::rand::Rng;
use super::{fresh_seed, random_message};
use criterion::Criterion;

fn default_param() -> (SystemParameters<Bls12Engine>, MasterSecret<Bls12Engine>) {
    InsulateBls12::param_gen(b"this is a fixed seed for benchmarking the api").unwrap()
}

/// benchmark parameter generation
#[allow(dead_code)]
fn bench_param(c: &mut Criterion) {
    c.bench_function("param generation", move |b| {
        b.iter(|| {
            let seed = fresh_seed();
            let res = InsulateBls12::param_gen(seed.as_ref());
            assert!(res.is_ok(), "param gen failed");
        })
    });
}

/// benchmark key generation
#[allow(dead_code)]
fn bench_keygen(c: &mut Criterion) {
    // this benchmark uses a same set of parameter
    let (pp, msk) = default_param();

    c.bench_function("key generation", move |b| {
        b.iter(|| {
            // a new seed and identity for each new key gen
            let seed = fresh_seed();
            let id = Identity::Numeric(rand::thread_rng().gen_range(1u64, 1 << 40));
            let res = InsulateBls12::key_gen(&pp, &msk, &id, seed.as_ref());
            assert!(res.is_ok(), "key gen failed");
        })
    });
}

/// benchmark key update: advance to the next version
#[allow(dead_code)]
fn bench_key_update_next(c: &mut Criterion) {
    const SAMPLES: usize = 100;
    let (pp, msk) = default_param();

    let mut sklist: Vec<UserKey<Bls12Engine>> = vec![];
    for i in 0..SAMPLES {
        let seed = fresh_seed();
        let id = Identity::Numeric(i as u64 + 1);
        let mut sk = InsulateBls12::key_gen(&pp, &msk, &id, seed.as_ref()).unwrap();
        // move it to a random version
        let version = rand::thread_rng().gen_range(2u64, 1000);
        let seed = fresh_seed();
        assert!(InsulateBls12::key_update(&mut sk, &pp, version, seed.as_ref()).is_ok());
        sklist.push(sk);
    }

    let seed = fresh_seed();
    let mut counter = 0;
    c.bench_function("key update to next version", move |b| {
        b.iter(|| {
            let mut sknew = sklist[counter].clone();
            let tar = sknew.version() + 1;
            let res = InsulateBls12::key_update(&mut sknew, &pp, tar, seed.as_ref());
            assert!(res.is_ok(), "key update failed");
            counter = (counter + 1) % SAMPLES;
        })
    });
}

/// benchmark encryption
#[allow(dead_code)]
fn bench_encrypt(c: &mut Criterion) {
    const SAMPLES: usize = 100;
    let (pp, _msk) = default_param();

    let mut msglist: Vec<Fq12> = vec![];
    for _i in 0..SAMPLES {
        msglist.push(random_message());
    }

    let mut counter = 0;
    c.bench_function("encryption", move |b| {
        b.iter(|| {
            let seed = fresh_seed();
            let id = Identity::Numeric(counter as u64 + 1);
            let res =
                InsulateBls12::encrypt(&pp, &id, &msglist[counter], b"bench", seed.as_ref());
            assert!(res.is_ok(), "encryption failed");
            counter = (counter + 1) % SAMPLES;
        })
    });
}

/// benchmark decryption, including the integrity check
#[allow(dead_code)]
fn bench_decrypt(c: &mut Criterion) {
    const SAMPLES: usize = 20;
    let (pp, msk) = default_param();

    let mut sklist: Vec<UserKey<Bls12Engine>> = vec![];
    let mut ctlist: Vec<Ciphertext<Bls12Engine>> = vec![];
    for i in 0..SAMPLES {
        let id = Identity::Numeric(i as u64 + 1);
        let seed = fresh_seed();
        let mut sk = InsulateBls12::key_gen(&pp, &msk, &id, seed.as_ref()).unwrap();
        let seed = fresh_seed();
        let ct = InsulateBls12::encrypt(&pp, &id, &random_message(), b"", seed.as_ref()).unwrap();
        // decrypt with a later version of the key
        let seed = fresh_seed();
        assert!(InsulateBls12::key_update(&mut sk, &pp, 5, seed.as_ref()).is_ok());
        sklist.push(sk);
        ctlist.push(ct);
    }

    let mut counter = 0;
    c.bench_function("decryption", move |b| {
        b.iter(|| {
            let res = InsulateBls12::decrypt(&ctlist[counter], &sklist[counter], &pp);
            assert!(res.is_ok(), "decryption failed");
            counter = (counter + 1) % SAMPLES;
        })
    });
}

/// benchmark key validation
#[allow(dead_code)]
fn bench_validate(c: &mut Criterion) {
    let (pp, msk) = default_param();
    let sk = InsulateBls12::key_gen(&pp, &msk, &Identity::from("bench"), &[0u8; 32]).unwrap();

    c.bench_function("key validation", move |b| {
        b.iter(|| {
            assert!(InsulateBls12::validate_key(&sk, &pp), "validation failed");
        })
    });
}

criterion_group!(
    api,
    bench_key_update_next,
    bench_encrypt,
    bench_decrypt,
    bench_validate
);

criterion_group!(api_slow, bench_param, bench_keygen);
