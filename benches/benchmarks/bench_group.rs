use super::insulate::{Bls12Engine, CipherGroup, Group, KeyGroup, PairingEngine};
use super::pairing::bls12_381::{Fq12, Fr};
use super::random_scalar;
use criterion::Criterion;

/// benchmark exponentiation in the three groups
#[allow(dead_code)]
fn bench_group_exponentiation(c: &mut Criterion) {
    const SAMPLES: usize = 100;
    let mut keylist: Vec<KeyGroup> = vec![];
    let mut ctlist: Vec<CipherGroup> = vec![];
    let mut gtlist: Vec<Fq12> = vec![];
    let mut rlist: Vec<Fr> = vec![];
    for _i in 0..SAMPLES {
        keylist.push(<KeyGroup as Group>::generator().pow(&random_scalar()));
        ctlist.push(<CipherGroup as Group>::generator().pow(&random_scalar()));
        gtlist.push(<Fq12 as Group>::generator().pow(&random_scalar()));
        rlist.push(random_scalar());
    }
    let r2list = rlist.clone();
    let r3list = rlist.clone();

    let mut counter = 0;
    c.bench_function("key side exponentiation cost", move |b| {
        b.iter(|| {
            keylist[counter].pow(&rlist[counter]);
            counter = (counter + 1) % SAMPLES;
        })
    });

    let mut counter = 0;
    c.bench_function("ciphertext side exponentiation cost", move |b| {
        b.iter(|| {
            ctlist[counter].pow(&r2list[counter]);
            counter = (counter + 1) % SAMPLES;
        })
    });

    let mut counter = 0;
    c.bench_function("GT exponentiation cost", move |b| {
        b.iter(|| {
            gtlist[counter].pow(&r3list[counter]);
            counter = (counter + 1) % SAMPLES;
        })
    });
}

/// benchmark a single pairing
#[allow(dead_code)]
fn bench_pairing(c: &mut Criterion) {
    const SAMPLES: usize = 100;
    let mut keylist: Vec<KeyGroup> = vec![];
    let mut ctlist: Vec<CipherGroup> = vec![];
    for _i in 0..SAMPLES {
        keylist.push(<KeyGroup as Group>::generator().pow(&random_scalar()));
        ctlist.push(<CipherGroup as Group>::generator().pow(&random_scalar()));
    }

    let mut counter = 0;
    c.bench_function("pairing cost", move |b| {
        b.iter(|| {
            Bls12Engine::pair(&keylist[counter], &ctlist[counter]);
            counter = (counter + 1) % SAMPLES;
        })
    });
}

/// benchmark decoding, which includes the subgroup check
#[allow(dead_code)]
fn bench_decoding(c: &mut Criterion) {
    const SAMPLES: usize = 100;
    let mut keylist: Vec<Vec<u8>> = vec![];
    let mut ctlist: Vec<Vec<u8>> = vec![];
    let mut gtlist: Vec<Vec<u8>> = vec![];
    for _i in 0..SAMPLES {
        keylist.push(<KeyGroup as Group>::generator().pow(&random_scalar()).to_bytes());
        ctlist.push(<CipherGroup as Group>::generator().pow(&random_scalar()).to_bytes());
        gtlist.push(<Fq12 as Group>::generator().pow(&random_scalar()).to_bytes());
    }

    let mut counter = 0;
    c.bench_function("key side decoding cost", move |b| {
        b.iter(|| {
            let res = <KeyGroup as Group>::from_bytes(&keylist[counter]);
            assert!(res.is_ok(), "decoding failed");
            counter = (counter + 1) % SAMPLES;
        })
    });

    let mut counter = 0;
    c.bench_function("ciphertext side decoding cost", move |b| {
        b.iter(|| {
            let res = <CipherGroup as Group>::from_bytes(&ctlist[counter]);
            assert!(res.is_ok(), "decoding failed");
            counter = (counter + 1) % SAMPLES;
        })
    });

    let mut counter = 0;
    c.bench_function("GT decoding cost", move |b| {
        b.iter(|| {
            let res = <Fq12 as Group>::from_bytes(&gtlist[counter]);
            assert!(res.is_ok(), "decoding failed");
            counter = (counter + 1) % SAMPLES;
        })
    });
}

criterion_group!(group_ops, bench_group_exponentiation, bench_pairing, bench_decoding);
