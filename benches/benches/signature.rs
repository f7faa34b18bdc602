use ark_bls12_381::Bls12_381;
use ark_ec::pairing::Pairing;
use ark_std::{
    rand::{rngs::StdRng, SeedableRng},
    UniformRand,
};
use benches::setup_dpabc;
use blake2::Blake2b512;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use dpabc::{Keypair, PublicKey, Signature};

type Fr = <Bls12_381 as Pairing>::ScalarField;

fn keygen_benchmark(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0u64);
    let attribute_count_range = [2, 4, 8, 15, 20, 30, 40, 60];

    let mut keygen_group = c.benchmark_group("Key generation");
    for count in attribute_count_range {
        keygen_group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, &count| {
            b.iter(|| Keypair::<Bls12_381>::generate(&mut rng, black_box(count)).unwrap());
        });
    }
    keygen_group.finish();
}

fn sign_verify_benchmark(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0u64);
    setup_dpabc!(rng, attribute_count_range, attributes_range, keypair_range);
    let epoch = Fr::rand(&mut rng);

    let mut sign_group = c.benchmark_group("Signing");
    for (i, count) in attribute_count_range.iter().enumerate() {
        sign_group.bench_with_input(BenchmarkId::from_parameter(*count), &i, |b, &i| {
            b.iter(|| {
                Signature::<Bls12_381>::new::<Blake2b512>(
                    black_box(&keypair_range[i].secret_key),
                    black_box(&epoch),
                    black_box(&attributes_range[i]),
                )
                .unwrap()
            });
        });
    }
    sign_group.finish();

    let sigs_range = (0..attribute_count_range.len())
        .map(|i| {
            Signature::<Bls12_381>::new::<Blake2b512>(
                &keypair_range[i].secret_key,
                &epoch,
                &attributes_range[i],
            )
            .unwrap()
        })
        .collect::<Vec<_>>();

    let mut verify_group = c.benchmark_group("Verifying");
    for (i, count) in attribute_count_range.iter().enumerate() {
        verify_group.bench_with_input(BenchmarkId::from_parameter(*count), &i, |b, &i| {
            b.iter(|| {
                sigs_range[i]
                    .verify(
                        black_box(&keypair_range[i].public_key),
                        black_box(&epoch),
                        black_box(&attributes_range[i]),
                    )
                    .unwrap()
            });
        });
    }
    verify_group.finish();
}

fn aggregate_combine_benchmark(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0u64);
    let attribute_count = 10;
    let issuer_count_range = [2, 4, 8, 16];
    let attributes = (0..attribute_count)
        .map(|_| Fr::rand(&mut rng))
        .collect::<Vec<_>>();
    let epoch = Fr::rand(&mut rng);

    let issuers_range = issuer_count_range
        .iter()
        .map(|count| {
            (0..*count)
                .map(|_| Keypair::<Bls12_381>::generate(&mut rng, attribute_count).unwrap())
                .collect::<Vec<_>>()
        })
        .collect::<Vec<_>>();
    let public_keys_range = issuers_range
        .iter()
        .map(|issuers| {
            issuers
                .iter()
                .map(|kp| kp.public_key.clone())
                .collect::<Vec<_>>()
        })
        .collect::<Vec<_>>();
    let sigs_range = issuers_range
        .iter()
        .map(|issuers| {
            issuers
                .iter()
                .map(|kp| {
                    Signature::<Bls12_381>::new::<Blake2b512>(&kp.secret_key, &epoch, &attributes)
                        .unwrap()
                })
                .collect::<Vec<_>>()
        })
        .collect::<Vec<_>>();

    let mut aggregate_group = c.benchmark_group("Aggregating public keys");
    for (i, count) in issuer_count_range.iter().enumerate() {
        aggregate_group.bench_with_input(BenchmarkId::from_parameter(*count), &i, |b, &i| {
            b.iter(|| {
                PublicKey::aggregate::<Blake2b512>(black_box(&public_keys_range[i])).unwrap()
            });
        });
    }
    aggregate_group.finish();

    let mut combine_group = c.benchmark_group("Combining signatures");
    for (i, count) in issuer_count_range.iter().enumerate() {
        combine_group.bench_with_input(BenchmarkId::from_parameter(*count), &i, |b, &i| {
            b.iter(|| {
                Signature::combine::<Blake2b512>(
                    black_box(&public_keys_range[i]),
                    black_box(&sigs_range[i]),
                )
                .unwrap()
            });
        });
    }
    combine_group.finish();
}

criterion_group!(
    benches,
    keygen_benchmark,
    sign_verify_benchmark,
    aggregate_combine_benchmark
);
criterion_main!(benches);
