use ark_bls12_381::Bls12_381;
use ark_ec::pairing::Pairing;
use ark_std::{
    rand::{rngs::StdRng, SeedableRng},
    UniformRand,
};
use benches::setup_dpabc;
use blake2::Blake2b512;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use dpabc::{Keypair, PresentationToken, Signature};

type Fr = <Bls12_381 as Pairing>::ScalarField;

fn presentation_benchmark(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0u64);
    setup_dpabc!(rng, attribute_count_range, attributes_range, keypair_range);
    let epoch = Fr::rand(&mut rng);
    let message = b"benchmark";

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
    // Reveal every other attribute
    let revealed_indices_range = attribute_count_range
        .iter()
        .map(|count| (0..*count).step_by(2).collect::<Vec<usize>>())
        .collect::<Vec<_>>();
    let revealed_attributes_range = revealed_indices_range
        .iter()
        .zip(&attributes_range)
        .map(|(indices, attrs)| indices.iter().map(|&idx| attrs[idx]).collect::<Vec<_>>())
        .collect::<Vec<_>>();

    let mut present_group = c.benchmark_group("Creating presentation token");
    for (i, count) in attribute_count_range.iter().enumerate() {
        present_group.bench_with_input(BenchmarkId::from_parameter(*count), &i, |b, &i| {
            b.iter(|| {
                PresentationToken::new::<_, Blake2b512>(
                    &mut rng,
                    black_box(&keypair_range[i].public_key),
                    black_box(&sigs_range[i]),
                    black_box(&epoch),
                    black_box(&attributes_range[i]),
                    black_box(&revealed_indices_range[i]),
                    black_box(message),
                )
                .unwrap()
            });
        });
    }
    present_group.finish();

    let tokens_range = (0..attribute_count_range.len())
        .map(|i| {
            PresentationToken::new::<_, Blake2b512>(
                &mut rng,
                &keypair_range[i].public_key,
                &sigs_range[i],
                &epoch,
                &attributes_range[i],
                &revealed_indices_range[i],
                message,
            )
            .unwrap()
        })
        .collect::<Vec<_>>();

    let mut verify_group = c.benchmark_group("Verifying presentation token");
    for (i, count) in attribute_count_range.iter().enumerate() {
        verify_group.bench_with_input(BenchmarkId::from_parameter(*count), &i, |b, &i| {
            b.iter(|| {
                tokens_range[i]
                    .verify::<Blake2b512>(
                        black_box(&keypair_range[i].public_key),
                        black_box(&epoch),
                        black_box(&revealed_attributes_range[i]),
                        black_box(&revealed_indices_range[i]),
                        black_box(message),
                    )
                    .unwrap()
            });
        });
    }
    verify_group.finish();
}

criterion_group!(benches, presentation_benchmark);
criterion_main!(benches);
