//! Named-value merge benchmark.
//!
//! Measures the lazy sort and each merge algorithm on arrays whose names
//! overlap by half. The in-place union is compared against a baseline that
//! calls `find_mut` and `add` per source element.
//!
//! Inputs are pre-generated per size and cloned in setup so every iteration
//! starts from the same unsorted or sorted state.

use criterion::{BatchSize, BenchmarkId, Criterion, criterion_group, criterion_main};
use named_values::named_value::{intersection, remove_by_predicate, union_in_place, union_into};
use named_values::{NamedElement, NamedValueArray};
use std::hint::black_box;

const SIZES: [u32; 4] = [16, 128, 1024, 8192];

#[derive(Clone, Copy, Debug, Default)]
struct Weight {
    name: u32,
    value: f32,
}

impl NamedElement for Weight {
    type Name = u32;

    fn name(&self) -> &u32 {
        &self.name
    }

    fn set_name(&mut self, name: u32) {
        self.name = name;
    }
}

/// Builds an unsorted array holding names `offset..offset + size` in reverse.
#[allow(clippy::cast_precision_loss)]
fn generate_array(size: u32, offset: u32) -> NamedValueArray<Weight> {
    (offset..offset + size)
        .rev()
        .map(|name| Weight {
            name,
            value: name as f32,
        })
        .collect()
}

/// Builds two sorted arrays whose names overlap by half.
fn generate_pair(size: u32) -> (NamedValueArray<Weight>, NamedValueArray<Weight>) {
    let first = generate_array(size, 0);
    let second = generate_array(size, size / 2);
    first.sort_elements_if_required();
    second.sort_elements_if_required();
    (first, second)
}

fn batch_size_for(size: u32) -> BatchSize {
    if size < 1000 {
        BatchSize::SmallInput
    } else {
        BatchSize::LargeInput
    }
}

fn benchmark_lazy_sort(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("named_value_lazy_sort");

    for size in SIZES {
        let base = generate_array(size, 0);
        group.bench_with_input(BenchmarkId::new("sort", size), &size, |bencher, &size| {
            bencher.iter_batched(
                || base.clone(),
                |array| {
                    array.sort_elements_if_required();
                    black_box(array)
                },
                batch_size_for(size),
            );
        });
    }

    group.finish();
}

fn benchmark_union_in_place(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("named_value_union_in_place");

    for size in SIZES {
        let (target, source) = generate_pair(size);

        group.bench_with_input(BenchmarkId::new("merge", size), &size, |bencher, &size| {
            bencher.iter_batched(
                || target.clone(),
                |mut target| {
                    union_in_place(&mut target, &source, |element, source_element, _| {
                        element.value += source_element.value;
                    });
                    black_box(target)
                },
                batch_size_for(size),
            );
        });

        group.bench_with_input(
            BenchmarkId::new("find_and_add", size),
            &size,
            |bencher, &size| {
                bencher.iter_batched(
                    || target.clone(),
                    |mut target| {
                        for source_element in source.sorted_elements().iter() {
                            match target.find_mut(source_element.name()) {
                                Some(element) => element.value += source_element.value,
                                None => target.add(*source_element),
                            }
                        }
                        black_box(target)
                    },
                    batch_size_for(size),
                );
            },
        );
    }

    group.finish();
}

fn benchmark_union_into(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("named_value_union_into");

    for size in SIZES {
        let (first, second) = generate_pair(size);
        let mut result = NamedValueArray::new();

        group.bench_with_input(BenchmarkId::new("blend", size), &size, |bencher, _| {
            bencher.iter(|| {
                union_into(
                    &mut result,
                    black_box(&first),
                    black_box(&second),
                    |element: &mut Weight, a, b, _| {
                        element.value = (b.value - a.value).mul_add(0.5, a.value);
                    },
                );
                black_box(result.len())
            });
        });
    }

    group.finish();
}

fn benchmark_intersection_and_removal(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("named_value_intersection");

    for size in SIZES {
        let (first, second) = generate_pair(size);

        group.bench_with_input(BenchmarkId::new("intersection", size), &size, |bencher, _| {
            bencher.iter(|| {
                let mut total = 0.0_f32;
                intersection(black_box(&first), black_box(&second), |a, b| {
                    total += a.value * b.value;
                });
                black_box(total)
            });
        });

        group.bench_with_input(
            BenchmarkId::new("remove_by_predicate", size),
            &size,
            |bencher, &size| {
                bencher.iter_batched(
                    || first.clone(),
                    |mut target| {
                        remove_by_predicate(&mut target, &second, |_, _| true);
                        black_box(target)
                    },
                    batch_size_for(size),
                );
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_lazy_sort,
    benchmark_union_in_place,
    benchmark_union_into,
    benchmark_intersection_and_removal
);
criterion_main!(benches);
