use std::time::Duration;

use criterion::{
    black_box, criterion_group, criterion_main, Bencher, Criterion,
    Throughput,
};
use lazyseq::{iter, iter_mut, Adapter};

const LEN: usize = 100_000;

fn all(c: &mut Criterion) {
    terminal(c);
    pipeline(c);
    backward(c);
    mutate(c);
}

fn terminal(c: &mut Criterion) {
    define(c, "terminal", "lazyseq/count", move |b| {
        let nums = get_nums();
        b.iter(|| assert_eq!(iter(&nums).count(), LEN));
    });
    define(c, "terminal", "std/count", move |b| {
        let nums = get_nums();
        b.iter(|| assert_eq!(nums.iter().count(), LEN));
    });

    define(c, "terminal", "lazyseq/fold", move |b| {
        let nums = get_nums();
        b.iter(|| iter(&nums).fold(0u64, |sum, &x| sum + x));
    });
    define(c, "terminal", "std/fold", move |b| {
        let nums = get_nums();
        b.iter(|| nums.iter().fold(0u64, |sum, &x| sum + x));
    });

    define(c, "terminal", "lazyseq/position", move |b| {
        let nums = get_nums();
        let needle = black_box(LEN as u64 - 1);
        b.iter(|| iter(&nums).position(|&x| x == needle));
    });
    define(c, "terminal", "std/position", move |b| {
        let nums = get_nums();
        let needle = black_box(LEN as u64 - 1);
        b.iter(|| nums.iter().position(|&x| x == needle));
    });
}

fn pipeline(c: &mut Criterion) {
    define(c, "pipeline", "lazyseq/filter-map-collect", move |b| {
        let nums = get_nums();
        b.iter(|| {
            let got: Vec<u64> =
                iter(&nums).filter(|x| **x % 3 == 0).map(|x| x * x).collect();
            got
        });
    });
    define(c, "pipeline", "std/filter-map-collect", move |b| {
        let nums = get_nums();
        b.iter(|| {
            let got: Vec<u64> =
                nums.iter().filter(|x| **x % 3 == 0).map(|x| x * x).collect();
            got
        });
    });

    define(c, "pipeline", "lazyseq/zip-enumerate", move |b| {
        let nums = get_nums();
        b.iter(|| {
            iter(&nums)
                .zip(iter(&nums).skip(1))
                .enumerate()
                .filter(|&(i, (a, b))| (i as u64 + a) % 2 == *b % 2)
                .count()
        });
    });
    define(c, "pipeline", "std/zip-enumerate", move |b| {
        let nums = get_nums();
        b.iter(|| {
            nums.iter()
                .zip(nums.iter().skip(1))
                .enumerate()
                .filter(|&(i, (a, b))| (i as u64 + a) % 2 == *b % 2)
                .count()
        });
    });

    define(c, "pipeline", "lazyseq/boxed", move |b| {
        let nums = get_nums();
        b.iter(|| {
            let mut chain = iter(&nums).boxed();
            for _ in 0..8 {
                chain = chain.skip(1).boxed();
            }
            chain.count()
        });
    });
}

fn backward(c: &mut Criterion) {
    define(c, "backward", "lazyseq/step-by-rev", move |b| {
        let nums = get_nums();
        b.iter(|| iter(&nums).step_by(7).reverse().last());
    });
    define(c, "backward", "std/step-by-rev", move |b| {
        let nums = get_nums();
        b.iter(|| nums.iter().step_by(7).rev().last());
    });

    define(c, "backward", "lazyseq/enumerate-take-rev", move |b| {
        let nums = get_nums();
        b.iter(|| {
            let got: Vec<(usize, &u64)> =
                iter(&nums).enumerate().take(LEN / 2).reverse().collect();
            got
        });
    });
}

fn mutate(c: &mut Criterion) {
    define(c, "mutate", "lazyseq/step-by", move |b| {
        let mut nums = get_nums();
        b.iter(|| iter_mut(&mut nums).step_by(2).for_each(|x| *x ^= 1));
    });
    define(c, "mutate", "std/step-by", move |b| {
        let mut nums = get_nums();
        b.iter(|| nums.iter_mut().step_by(2).for_each(|x| *x ^= 1));
    });
}

fn get_nums() -> Vec<u64> {
    (0..LEN as u64).collect()
}

fn define(
    c: &mut Criterion,
    group_name: &str,
    bench_name: &str,
    bench: impl FnMut(&mut Bencher),
) {
    let mut group = c.benchmark_group(group_name);
    group
        .throughput(Throughput::Elements(LEN as u64))
        .sample_size(30)
        .warm_up_time(Duration::from_millis(500))
        .measurement_time(Duration::from_secs(3));
    group.bench_function(bench_name, bench);
    group.finish();
}

criterion_group!(g, all);
criterion_main!(g);
