use anyhow::{bail, Result};
use clap::Parser;
use log::info;

use latin_rectangles::{
    brute_force::{self, MAX_BRUTE_FORCE_N},
    format::group_digits,
    generate_cycle_structures, CyclePartition, DerangementSampler, ExtensionCache,
    ExtensionCounter, Permutation,
};

use crate::args::{Args, Mode};

mod args;

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();
    let counter = ExtensionCounter::new();

    match args.mode {
        Mode::Count { images, verify } => {
            let p = Permutation::from_images(&images)?;
            let count = counter.count_permutation(&p)?;
            println!("p = {p}, cycle type {}", p.cycle_type());
            println!("extensions: {}", group_digits(&count));

            if verify {
                if p.n() > MAX_BRUTE_FORCE_N {
                    bail!("refusing exhaustive search above n = {MAX_BRUTE_FORCE_N}");
                }
                let brute_force = brute_force::count_extensions(&p);
                if brute_force != count {
                    bail!("exhaustive search found {brute_force}");
                }
                println!("verified by exhaustive search");
            }
        }
        Mode::Partition { lengths } => {
            let partition = CyclePartition::new(lengths)?;
            let count = counter.count_partition(&partition)?;
            println!("cycle type {partition}: {}", group_digits(&count));
        }
        Mode::Rows { top, bottom } => {
            let count = counter.count_rows(&top, &bottom)?;
            println!("extensions: {}", group_digits(&count));
        }
        Mode::Random { n, seed, samples } => {
            let mut sampler = sampler(seed);
            let cache = ExtensionCache::new(counter);

            for _ in 0..samples {
                let p = sampler.sample(n)?;
                let count = cache.count_permutation(&p)?;
                println!(
                    "{:?}  cycle type {}  extensions {}",
                    p.images(),
                    p.cycle_type(),
                    group_digits(&count)
                );
            }
            info!("{} cycle types for {samples} samples", cache.len());
        }
        Mode::Table { n } => {
            let cache = ExtensionCache::new(counter);
            for partition in generate_cycle_structures(n) {
                let count = cache.count_partition(&partition)?;
                println!("{partition}\t{}", group_digits(&count));
            }
        }
        Mode::Demo { seed } => demo(&counter, seed)?,
    }

    Ok(())
}

fn sampler(seed: Option<u64>) -> DerangementSampler<rand_xoshiro::Xoshiro256StarStar> {
    match seed {
        Some(seed) => DerangementSampler::seeded(seed),
        None => DerangementSampler::from_entropy(),
    }
}

fn demo(counter: &ExtensionCounter, seed: Option<u64>) -> Result<()> {
    println!("Latin rectangle extensions");
    println!("{}", "=".repeat(40));
    println!("--- n = 8 ---");

    let examples: [(&str, [usize; 9]); 4] = [
        ("8-cycle", [0, 2, 3, 4, 5, 6, 7, 8, 1]),
        ("6,2-cycles", [0, 2, 3, 4, 5, 6, 1, 8, 7]),
        ("4,4-cycles", [0, 2, 3, 4, 1, 6, 7, 8, 5]),
        ("four 2-cycles", [0, 2, 1, 4, 3, 6, 5, 8, 7]),
    ];

    for (name, elements) in examples {
        let p = Permutation::from_one_indexed(elements.to_vec())?;
        let count = counter.count_permutation(&p)?;
        println!("{name}: {}", group_digits(&count));
    }

    println!();
    println!("--- random derangement ---");

    let n = 12;
    let p = sampler(seed).sample(n)?;
    let count = counter.count_permutation(&p)?;
    println!("n = {n}: {:?}", p.images());
    println!("cycle type {}", p.cycle_type());
    println!("extensions: {}", group_digits(&count));

    Ok(())
}
