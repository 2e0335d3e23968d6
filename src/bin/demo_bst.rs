use std::hint::black_box;
use std::path::PathBuf;
use std::time::Instant;

use clap::Parser;
use linked_bst::{source, OrderedTree};
use rand::rngs::StdRng;
use rand::seq::{IndexedRandom, SliceRandom};
use rand::SeedableRng;

#[derive(Parser)]
#[command(name = "demo-bst")]
#[command(about = "Compares searching a word list against searching unbalanced and rebalanced BSTs")]
struct Args {
    /// Word list with one word per line, sorted ascending.
    path: PathBuf,

    /// How many lines of the word list to load.
    #[arg(long, default_value = "20000")]
    limit: usize,

    /// How many words to look up in each task.
    #[arg(long, default_value = "10000")]
    samples: usize,

    /// Seed for shuffling and sampling. Random when unset.
    #[arg(long)]
    seed: Option<u64>,
}

/// Runs `search` and prints how long it took under `title`.
fn timed(title: &str, search: impl FnOnce()) {
    println!("{}...", title);
    let start = Instant::now();
    search();
    println!("It took {} seconds\n", start.elapsed().as_secs_f32());
}

/// Looks up every word in `tree` and returns how many were found.
fn find_all(tree: &OrderedTree<String>, words: &[String]) -> usize {
    words
        .iter()
        .filter(|word| black_box(tree.find(word)).is_some())
        .count()
}

fn main() -> linked_bst::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let sorted = source::read_lines(&args.path, args.limit)?;
    let mut unsorted = sorted.clone();
    unsorted.shuffle(&mut rng);
    let need: Vec<String> = sorted
        .choose_multiple(&mut rng, args.samples)
        .cloned()
        .collect();
    log::info!(
        "loaded {} words, looking up {} of them",
        sorted.len(),
        need.len()
    );

    let from_sorted: OrderedTree<String> = sorted.iter().cloned().collect();
    log::info!("tree from sorted words has height {}", from_sorted.height());
    let mut from_unsorted: OrderedTree<String> = unsorted.into_iter().collect();
    log::info!(
        "tree from shuffled words has height {}",
        from_unsorted.height()
    );

    timed("Search in sorted list of words", || {
        for word in &need {
            black_box(sorted.iter().position(|w| w == word));
        }
    });

    timed(
        "Search in binary search tree that made from sorted list of words",
        || {
            black_box(find_all(&from_sorted, &need));
        },
    );

    timed(
        "Search in binary search tree that made from unsorted list of words",
        || {
            black_box(find_all(&from_unsorted, &need));
        },
    );

    timed("Search in rebalanced binary search tree", || {
        from_unsorted.rebalance();
        black_box(find_all(&from_unsorted, &need));
    });
    log::info!(
        "rebalanced tree has height {} (balanced: {})",
        from_unsorted.height(),
        from_unsorted.is_balanced()
    );

    Ok(())
}
