//! Walks through building, unbalancing, and rebalancing a tree of random values, printing every
//! traversal along the way.

use std::fmt::Debug;

use clap::Parser;
use log::{info, LevelFilter};
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};

use rebalancing_bst::source::{RandomValues, ValueSource};
use rebalancing_bst::tree::Tree;

#[derive(Debug, thiserror::Error)]
enum DemoError {
    #[error("failed to initialize logging: {0}")]
    Logging(#[from] log::SetLoggerError),
}

/// Build a BST from random values below 100, unbalance it, then rebalance it.
#[derive(Parser, Debug)]
#[command(name = "bst-demo", version)]
struct DemoArgs {
    /// How many random values to start the tree with.
    #[arg(long, default_value_t = 10)]
    size: usize,

    /// Seed for the random values. A fresh seed is used when omitted.
    #[arg(long)]
    seed: Option<u64>,

    /// Values inserted after the random ones to push the tree out of balance.
    #[arg(long, num_args = 1.., default_values_t = [150, 120, 180])]
    extra: Vec<i32>,

    /// Log more (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl DemoArgs {
    fn log_level(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }

    fn source(&self) -> RandomValues {
        match self.seed {
            Some(seed) => RandomValues::seeded(seed),
            None => RandomValues::from_entropy(),
        }
    }
}

fn print_traversals<T>(tree: &Tree<T>, suffix: &str)
where
    T: Clone + Debug,
{
    println!("Level order{suffix}: {:?}", tree.level_order());
    println!("Pre-order{suffix}: {:?}", tree.pre_order());
    println!("Post-order{suffix}: {:?}", tree.post_order());
    println!("In-order{suffix}: {:?}", tree.in_order());
}

fn main() -> Result<(), DemoError> {
    let args = DemoArgs::parse();
    TermLogger::init(
        args.log_level(),
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )?;
    info!("Starting with {args:?}");

    let values = args.source().values(args.size);
    let mut tree: Tree<_> = values.iter().copied().collect();
    println!("Random array: {values:?}");
    println!("Is tree balanced? {}", tree.is_balanced());
    print_traversals(&tree, "");

    tree.extend(args.extra.iter().copied());
    info!("Inserted {} extra values, height is now {}", args.extra.len(), tree.height());
    println!(
        "Is tree balanced after adding {:?}? {}",
        args.extra,
        tree.is_balanced()
    );

    tree.rebalance();
    println!("Is tree balanced after rebalancing? {}", tree.is_balanced());
    print_traversals(&tree, " after rebalancing");

    Ok(())
}
