use anyhow::{Context, Result};
use haplogrep_wrapper::config::Config;
use haplogrep_wrapper::haplogrep::{tree_label, KNOWN_TREES};
use std::path::Path;

pub fn run(config: &Config, haplogrep: Option<&Path>, known: bool) -> Result<()> {
    if known {
        for (tree, label) in KNOWN_TREES {
            let marker = if *tree == config.default_tree { "*" } else { " " };
            println!("{} {}\t{}", marker, tree, label);
        }
        return Ok(());
    }

    let wrapper = super::open_wrapper(config, haplogrep)?;
    let trees = wrapper
        .available_trees()
        .context("Could not retrieve trees")?;

    println!("Available classification trees:");
    for tree in trees {
        match tree_label(&tree) {
            Some(label) => println!("  - {} ({})", tree, label),
            None => println!("  - {}", tree),
        }
    }
    Ok(())
}
