use std::cmp::Ordering;

use colored::Colorize;
use herodex_lib::{Repository, compare::Comparison};

#[derive(clap::Args, Debug, Clone)]
pub struct Args {
    /// Left-hand hero's id
    pub first: String,
    /// Right-hand hero's id
    pub second: String,
}

pub fn handle(repo: &Repository, args: &Args) {
    let first = repo.hero(&args.first).unwrap();
    let second = repo.hero(&args.second).unwrap();

    let (Some(first), Some(second)) = (first, second) else {
        eprintln!("Both heroes must exist to compare them");
        return;
    };

    let comparison = Comparison::new(first, second);
    println!(
        "{:<14} {:>18} {:>18}",
        "",
        comparison.first.title.bold(),
        comparison.second.title.bold()
    );

    for line in comparison.lines() {
        let marker = match line.edge() {
            Ordering::Greater => "<",
            Ordering::Less => ">",
            Ordering::Equal => "=",
        };
        println!(
            "{:<14} {:>18} {marker} {:>16}",
            line.stat.to_string(),
            line.first,
            line.second
        );
    }

    let (left, right) = comparison.totals();
    println!("{:<14} {left:>18}   {right:>16}", "Combined");
}
