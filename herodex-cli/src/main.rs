use clap::{Parser, Subcommand};
use herodex_lib::Repository;
use tracing::Level;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

mod battle;
mod comment;
mod compare;
mod hero;
mod poll;

#[derive(Parser, Debug)]
#[command(name = "herodex")]
#[command(author, version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone)]
enum Command {
    /// Operate on hero records
    #[command(subcommand)]
    Hero(hero::Command),
    /// Operate on comments
    #[command(subcommand)]
    Comment(comment::Command),
    /// Vote in or inspect the site poll
    #[command(subcommand)]
    Poll(poll::Command),
    /// Run a one-on-one battle with a predicted winner
    Battle(battle::Args),
    /// Compare two heroes stat by stat
    Compare(compare::Args),
    /// Load the starting dataset into an empty store
    Seed,
}

fn main() {
    // Human friendly panicking in release mode
    human_panic::setup_panic!();

    // Logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::TRACE)
        .with_env_filter(EnvFilter::from_default_env())
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .expect("setting default subscriber failed");

    let repo = Repository::new();
    let cli = Cli::parse();

    match &cli.command {
        Command::Hero(cmd) => hero::handle(&repo, cmd),
        Command::Comment(cmd) => comment::handle(&repo, cmd),
        Command::Poll(cmd) => poll::handle(&repo, cmd),
        Command::Battle(args) => battle::handle(&repo, args),
        Command::Compare(args) => compare::handle(&repo, args),
        Command::Seed => {
            if repo.seed_if_empty().unwrap() {
                println!(
                    "Loaded the starting dataset into {}",
                    repo.data_dir().display()
                );
            } else {
                println!("The store already has hero records; nothing to do");
            }
        }
    }
}
