use clap::Subcommand;
use herodex_lib::{PollChoice, Repository};

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Cast a vote: yes or no
    Vote { choice: String },
    /// Show the running tally
    Results,
}

pub fn handle(repo: &Repository, cmd: &Command) {
    match cmd {
        Command::Vote { choice } => match choice.parse::<PollChoice>() {
            Ok(choice) => {
                let tally = repo.vote_poll(choice).unwrap();
                println!(
                    "Vote counted. Yes: {}, No: {} ({} total)",
                    tally.yes_votes,
                    tally.no_votes,
                    tally.total()
                );
            }
            Err(_) => eprintln!("Vote \"yes\" or \"no\""),
        },
        Command::Results => {
            let tally = repo.poll_results().unwrap();
            println!(
                "Yes: {}, No: {} ({} total)",
                tally.yes_votes,
                tally.no_votes,
                tally.total()
            );
        }
    }
}
