use colored::Colorize;
use herodex_lib::{HeroRecord, Repository, battle::BattleFlow};

#[derive(clap::Args, Debug, Clone)]
pub struct Args {
    /// First combatant's id
    pub first: String,
    /// Second combatant's id
    pub second: String,
    /// Id of the hero you predict will win
    #[arg(long)]
    pub predict: Option<String>,
}

pub fn handle(repo: &Repository, args: &Args) {
    let mut flow = BattleFlow::new();

    if let Err(err) = flow.select_heroes(repo, &args.first, &args.second) {
        eprintln!("{err}");
        return;
    }

    let (first, second) = flow.combatants();
    announce(first, &args.first);
    announce(second, &args.second);

    let Some(predicted) = args.predict.as_deref() else {
        eprintln!("a predicted winner must be chosen (--predict <ID>)");
        return;
    };

    if let Err(err) = flow.vote_winner(predicted) {
        eprintln!("{err}");
        return;
    }

    let result = flow.result().expect("the flow just produced its result");
    println!("{}", result.message.bold());
    if let (Some(winner), Some(loser)) = (&result.winner, &result.loser) {
        println!(
            "{} ({}) defeats {} ({})",
            winner.title,
            winner.score(),
            loser.title,
            loser.score()
        );
    }
}

fn announce(hero: Option<&HeroRecord>, id: &str) {
    match hero {
        Some(hero) => println!(
            "{} enters with a combined stat of {}",
            hero.title,
            hero.score()
        ),
        None => println!("No hero with id {id}; the slot stays empty"),
    }
}
