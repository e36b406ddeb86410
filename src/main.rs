use anyhow::Context;
use clap::Parser;
use edit_match::{
    cli::{Cli, Command},
    closest::load_bookmarks,
    config::EXAMPLE_PAIR,
    *,
};
use itertools::Itertools;

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Cli::parse();

    let Some(command) = args.command else {
        let (a, b) = EXAMPLE_PAIR;
        println!("{}", edit_distance(a.as_bytes(), b.as_bytes()));
        return Ok(());
    };

    match command {
        Command::Distance { a, b, memo, stats } => {
            let (a, b) = (a.chars().collect_vec(), b.chars().collect_vec());
            if memo || stats {
                let (distance, memo_stats) = edit_distance_memo(&a, &b);
                println!("{distance}");
                if stats {
                    eprintln!("{memo_stats}");
                }
            } else {
                println!("{}", edit_distance(&a, &b));
            }
        }
        Command::Score { a, b, algorithm } => {
            let (a, b) = (a.chars().collect_vec(), b.chars().collect_vec());
            println!("{}", algorithm.score(&a, &b));
        }
        Command::Closest { url, search } => {
            let roots = load_bookmarks(&search.bookmarks).with_context(|| {
                format!("failed to read bookmarks from {}", search.bookmarks.display())
            })?;
            match closest_bookmark(&url, &roots, search.algorithm, search.min_score) {
                Closest::Unique { score, bookmark } => {
                    println!("{score}\t{}\t{}", bookmark.title, bookmark.url);
                }
                Closest::Ambiguous { score, bookmarks } => {
                    println!(
                        "Could not find a unique closest bookmark. Found {} closest bookmarks with {score} matches:",
                        bookmarks.len()
                    );
                    for bookmark in bookmarks {
                        println!("  {}", bookmark.url);
                    }
                }
                Closest::NoMatch { .. } => {
                    println!(
                        "Could not find any bookmark that shares at least {} characters!",
                        search.min_score
                    );
                }
            }
        }
    }
    Ok(())
}
