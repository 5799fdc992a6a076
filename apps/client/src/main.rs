//! Terminal front end for the StudySync review flow.

use anyhow::bail;
use review_core::{CardFilter, Difficulty, NavigateTarget, SessionPhase, SessionTally};
use studysync_client::{ApiClient, ClientConfig, ReviewController};
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ClientConfig::from_env();
    let client = ApiClient::new(&config.base_url);

    if !client.check_connectivity().await? {
        bail!("backend not reachable at {}", config.base_url);
    }
    let Some(token) = config.token else {
        bail!("STUDYSYNC_TOKEN is not set");
    };
    let client = client.with_token(token);

    let mut controller = ReviewController::new(client);
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    match controller.stats().await {
        Ok(stats) => println!(
            "{} cards, {} due, {} reviews so far ({:.1}% accuracy)",
            stats.total_flashcards,
            stats.due_for_review,
            stats.total_reviews,
            stats.accuracy_percentage
        ),
        Err(e) => eprintln!("could not fetch stats: {e}"),
    }

    loop {
        println!("\nReview due cards only? [Y]es / [a]ll / [q]uit");
        let Some(answer) = read_line(&mut lines).await? else {
            break;
        };
        let filter = match answer.as_str() {
            "" | "y" | "yes" => CardFilter::DueOnly,
            "a" | "all" => CardFilter::All,
            "q" | "quit" => break,
            other => {
                println!("unrecognized: {other}");
                continue;
            }
        };

        if let Err(e) = controller.start(filter).await {
            eprintln!("could not start session: {e}");
            continue;
        }

        if controller.session().phase() == SessionPhase::Complete {
            println!("No cards to review.");
            continue;
        }

        run_session(&mut controller, &mut lines).await?;
        print_tally(controller.session().tally());
    }

    Ok(())
}

/// Drive one session to completion (or until the user quits).
async fn run_session(
    controller: &mut ReviewController<ApiClient>,
    lines: &mut Lines<BufReader<Stdin>>,
) -> anyhow::Result<()> {
    while controller.session().phase() == SessionPhase::Active {
        let session = controller.session();
        let card = match session.current() {
            Some(card) => card,
            None => break,
        };

        println!(
            "\n--- card {}/{} ---",
            session.cursor() + 1,
            session.queue_len()
        );
        println!("Q: {}", card.front);
        if session.is_revealed() {
            println!("A: {}", card.back);
            println!("[e]asy / [m]edium / [h]ard / [p]rev / [f]irst / [q]uit");
        } else {
            println!("[r]eveal / [p]rev / [f]irst / [q]uit");
        }

        let Some(input) = read_line(lines).await? else {
            break;
        };

        let result = match input.as_str() {
            "" | "r" | "reveal" => controller.reveal(),
            "p" | "prev" => controller.navigate(NavigateTarget::Prev),
            "f" | "first" => controller.navigate(NavigateTarget::First),
            "q" | "quit" => break,
            "e" | "easy" => grade(controller, Difficulty::Easy).await,
            "m" | "medium" => grade(controller, Difficulty::Medium).await,
            "h" | "hard" => grade(controller, Difficulty::Hard).await,
            other => {
                println!("unrecognized: {other}");
                Ok(())
            }
        };

        if let Err(e) = result {
            eprintln!("{e}");
        }
    }
    Ok(())
}

async fn grade(
    controller: &mut ReviewController<ApiClient>,
    difficulty: Difficulty,
) -> Result<(), studysync_client::ClientError> {
    let report = controller.grade(difficulty).await?;
    if let Some(next) = report.updated.next_review {
        println!("next review: {}", next.format("%Y-%m-%d"));
    }
    Ok(())
}

fn print_tally(tally: &SessionTally) {
    println!(
        "\nSession done: {} graded ({} easy, {} medium, {} hard)",
        tally.total, tally.easy, tally.medium, tally.hard
    );
}

/// One trimmed, lowercased line of input; `None` on EOF.
async fn read_line(lines: &mut Lines<BufReader<Stdin>>) -> anyhow::Result<Option<String>> {
    Ok(lines
        .next_line()
        .await?
        .map(|l| l.trim().to_lowercase()))
}
