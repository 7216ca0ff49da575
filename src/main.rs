use std::sync::Arc;

use anyhow::Context;
use movie_recs_client::{
    api::HttpMovieApi,
    config::Config,
    models::{FeedbackEvent, Genre, Mood, Recommendation},
    services::Notifier,
    AppState, ViewSnapshot,
};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::EnvFilter;

/// Prints acknowledgements inline; stands in for a modal dialog
struct StdoutNotifier;

impl Notifier for StdoutNotifier {
    fn acknowledge(&self, message: &str) {
        println!("** {} **", message);
    }
}

const HELP: &str = "\
commands:
  genre [NAME]        set genre (Comedy, Action, Drama, Sci-Fi, Romance); no name clears
  mood [NAME]         set mood (happy, sad, excited, calm); no name clears
  search [TEXT]       filter recommendations by title
  clear               clear the search text
  view                switch between recommendations and favorites
  submit              request recommendations
  fav TITLE           toggle TITLE as a favorite
  rate SCORE TITLE    rate TITLE
  show                print the current state
  quit";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("movie_recs_client=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = Config::from_env()?;
    tracing::info!(api_url = %config.api_url, "Starting movie recommender client");

    let api = Arc::new(HttpMovieApi::new(config.api_url.clone()));
    let app = AppState::new(api, Arc::new(StdoutNotifier), &config);
    app.start();

    println!("{}", HELP);
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await.context("Failed to read input")? {
        let (command, rest) = match line.trim().split_once(' ') {
            Some((command, rest)) => (command.to_string(), rest.trim().to_string()),
            None => (line.trim().to_string(), String::new()),
        };

        match command.as_str() {
            "" => {}
            "quit" | "exit" => break,
            "help" => println!("{}", HELP),
            "genre" => match parse_optional::<Genre>(&rest) {
                Ok(genre) => app.form.set_genre(genre).await,
                Err(e) => println!("{}", e),
            },
            "mood" => match parse_optional::<Mood>(&rest) {
                Ok(mood) => app.form.set_mood(mood).await,
                Err(e) => println!("{}", e),
            },
            "search" => app.form.set_search_query(rest).await,
            "clear" => app.form.clear_search().await,
            "view" => {
                app.form.toggle_view_mode().await;
            }
            "submit" => {
                app.submit().await;
            }
            "fav" => {
                let snapshot = app.snapshot().await;
                let is_favorite = lookup(&snapshot, &rest)
                    .map(Recommendation::is_favorite)
                    .unwrap_or_else(|| snapshot.favorites.iter().any(|f| f.title == rest));
                app.toggle_favorite(rest, is_favorite);
            }
            "rate" => match rest.split_once(' ') {
                // Unvalidated like the number widget it replaces
                Some((score, title)) => {
                    app.rate(title.trim(), FeedbackEvent::score_from_input(score));
                }
                None => println!("usage: rate SCORE TITLE"),
            },
            "show" => render(&app.snapshot().await),
            other => println!("unknown command '{}', try 'help'", other),
        }
    }

    Ok(())
}

fn parse_optional<T>(value: &str) -> Result<Option<T>, T::Err>
where
    T: std::str::FromStr,
{
    if value.is_empty() {
        Ok(None)
    } else {
        value.parse().map(Some)
    }
}

fn lookup<'a>(snapshot: &'a ViewSnapshot, title: &str) -> Option<&'a Recommendation> {
    snapshot.recommendations.iter().find(|r| r.title == title)
}

fn render(snapshot: &ViewSnapshot) {
    let selection = &snapshot.selection;
    println!(
        "genre={} mood={} search={:?} view={:?}",
        selection.genre.map(|g| g.as_str()).unwrap_or("-"),
        selection.mood.map(|m| m.as_str()).unwrap_or("-"),
        selection.search_query,
        selection.view_mode,
    );
    if snapshot.loading {
        println!("loading...");
    }
    if let Some(error) = &snapshot.error {
        println!("error: {}", error);
    }
    for rec in &snapshot.visible {
        let year = rec
            .release_year
            .map(|y| y.to_string())
            .unwrap_or_else(|| "N/A".to_string());
        let marker = if rec.is_favorite() { "*" } else { " " };
        println!("{} {} ({}) [{}]", marker, rec.title, year, rec.genres.join(", "));
    }
}
