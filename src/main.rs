use anyhow::Context;
use argh::FromArgs;
use log::*;
use mobot::*;

use crate::app::App;
use crate::handlers::handle_chat_event;
use crate::words::WordList;

mod app;
mod error;
mod handlers;
mod wordle;
mod words;

#[cfg(test)]
mod wordle_test;

#[derive(FromArgs)]
/// Play Wordle over Telegram.
struct Args {
    /// file containing the words players may guess, one per line
    #[argh(option, short = 'w', default = "String::from(\"words.txt\")")]
    words: String,

    /// use this target word for every game instead of a random one
    #[argh(option, short = 's')]
    secret: Option<String>,

    /// name of the game, shown in /help
    #[argh(option, short = 'n', default = "String::from(\"Wordle\")")]
    name: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    mobot::init_logger();
    let args: Args = argh::from_env();

    let words = WordList::load(&args.words)?;
    info!("Loaded {} words from {}", words.len(), args.words);

    let mut app = App::new(args.name, words);
    if let Some(secret) = args.secret {
        warn!("Target word pinned for every game");
        app.set_secret_word(secret)?;
    }

    let token = std::env::var("TELEGRAM_TOKEN").context("TELEGRAM_TOKEN is not set")?;
    let client = Client::new(token);
    info!("Starting bot...");
    Router::new(client)
        .with_state(app)
        .add_route(Route::Default, handle_chat_event)
        .start()
        .await;

    Ok(())
}
