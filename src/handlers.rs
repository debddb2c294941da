use anyhow::anyhow;
use log::*;
use mobot::*;
use serde::Serialize;

use crate::app::*;
use crate::wordle::{MAX_GUESSES, WORD_LENGTH};

/// Command is a chat message, parsed.
#[derive(Debug, Eq, PartialEq)]
pub enum Command<'a> {
    NewGame,
    Guess { game_id: Option<u32>, word: &'a str },
    BadGameId(&'a str),
    Help,
    Unknown,
}

/// NewGame is the reply to a /new command.
#[derive(Serialize)]
struct NewGame {
    game_id: u32,
}

/// parse_command understands `/new`, `/guess <game_id> <word>`, `/guess <word>`,
/// `/help`, and a bare word, which is a guess against whatever game is active.
pub fn parse_command(text: &str) -> Command<'_> {
    let mut args = text.split_whitespace();
    let Some(first) = args.next() else {
        return Command::Unknown;
    };
    let rest = args.collect::<Vec<_>>();

    // In group chats commands arrive as /command@botname.
    let command = first.split('@').next().unwrap_or(first);

    match (command, rest.as_slice()) {
        ("/new" | "/start", _) => Command::NewGame,
        ("/help", _) => Command::Help,
        ("/guess", &[word]) => Command::Guess {
            game_id: None,
            word,
        },
        ("/guess", &[game_id, word]) => match game_id.parse::<u32>() {
            Ok(game_id) => Command::Guess {
                game_id: Some(game_id),
                word,
            },
            Err(_) => Command::BadGameId(game_id),
        },
        (_, &[]) if !first.starts_with('/') => Command::Guess {
            game_id: None,
            word: first,
        },
        _ => Command::Unknown,
    }
}

async fn help(app: &App) -> String {
    let mut help = format!(
        "Welcome to {}! Guess the {}-letter word within {} tries.

/new starts a new game and replies with its game_id.
/guess <game_id> <word> plays a word in that game. You can also just type the word.",
        app.game_name, WORD_LENGTH, MAX_GUESSES
    );
    let can_guess = app.can_guess().await;
    match app.game_id().await {
        Some(game_id) if can_guess => {
            help.push_str(&format!("\n\nCurrent game_id: {}", game_id))
        }
        _ => help.push_str("\n\nType /new to start a game."),
    }
    help
}

/// respond runs a chat message against the app and returns the reply: JSON for
/// new games and scored guesses, plain text when a guess is rejected.
pub async fn respond(app: &App, text: &str) -> Result<String, anyhow::Error> {
    let reply = match parse_command(text) {
        Command::NewGame => serde_json::to_string(&NewGame {
            game_id: app.start_game().await?,
        })?,

        Command::Guess { game_id, word } => match app.play_turn(game_id, word).await {
            Ok(result) => serde_json::to_string(&result)?,
            Err(err) => err.to_string(),
        },

        Command::BadGameId(game_id) => format!("'{}' is not a valid game_id", game_id),

        Command::Help => help(app).await,

        Command::Unknown => "I don't know that command.".into(),
    };

    Ok(reply)
}

/// handle_chat_event is the main Telegram handler for the bot.
pub async fn handle_chat_event(e: Event, state: State<App>) -> Result<Action, anyhow::Error> {
    // Get the message
    let message = e
        .update
        .get_message()?
        .clone()
        .text
        .ok_or(anyhow!("No message text"))?;

    // Get the sender
    let from = e.update.get_message()?.clone().from.unwrap_or_default();

    info!(
        "{} ({}) sent {}",
        from.first_name,
        from.username.clone().unwrap_or("unknown".into()),
        message
    );

    let app = state.get().read().await;
    let reply = respond(&app, &message).await?;

    Ok(Action::ReplyText(reply))
}
