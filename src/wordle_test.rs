use std::collections::BTreeSet;

use crate::error::{GameError, Inactive};
use crate::wordle::*;

fn letters(target: &str, word: &str) -> Vec<Letter> {
    assess(target, word).unwrap().letters
}

fn set(letters: &str) -> BTreeSet<char> {
    letters.chars().collect()
}

#[test]
fn it_works() {
    let assessment = assess("hello", "bolle").unwrap();

    assert_eq!(
        assessment.letters,
        vec![
            Letter::Wrong('B'),
            Letter::CorrectButWrongPosition('O'),
            Letter::Correct('L'),
            Letter::Correct('L'),
            Letter::CorrectButWrongPosition('E'),
        ]
    );
    assert_eq!(assessment.present, set("OLE"));
    assert_eq!(assessment.absent, set("B"));
    assert!(!assessment.is_match());
}

#[test]
fn exact_guess_is_all_correct() {
    let assessment = assess("marry", "marry").unwrap();

    assert!(assessment.letters.iter().all(Letter::is_correct));
    assert!(assessment.is_match());
    assert!(assessment.absent.is_empty());
}

#[test]
fn duplicate_letter_credits_leftmost_then_runs_out() {
    // Two Rs in the target: one is claimed by the exact match at position 2, the
    // leftmost remaining R gets the other, and the last R gets nothing.
    let assessment = assess("marry", "rarer").unwrap();

    assert_eq!(
        assessment.letters,
        vec![
            Letter::CorrectButWrongPosition('R'),
            Letter::Correct('A'),
            Letter::Correct('R'),
            Letter::Wrong('E'),
            Letter::Wrong('R'),
        ]
    );
    assert_eq!(assessment.present, set("AR"));
    assert_eq!(assessment.absent, set("E"));
}

#[test]
fn exact_match_to_the_right_still_claims_its_copy() {
    // The L at position 0 is exact, which leaves one L for position 2.
    assert_eq!(
        letters("llama", "lolly"),
        vec![
            Letter::Correct('L'),
            Letter::Wrong('O'),
            Letter::CorrectButWrongPosition('L'),
            Letter::Wrong('L'),
            Letter::Wrong('Y'),
        ]
    );

    // The exact match comes last, so it must not be handed to the earlier As.
    assert_eq!(
        letters("pizza", "aaaaa"),
        vec![
            Letter::Wrong('A'),
            Letter::Wrong('A'),
            Letter::Wrong('A'),
            Letter::Wrong('A'),
            Letter::Correct('A'),
        ]
    );
}

#[test]
fn excess_duplicates_are_wrong_from_the_left() {
    // Two Es in the target, three in the guess, none in place.
    assert_eq!(
        letters("steep", "eerie"),
        vec![
            Letter::CorrectButWrongPosition('E'),
            Letter::CorrectButWrongPosition('E'),
            Letter::Wrong('R'),
            Letter::Wrong('I'),
            Letter::Wrong('E'),
        ]
    );
}

#[test]
fn excess_duplicates_are_not_reported_absent() {
    let assessment = assess("marry", "rarer").unwrap();
    assert!(!assessment.absent.contains(&'R'));

    let assessment = assess("crane", "geese").unwrap();
    assert_eq!(assessment.present, set("E"));
    assert_eq!(assessment.absent, set("GS"));
}

#[test]
fn correct_count_matches_exact_positions() {
    let cases = [
        ("marry", "merry"),
        ("crane", "nacre"),
        ("steep", "sweep"),
        ("hello", "llama"),
    ];
    for (target, word) in cases {
        let expected = target.chars().zip(word.chars()).filter(|(t, w)| t == w).count();
        let correct = letters(target, word).iter().filter(|l| l.is_correct()).count();
        assert_eq!(correct, expected, "{} vs {}", word, target);
    }
}

#[test]
fn assess_rejects_wrong_length() {
    assert_eq!(
        assess("marry", "mar"),
        Err(GameError::InvalidGuessLength { expected: 5 })
    );
}

#[test]
fn game_id_is_stable() {
    assert_eq!(game_id("marry"), 80474);
    assert_eq!(game_id("hello"), 222994);
    assert_eq!(Game::new("MARRY").unwrap().game_id(), game_id("marry"));
    assert!(game_id("crane") < GAME_ID_SPACE as u32);
}

#[test]
fn new_game_rejects_wrong_length() {
    assert!(Game::new("hi").is_err());
}

#[test]
fn new_game_starts_empty() {
    let game = Game::new("marry").unwrap();

    assert_eq!(game.num_guesses(), 0);
    assert_eq!(game.guesses_remaining(), MAX_GUESSES);
    assert_eq!(game.known_letters(), "*****");
    assert_eq!(game.state(), State::Playing);
    assert!(game.can_guess());
    assert_eq!(game.inactive(), None);
}

#[test]
fn winning_guess_ends_game() {
    let mut game = Game::new("marry").unwrap();
    let result = game.make_guess("MARRY").unwrap();

    assert!(result.is_match);
    assert_eq!(result.known_letters, "MARRY");
    assert_eq!(result.known_letters_in_word, set("AMRY"));
    assert_eq!(result.guesses_remaining, 5);
    assert_eq!(result.correct_answer, None);
    assert_eq!(game.state(), State::Won);
    assert!(!game.can_guess());
    assert_eq!(game.inactive(), Some(Inactive::Won));
}

#[test]
fn knowledge_accumulates_across_guesses() {
    let mut game = Game::new("marry").unwrap();

    let result = game.make_guess("rarer").unwrap();
    assert_eq!(result.known_letters, "*AR**");
    assert_eq!(result.known_letters_in_word, set("AR"));
    assert_eq!(result.incorrectly_guessed_letters, set("E"));

    let result = game.make_guess("hurry").unwrap();
    assert_eq!(result.known_letters, "*ARRY");
    assert_eq!(result.known_letters_in_word, set("ARY"));
    assert_eq!(result.incorrectly_guessed_letters, set("EHU"));

    // Known positions are never cleared by a later, worse guess.
    let result = game.make_guess("crane").unwrap();
    assert_eq!(result.known_letters, "*ARRY");
    assert_eq!(result.incorrectly_guessed_letters, set("CEHNU"));
}

#[test]
fn answer_is_revealed_only_when_guesses_run_out() {
    let mut game = Game::new("marry").unwrap();
    let guesses = ["crane", "slate", "hello", "pizza", "steep", "lolly"];

    for (i, guess) in guesses.iter().enumerate() {
        let result = game.make_guess(guess).unwrap();
        assert_eq!(result.guesses_remaining, MAX_GUESSES - i as u32 - 1);
        if i + 1 < guesses.len() {
            assert_eq!(result.correct_answer, None);
            assert!(game.can_guess());
        } else {
            assert_eq!(result.correct_answer, Some("MARRY".to_string()));
        }
    }

    assert_eq!(game.state(), State::Lost);
    assert!(!game.can_guess());
    assert_eq!(game.inactive(), Some(Inactive::Exhausted));
}

#[test]
fn winning_on_the_last_guess_does_not_reveal() {
    let mut game = Game::new("marry").unwrap();
    for guess in ["crane", "slate", "hello", "pizza", "steep"] {
        game.make_guess(guess).unwrap();
    }

    let result = game.make_guess("marry").unwrap();
    assert!(result.is_match);
    assert_eq!(result.guesses_remaining, 0);
    assert_eq!(result.correct_answer, None);
    assert_eq!(game.state(), State::Won);
    assert_eq!(game.inactive(), Some(Inactive::Exhausted));
}

#[test]
fn rejected_guess_still_counts() {
    let mut game = Game::new("marry").unwrap();

    assert_eq!(
        game.make_guess("mar"),
        Err(GameError::InvalidGuessLength { expected: 5 })
    );
    assert_eq!(game.num_guesses(), 1);
    assert_eq!(game.guesses_remaining(), 5);
}

#[test]
fn guess_result_serializes_like_the_api() {
    let mut game = Game::new("marry").unwrap();
    let result = game.make_guess("rarer").unwrap();
    let json = serde_json::to_value(&result).unwrap();

    assert_eq!(
        json,
        serde_json::json!({
            "letter1": "wrong position",
            "letter2": "correct",
            "letter3": "correct",
            "letter4": "incorrect",
            "letter5": "incorrect",
            "guess_result": "incorrect",
            "incorrectly_guessed_letters": ["E"],
            "known_letters_in_word": ["A", "R"],
            "known_letters": "*AR**",
            "guesses_remaining": 5,
        })
    );
}

#[test]
fn revealed_answer_is_serialized() {
    let mut game = Game::new("marry").unwrap();
    let mut result = None;
    for _ in 0..MAX_GUESSES {
        result = Some(game.make_guess("crane").unwrap());
    }

    let json = serde_json::to_value(result.unwrap()).unwrap();
    assert_eq!(json["correct_answer"], "MARRY");
    assert_eq!(json["guesses_remaining"], 0);
}
