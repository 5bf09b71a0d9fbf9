// Interactive game flow: set up the startups, read guesses until every one of
// them is sunk, then print the score.
//
// Input and output are passed in as `BufRead`/`Write` so the whole loop can be
// driven from tests with in-memory buffers.

use std::io::{BufRead, Write};

use anyhow::{bail, Context, Result};
use startup_core::{Codec, GameConfig, IndexSource, Outcome, Session, SessionState, TurnResolver};
use tracing::{debug, info};

use crate::visualize::{display_board, GuessBoard};

/// Print the intro and place every configured startup.
pub fn setup_game<S: IndexSource, W: Write>(
    config: &GameConfig,
    source: S,
    out: &mut W,
) -> Result<Session> {
    let session = Session::setup(config, source).context("failed to place startups")?;
    for (name, placement) in &session.placements {
        debug!(name = name.as_str(), labels = ?placement.labels, "startup placed");
    }

    writeln!(out, "Your goal is to sink {} Startups.", config.targets.len())?;
    writeln!(out, "{}", config.target_names().join(", "))?;
    writeln!(out, "Try to sink them all in the fewest number of guesses!!")?;
    Ok(session)
}

/// Read guesses from `input` until the session is finished. Returns the number
/// of guesses it took.
///
/// Typing `show` prints the board of guesses so far and does not count as a
/// guess.
pub fn play<R: BufRead, W: Write>(
    resolver: &mut TurnResolver,
    codec: Codec,
    input: &mut R,
    out: &mut W,
) -> Result<u32> {
    let mut board = GuessBoard::new(codec);

    while resolver.state() == SessionState::Playing {
        write!(out, "Enter a guess: ")?;
        out.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line).context("failed to read guess")? == 0 {
            bail!(
                "input closed after {} guesses with {} startups left",
                resolver.guesses(),
                resolver.targets().len()
            );
        }
        let guess = line.trim().to_lowercase();

        if guess == "show" {
            display_board(&board, out)?;
            continue;
        }

        let report = resolver.submit_guess(&guess)?;
        if !board.record(&guess, report.outcome) {
            debug!(guess = guess.as_str(), "guess is not a cell on the board");
        }

        if let (Outcome::Destroyed, Some(name)) = (report.outcome, &report.target) {
            writeln!(out, "Ouch! You sunk {name} :(")?;
        }
        writeln!(out, "{}", report.outcome)?;
    }

    info!(guesses = resolver.guesses(), "game over");
    Ok(resolver.guesses())
}

/// Closing lines, depending on how the guess count compares to `par`.
pub fn finish_message(guesses: u32, par: u32) -> String {
    let mut message = String::from("All Startups are dead!! Your stock is now worthless.\n");
    if guesses <= par {
        message.push_str(&format!("It only took you {guesses} guesses.\n"));
        message.push_str("You got out before your options sank.");
    } else {
        message.push_str(&format!("Took you long enough. {guesses} guesses.\n"));
        message.push_str("Fish are dancing with your options");
    }
    message
}

/// Set up, play and score one full game.
pub fn run<S: IndexSource, R: BufRead, W: Write>(
    config: &GameConfig,
    source: S,
    input: &mut R,
    out: &mut W,
) -> Result<u32> {
    let mut session = setup_game(config, source, out)?;
    let codec = Codec::new(config.width)?;
    let guesses = play(&mut session.resolver, codec, input, out)?;
    writeln!(out, "{}", finish_message(guesses, config.par_guesses))?;
    Ok(guesses)
}
