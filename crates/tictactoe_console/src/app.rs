//! Wires configuration, console I/O and the engine into one game.

use crate::config::GameConfig;
use crate::console::ConsoleRenderer;
use anyhow::{Context, Result};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io::{BufRead, Write};
use tictactoe_engine::{
    GameState, GameStatus, HumanMoveSource, PlayerKind, RandomMoveSource, TurnController,
};
use tracing::{info, instrument};

/// Plays one complete game and returns its final status.
///
/// Prompts go to `prompt_out`; announcements and boards go to `render_out`.
/// On a terminal these are both stdout.
#[instrument(skip(input, prompt_out, render_out))]
pub fn run_game<R, P, O>(
    config: &GameConfig,
    input: R,
    prompt_out: P,
    render_out: O,
) -> Result<GameStatus>
where
    R: BufRead + 'static,
    P: Write + 'static,
    O: Write,
{
    let mut renderer = ConsoleRenderer::new(render_out);
    renderer.welcome();

    let mut human = HumanMoveSource::new(PlayerKind::Human.to_string(), input, prompt_out);
    let human_mark = match config.mark() {
        Some(mark) => *mark,
        None => human
            .choose_mark()
            .context("Failed to read symbol choice")?,
    };

    let mut rng = match config.seed() {
        Some(seed) => StdRng::seed_from_u64(*seed),
        None => StdRng::from_os_rng(),
    };

    let state = match config.first().fixed() {
        Some(first) => GameState::new(human_mark, first),
        None => GameState::with_random_start(human_mark, &mut rng),
    };
    info!(%human_mark, first = %state.active_player(), "Game starting");

    let computer = RandomMoveSource::new(PlayerKind::Computer.to_string(), rng);
    let mut controller = TurnController::new(state, Box::new(human), Box::new(computer));

    let status = controller.run(&mut renderer).context("Game aborted")?;
    info!(?status, "Game finished");
    Ok(status)
}
