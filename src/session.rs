//! One game between a human at a [`Console`] and a Q-learning agent.

use serde::{Deserialize, Serialize};

use crate::{
    Error, Result,
    ports::Console,
    q_learning::QLearningAgent,
    tictactoe::{GameEngine, GameOutcome, Player, mark_for_ply},
};

/// How an interactive game ended, from the human's side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionOutcome {
    HumanWin,
    AiWin,
    Tie,
}

impl SessionOutcome {
    pub fn message(self) -> &'static str {
        match self {
            SessionOutcome::HumanWin => "You win!",
            SessionOutcome::AiWin => "AI wins!",
            SessionOutcome::Tie => "It's a tie!",
        }
    }
}

/// Runs human-vs-agent games over a console.
///
/// X always moves first. The agent never learns from these games.
pub struct InteractiveSession<C> {
    console: C,
    play_epsilon: f64,
}

impl<C: Console> InteractiveSession<C> {
    pub fn new(console: C, play_epsilon: f64) -> Self {
        Self {
            console,
            play_epsilon,
        }
    }

    pub fn into_console(self) -> C {
        self.console
    }

    /// Play a single game to completion.
    ///
    /// # Errors
    ///
    /// Fails if the console runs out of input or cannot be written to.
    pub fn play(&mut self, agent: &mut QLearningAgent) -> Result<SessionOutcome> {
        let human = self.console.prompt_side()?;
        let ai = human.opponent();
        log::info!(
            "human plays {human}, agent plays {ai} (epsilon {})",
            self.play_epsilon
        );

        let mut engine = GameEngine::new();
        engine.reset();

        loop {
            self.console.show_board(engine.board())?;
            let mark = mark_for_ply(Player::X, engine.ply());

            if mark == human {
                self.human_move(&mut engine, human)?;
            } else {
                let legal = engine.legal_actions();
                let position =
                    agent.select_action_with(&engine.state(), &legal, self.play_epsilon)?;
                engine.apply_move(position, ai)?;
                self.console.show_message(&format!("AI chose: {position}"))?;
            }

            if let Some(outcome) = GameOutcome::from_status(engine.status()) {
                self.console.show_board(engine.board())?;
                let outcome = match outcome {
                    GameOutcome::Win(winner) if winner == human => SessionOutcome::HumanWin,
                    GameOutcome::Win(_) => SessionOutcome::AiWin,
                    GameOutcome::Draw => SessionOutcome::Tie,
                };
                self.console.show_message(outcome.message())?;
                log::info!("game over after {} plies: {outcome:?}", engine.ply());
                return Ok(outcome);
            }
        }
    }

    fn human_move(&mut self, engine: &mut GameEngine, human: Player) -> Result<()> {
        loop {
            let position = self.console.prompt_move(engine.board())?;
            match engine.apply_move(position, human) {
                Ok(_) => return Ok(()),
                Err(Error::IllegalMove { position } | Error::InvalidPosition { position }) => {
                    log::debug!("human chose unavailable cell {position}");
                }
                Err(e) => return Err(e),
            }
        }
    }
}
