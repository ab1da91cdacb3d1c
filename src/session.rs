/// Session controller: owns the run state, the input latches and the RNG, and
/// applies one tick at a time.

use log::info;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::compute::{init_state, player_shoot, tick};
use crate::config::{ConfigError, GameConfig};
use crate::entities::{SessionState, Snapshot};
use crate::input::{InputState, Key};

pub struct Session<R: Rng = StdRng> {
    config: GameConfig,
    state: SessionState,
    input: InputState,
    rng: R,
}

impl Session<StdRng> {
    /// A session whose randomness is fully determined by `seed`.
    pub fn seeded(config: GameConfig, seed: u64) -> Result<Self, ConfigError> {
        Self::new(config, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> Session<R> {
    /// Start a run.  The config is checked up front so a bad drop chance or
    /// zero-sized entity is reported here instead of failing mid-run.
    pub fn new(config: GameConfig, rng: R) -> Result<Self, ConfigError> {
        config.validate()?;
        info!(
            "session started on a {}x{} canvas",
            config.canvas_width, config.canvas_height
        );
        Ok(Self {
            state: init_state(&config),
            config,
            input: InputState::default(),
            rng,
        })
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Direct access for staging a scenario.  Writes here bypass every check,
    /// so keeping the state consistent with the config is up to the caller.
    #[doc(hidden)]
    pub fn state_mut(&mut self) -> &mut SessionState {
        &mut self.state
    }

    pub fn input(&self) -> &InputState {
        &self.input
    }

    pub fn is_game_over(&self) -> bool {
        self.state.is_game_over()
    }

    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot::from(&self.state)
    }

    /// Run one frame.  While the game is over this is a no-op.
    pub fn tick(&mut self) -> Snapshot<'_> {
        self.state = tick(&self.state, &self.input, &self.config, &mut self.rng);
        self.snapshot()
    }

    /// Key-down from the host.  Fire acts immediately on a fresh press;
    /// Confirm restarts only while the game is over.
    pub fn on_key_down(&mut self, key: Key) {
        let pressed = self.input.key_down(key);
        if !pressed {
            return;
        }
        match key {
            Key::Fire => self.fire(),
            Key::Confirm if self.is_game_over() => self.restart(),
            _ => {}
        }
    }

    pub fn on_key_up(&mut self, key: Key) {
        self.input.key_up(key);
    }

    /// Fire regardless of latch state.  Ignored while the game is over.
    pub fn fire(&mut self) {
        self.state = player_shoot(&self.state, &self.config);
    }

    /// Throw the current run away and start a fresh one.  Input latches and
    /// the RNG stream carry over.
    pub fn restart(&mut self) {
        info!("restarting after final score {}", self.state.score);
        self.state = init_state(&self.config);
    }
}
