//! Simulation controller - seeding, the tick loop, pause and resize recovery
//!
//! The controller owns the [`Grid`] and is its only writer. Each loop iteration
//! does, in order:
//!
//! 1. draw (the board, the paused board, or the resize notice),
//! 2. one bounded poll for a control event,
//! 3. at most one generation step, only when the poll returned no event, the
//!    controller is running and the tick interval has elapsed since the
//!    previous step.
//!
//! A quit or interrupt moves the controller to `Terminated`; the loop notices
//! at the top of the next iteration and tears the renderer down. A step that
//! has started always completes first.

use std::time::{Duration, Instant};

use anyhow::{ensure, Result};

use crate::grid::Grid;
use crate::rng::SimpleRng;
use crate::stepper;
use crate::surface::{InputSource, RenderStatus, Renderer};
use crate::types::{Banner, ControlEvent, SimState};

pub struct Controller {
    grid: Grid,
    state: SimState,
    tick: Duration,
    last_step: Instant,
}

impl Controller {
    /// New controller in `Seeding` over an all-dead grid.
    pub fn new(grid: Grid, tick: Duration) -> Self {
        Self {
            grid,
            state: SimState::Seeding,
            tick,
            last_step: Instant::now(),
        }
    }

    pub fn state(&self) -> SimState {
        self.state
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn tick_interval(&self) -> Duration {
        self.tick
    }

    pub fn generation(&self) -> u64 {
        self.grid.generation()
    }

    fn transition(&mut self, to: SimState) {
        if self.state != to {
            log::debug!("controller: {} -> {}", self.state.as_str(), to.as_str());
            self.state = to;
        }
    }

    /// Fill the board with random cells and start running.
    pub fn seed_random(&mut self, rng: &mut SimpleRng) -> Result<()> {
        ensure!(self.state == SimState::Seeding, "grid already seeded");
        self.grid.fill_random(rng);
        self.finish_seeding();
        Ok(())
    }

    /// Bring the given in-range points to life and start running.
    pub fn seed_points(&mut self, points: &[(usize, usize)]) -> Result<()> {
        ensure!(self.state == SimState::Seeding, "grid already seeded");
        for &(r, c) in points {
            self.grid.set(r as isize, c as isize, true);
        }
        self.finish_seeding();
        Ok(())
    }

    fn finish_seeding(&mut self) {
        log::info!(
            "seeded {}x{} board with {} live cells",
            self.grid.rows(),
            self.grid.cols(),
            self.grid.population()
        );
        self.last_step = Instant::now();
        self.transition(SimState::Running);
    }

    /// Apply a control event to the state machine.
    pub fn handle_event(&mut self, event: ControlEvent) {
        if event.is_stop() {
            if !self.state.is_terminal() {
                log::info!("{} requested", event.as_str());
                self.transition(SimState::Terminated);
            }
            return;
        }

        match (self.state, event) {
            (SimState::Running, ControlEvent::TogglePause) => self.transition(SimState::Paused),
            (SimState::Paused, ControlEvent::TogglePause | ControlEvent::Acknowledge) => {
                self.resume()
            }
            (SimState::ResizeRecovery, ControlEvent::Acknowledge) => self.resume(),
            _ => {}
        }
    }

    fn resume(&mut self) {
        self.last_step = Instant::now();
        self.transition(SimState::Running);
    }

    fn present<R: Renderer + ?Sized>(&mut self, renderer: &mut R) -> Result<()> {
        let banner = match self.state {
            SimState::Running => None,
            SimState::Paused => Some(Banner::Paused),
            SimState::ResizeRecovery => return renderer.alert(Banner::ResizeRecovery),
            SimState::Seeding | SimState::Terminated => return Ok(()),
        };

        if let RenderStatus::CapabilityFailure(too_small) = renderer.render(&self.grid, banner)? {
            log::info!("cannot draw board: {}", too_small);
            self.transition(SimState::ResizeRecovery);
            renderer.alert(Banner::ResizeRecovery)?;
        }
        Ok(())
    }

    /// Run a single loop iteration.
    pub fn run_iteration<R, I>(&mut self, renderer: &mut R, input: &mut I) -> Result<()>
    where
        R: Renderer + ?Sized,
        I: InputSource + ?Sized,
    {
        if self.state.is_terminal() {
            return Ok(());
        }

        self.present(renderer)?;

        let timeout = match self.state {
            SimState::Running => self.tick.saturating_sub(self.last_step.elapsed()),
            _ => self.tick,
        };
        match input.poll(timeout)? {
            Some(event) => self.handle_event(event),
            None if self.state.is_advancing() && self.last_step.elapsed() >= self.tick => {
                stepper::step(&mut self.grid);
                self.last_step = Instant::now();
            }
            None => {}
        }
        Ok(())
    }

    /// Loop until terminated, then tear the renderer down.
    pub fn run<R, I>(&mut self, renderer: &mut R, input: &mut I) -> Result<()>
    where
        R: Renderer + ?Sized,
        I: InputSource + ?Sized,
    {
        ensure!(
            self.state != SimState::Seeding,
            "the grid must be seeded before the simulation runs"
        );

        let result = loop {
            if self.state.is_terminal() {
                break Ok(());
            }
            if let Err(e) = self.run_iteration(renderer, input) {
                break Err(e);
            }
        };

        self.transition(SimState::Terminated);
        let teardown = renderer.teardown();
        result.and(teardown)
    }
}
