use std::time::{Duration, Instant};

use rand::Rng;

use crate::cell::{DisplayState, Transition};
use crate::config::{Config, Rgb};
use crate::engine::{self, Generation};
use crate::error::{Error, Result};
use crate::grid::Grid;
use crate::preset::Preset;
use crate::rules::{NeighborSet, Rule};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RunState {
    #[default]
    Paused,
    Running,
}

/// Colors of every cell for one drawn frame, row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub cols: usize,
    pub rows: usize,
    pub colors: Vec<Rgb>,
}

impl Frame {
    pub fn color(&self, i: usize, j: usize) -> Option<Rgb> {
        (i < self.cols && j < self.rows).then(|| self.colors[j * self.cols + i])
    }
}

/// Owns the grid and drives it: run state, pacing, rules, presets and the
/// population/generation counters.
///
/// The population counter is only ever changed by the [`Transition`] returned
/// from the cell mutation that caused it, so it always equals the number of
/// living cells.
#[derive(Debug, Clone)]
pub struct Simulation {
    config: Config,
    grid: Grid,
    rule: Rule,
    state: RunState,
    delay: Duration,
    population: usize,
    generation: u64,
    presets: Vec<Preset>,
    last_tick: Instant,
    dirty: bool,
}

impl Default for Simulation {
    fn default() -> Self {
        Simulation::new(Config::default(), Rule::conway())
    }
}

impl Simulation {
    pub fn new(config: Config, rule: Rule) -> Self {
        let grid = Grid::from_canvas(config.canvas_width, config.canvas_height, config.scale);
        let delay = Duration::from_millis(config.initial_delay_ms);
        log::debug!("new {}x{} simulation with rule {}", grid.cols(), grid.rows(), rule);
        Simulation {
            config,
            grid,
            rule,
            state: RunState::Paused,
            delay,
            population: 0,
            generation: 0,
            presets: Vec::new(),
            last_tick: Instant::now(),
            dirty: true,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn cols(&self) -> usize {
        self.grid.cols()
    }

    pub fn rows(&self) -> usize {
        self.grid.rows()
    }

    pub fn rule(&self) -> Rule {
        self.rule
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == RunState::Running
    }

    pub fn population(&self) -> usize {
        self.population
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub fn is_fastest(&self) -> bool {
        self.delay.is_zero()
    }

    fn record(&mut self, transition: Transition) -> Transition {
        match transition {
            Transition::Born => self.population += 1,
            Transition::Killed => self.population -= 1,
            Transition::NoChange => return transition,
        }
        self.dirty = true;
        transition
    }

    pub(crate) fn born_at(&mut self, i: usize, j: usize) -> Transition {
        match self.grid.cell_mut(i, j) {
            Some(cell) => {
                let transition = cell.born();
                self.record(transition)
            }
            None => Transition::NoChange,
        }
    }

    // run state

    pub fn start(&mut self) {
        if self.is_running() {
            return;
        }
        self.state = RunState::Running;
        self.last_tick = Instant::now();
        log::info!("started at generation {} with rule {}", self.generation, self.rule);
    }

    pub fn stop(&mut self) {
        if !self.is_running() {
            return;
        }
        self.state = RunState::Paused;
        log::info!("paused at generation {}", self.generation);
    }

    pub fn toggle(&mut self) {
        if self.is_running() {
            self.stop();
        } else {
            self.start();
        }
    }

    /// Advances one generation. Stops the run once nothing is left alive.
    pub fn step(&mut self) -> Generation {
        let generation = engine::advance(&mut self.grid, &self.rule);
        self.population += generation.born;
        self.population -= generation.killed;
        self.generation += 1;
        self.dirty = true;

        if self.population == 0 && self.is_running() {
            log::info!("population died out at generation {}", self.generation);
            self.stop();
        }
        generation
    }

    /// One loop tick: steps if running and the delay has elapsed since the
    /// previous tick, or since `start` for the first one.
    pub fn poll(&mut self, now: Instant) -> Option<Generation> {
        if !self.is_running() {
            return None;
        }
        if now.saturating_duration_since(self.last_tick) < self.delay {
            return None;
        }
        self.last_tick = now;
        Some(self.step())
    }

    /// How long until the next tick is due, or `None` while paused.
    pub fn next_tick_in(&self, now: Instant) -> Option<Duration> {
        if !self.is_running() {
            return None;
        }
        Some(
            self.delay
                .saturating_sub(now.saturating_duration_since(self.last_tick)),
        )
    }

    pub fn faster(&mut self) {
        let step = Duration::from_millis(self.config.delay_step_ms);
        self.delay = self.delay.saturating_sub(step);
        log::debug!("delay now {:?}", self.delay);
    }

    pub fn slower(&mut self) {
        self.delay += Duration::from_millis(self.config.delay_step_ms);
        log::debug!("delay now {:?}", self.delay);
    }

    // whole-grid commands

    pub fn clear(&mut self) {
        self.stop();
        for idx in 0..self.grid.cells().len() {
            let transition = self.grid.cells_mut()[idx].kill();
            self.record(transition);
        }
        self.grid.cells_mut().iter_mut().for_each(|cell| cell.settle());
        debug_assert_eq!(self.population, 0);
        self.generation = 0;
        self.dirty = true;
    }

    pub fn randomize(&mut self) {
        self.randomize_with(&mut rand::rng());
    }

    /// Clears, then flips a fair coin for every cell.
    pub fn randomize_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.clear();
        for idx in 0..self.grid.cells().len() {
            let cell = &mut self.grid.cells_mut()[idx];
            let transition = if rng.random_bool(0.5) {
                cell.born()
            } else {
                cell.kill()
            };
            self.record(transition);
        }
        log::debug!("randomized grid, population {}", self.population);
    }

    // rules

    /// Replaces both halves of the rule. Rejected while running; on any error
    /// the previous rule stays in place.
    pub fn set_rule(&mut self, born: &[u8], survive: &[u8]) -> Result<()> {
        self.ensure_paused()?;
        self.rule = Rule::from_digits(born, survive)?;
        log::info!("rule set to {}", self.rule);
        Ok(())
    }

    /// Same as [`set_rule`](Self::set_rule) with digit strings such as `"23"`.
    pub fn set_rule_str(&mut self, born: &str, survive: &str) -> Result<()> {
        self.ensure_paused()?;
        let rule = Rule::new(born.parse()?, survive.parse()?);
        self.rule = rule;
        log::info!("rule set to {}", self.rule);
        Ok(())
    }

    pub fn set_born_rule(&mut self, born: &str) -> Result<()> {
        self.ensure_paused()?;
        self.rule.born = born.parse::<NeighborSet>()?;
        log::info!("rule set to {}", self.rule);
        Ok(())
    }

    pub fn set_survive_rule(&mut self, survive: &str) -> Result<()> {
        self.ensure_paused()?;
        self.rule.survive = survive.parse::<NeighborSet>()?;
        log::info!("rule set to {}", self.rule);
        Ok(())
    }

    fn ensure_paused(&self) -> Result<()> {
        if self.is_running() {
            log::warn!("rejected rule change while running");
            return Err(Error::RuleLockedWhileRunning);
        }
        Ok(())
    }

    // presets

    /// Adds a preset to the selectable list and returns its index.
    pub fn register_preset(&mut self, preset: Preset) -> usize {
        self.presets.push(preset);
        self.presets.len() - 1
    }

    pub fn presets(&self) -> &[Preset] {
        &self.presets
    }

    pub fn preset_names(&self) -> impl Iterator<Item = &str> {
        self.presets.iter().map(Preset::name)
    }

    /// Replaces the grid with a registered preset, pausing first.
    pub fn apply_preset(&mut self, index: usize) -> Result<()> {
        let preset = self
            .presets
            .get(index)
            .cloned()
            .ok_or(Error::PresetIndexOutOfRange {
                index,
                len: self.presets.len(),
            })?;
        preset.apply_to(self)
    }

    // direct editing

    /// Flips one cell while paused. Ignored while running or out of range.
    pub fn toggle_cell_at(&mut self, i: usize, j: usize) -> Transition {
        if self.is_running() {
            return Transition::NoChange;
        }
        match self.grid.cell_mut(i, j) {
            Some(cell) => {
                let transition = cell.swap();
                self.record(transition)
            }
            None => Transition::NoChange,
        }
    }

    /// Toggles the cell under a canvas pixel position. Positions off the
    /// canvas are ignored.
    pub fn click_at(&mut self, px: f32, py: f32) -> Transition {
        if !(px >= 0.0 && py >= 0.0) {
            return Transition::NoChange;
        }
        let scale = self.config.scale.max(1) as f32;
        self.toggle_cell_at((px / scale) as usize, (py / scale) as usize)
    }

    pub fn living_coords_literal(&self) -> String {
        self.grid.living_coords_literal()
    }

    // frames

    /// Whether the next [`take_frame`](Self::take_frame) has something new.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Colors for the next frame, then drops one-frame highlights. A frame
    /// that showed highlights leaves the simulation dirty so the following
    /// frame shows them decayed.
    pub fn frame(&mut self) -> Frame {
        let palette = self.config.palette;
        let colors = self.grid.cells().iter().map(|cell| cell.color(&palette)).collect();
        let highlighted = self.grid.cells().iter().any(|cell| {
            matches!(cell.state(), DisplayState::JustBorn | DisplayState::JustKilled)
        });
        self.grid.decay_all();
        self.dirty = highlighted;
        Frame {
            cols: self.grid.cols(),
            rows: self.grid.rows(),
            colors,
        }
    }

    /// Like [`frame`](Self::frame), but only when something changed since the
    /// last one.
    pub fn take_frame(&mut self) -> Option<Frame> {
        self.dirty.then(|| self.frame())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small() -> Simulation {
        let config = Config {
            canvas_width: 80,
            canvas_height: 64,
            ..Config::default()
        };
        Simulation::new(config, Rule::conway())
    }

    #[test]
    fn starts_paused_with_empty_grid() {
        let sim = small();
        assert_eq!(sim.state(), RunState::Paused);
        assert_eq!((sim.cols(), sim.rows()), (10, 8));
        assert_eq!(sim.population(), 0);
        assert_eq!(sim.generation(), 0);
        assert_eq!(sim.delay(), Duration::from_millis(30));
    }

    #[test]
    fn toggle_flips_run_state() {
        let mut sim = small();
        sim.toggle();
        assert!(sim.is_running());
        sim.toggle();
        assert!(!sim.is_running());
    }

    #[test]
    fn delay_is_floored_at_zero() {
        let mut sim = small();
        sim.faster();
        assert_eq!(sim.delay(), Duration::from_millis(10));
        sim.faster();
        assert!(sim.is_fastest());
        sim.faster();
        assert_eq!(sim.delay(), Duration::ZERO);
        sim.slower();
        assert_eq!(sim.delay(), Duration::from_millis(20));
    }

    #[test]
    fn clicks_toggle_only_while_paused() {
        let mut sim = small();
        assert_eq!(sim.click_at(17.0, 9.5), Transition::Born);
        assert!(sim.grid().is_living(2, 1));
        assert_eq!(sim.population(), 1);

        sim.start();
        assert_eq!(sim.click_at(17.0, 9.5), Transition::NoChange);
        sim.stop();

        assert_eq!(sim.click_at(17.0, 9.5), Transition::Killed);
        assert_eq!(sim.population(), 0);
    }

    #[test]
    fn clicks_off_canvas_are_ignored() {
        let mut sim = small();
        assert_eq!(sim.click_at(-1.0, 3.0), Transition::NoChange);
        assert_eq!(sim.click_at(3.0, -0.5), Transition::NoChange);
        assert_eq!(sim.click_at(80.0, 3.0), Transition::NoChange);
        assert_eq!(sim.click_at(3.0, 64.0), Transition::NoChange);
        assert_eq!(sim.click_at(f32::NAN, 3.0), Transition::NoChange);
        assert_eq!(sim.population(), 0);
    }

    #[test]
    fn poll_steps_when_next_tick_in_says_so() {
        let mut sim = small();
        sim.toggle_cell_at(1, 1);
        sim.toggle_cell_at(1, 2);
        sim.toggle_cell_at(1, 3);

        assert!(sim.poll(Instant::now()).is_none(), "paused simulations never tick");
        assert_eq!(sim.next_tick_in(Instant::now()), None);

        sim.start();
        let t0 = Instant::now();
        let wait = sim.next_tick_in(t0).unwrap();
        assert!(wait <= Duration::from_millis(30));
        assert!(sim.poll(t0 + wait).is_some());
        assert_eq!(sim.generation(), 1);

        let t1 = t0 + wait;
        assert_eq!(sim.next_tick_in(t1), Some(Duration::from_millis(30)));
        assert!(sim.poll(t1 + Duration::from_millis(10)).is_none());
        assert_eq!(
            sim.next_tick_in(t1 + Duration::from_millis(10)),
            Some(Duration::from_millis(20))
        );
        let t2 = t1 + sim.next_tick_in(t1).unwrap();
        assert!(sim.poll(t2).is_some());
        assert_eq!(sim.generation(), 2);

        sim.stop();
        assert!(sim.poll(t2 + Duration::from_secs(5)).is_none());
        assert_eq!(sim.next_tick_in(t2), None);
    }

    #[test]
    fn rule_changes_are_rejected_while_running() {
        let mut sim = small();
        sim.set_rule(&[3, 6], &[2, 3]).unwrap();
        assert_eq!(sim.rule().to_string(), "B36/S23");

        sim.start();
        assert_eq!(sim.set_rule(&[1], &[1]), Err(Error::RuleLockedWhileRunning));
        assert_eq!(sim.set_born_rule("2"), Err(Error::RuleLockedWhileRunning));
        assert_eq!(sim.rule().to_string(), "B36/S23");
        assert!(sim.is_running());
    }

    #[test]
    fn invalid_rule_input_keeps_previous_rule() {
        let mut sim = small();
        assert!(matches!(sim.set_rule(&[3], &[2, 9]), Err(Error::InvalidRuleInput { .. })));
        assert!(matches!(sim.set_rule_str("3", "2x"), Err(Error::InvalidRuleInput { .. })));
        assert!(matches!(sim.set_survive_rule("23a"), Err(Error::InvalidRuleInput { .. })));
        assert_eq!(sim.rule(), Rule::conway());

        sim.set_survive_rule("").unwrap();
        sim.set_born_rule("1357").unwrap();
        assert_eq!(sim.rule().to_string(), "B1357/S");
    }

    #[test]
    fn frame_shows_highlights_once() {
        let mut sim = small();
        let palette = sim.config().palette;
        sim.toggle_cell_at(4, 4);

        let frame = sim.take_frame().unwrap();
        assert_eq!(frame.color(4, 4), Some(palette.born));
        assert_eq!(frame.color(0, 0), Some(palette.dead));

        // The following unchanged frame shows the cell plain living.
        assert!(sim.is_dirty());
        let frame = sim.take_frame().unwrap();
        assert_eq!(frame.color(4, 4), Some(palette.living));
        assert!(!sim.is_dirty());
        assert!(sim.take_frame().is_none());

        sim.toggle_cell_at(5, 5);
        let frame = sim.take_frame().unwrap();
        assert_eq!(frame.color(4, 4), Some(palette.living));
        assert_eq!(frame.color(5, 5), Some(palette.born));
        assert_eq!(frame.color(10, 0), None);
    }

    #[test]
    fn clear_resets_counters_and_highlights() {
        let mut sim = small();
        sim.toggle_cell_at(0, 0);
        sim.toggle_cell_at(1, 0);
        sim.step();
        sim.start();
        sim.clear();
        assert!(!sim.is_running());
        assert_eq!(sim.population(), 0);
        assert_eq!(sim.generation(), 0);
        let dead = sim.config().palette.dead;
        assert!(sim.frame().colors.iter().all(|&c| c == dead));
    }
}
