use crate::config::{Palette, Rgb};

/// Why a cell looks the way it does in the current frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisplayState {
    #[default]
    Dead,
    Living,
    JustBorn,
    JustKilled,
}

/// Outcome of a single cell mutation, aggregated by the owner of the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    NoChange,
    Born,
    Killed,
}

impl Transition {
    /// Change in population caused by this transition.
    pub fn population_delta(self) -> isize {
        match self {
            Transition::NoChange => 0,
            Transition::Born => 1,
            Transition::Killed => -1,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    x: usize,
    y: usize,
    living: bool,
    state: DisplayState,
}

impl Cell {
    pub fn new(x: usize, y: usize) -> Self {
        Cell {
            x,
            y,
            living: false,
            state: DisplayState::Dead,
        }
    }

    pub fn x(&self) -> usize {
        self.x
    }

    pub fn y(&self) -> usize {
        self.y
    }

    pub fn is_living(&self) -> bool {
        self.living
    }

    pub fn state(&self) -> DisplayState {
        self.state
    }

    pub fn kill(&mut self) -> Transition {
        if !self.living {
            return Transition::NoChange;
        }
        self.living = false;
        self.state = DisplayState::JustKilled;
        Transition::Killed
    }

    pub fn born(&mut self) -> Transition {
        if self.living {
            return Transition::NoChange;
        }
        self.living = true;
        self.state = DisplayState::JustBorn;
        Transition::Born
    }

    pub fn swap(&mut self) -> Transition {
        if self.living {
            self.kill()
        } else {
            self.born()
        }
    }

    /// Drop any highlight and show the plain living/dead state.
    pub fn settle(&mut self) {
        self.state = if self.living {
            DisplayState::Living
        } else {
            DisplayState::Dead
        };
    }

    /// Highlights last exactly one frame.
    pub fn decay(&mut self) {
        match self.state {
            DisplayState::JustBorn => self.state = DisplayState::Living,
            DisplayState::JustKilled => self.state = DisplayState::Dead,
            DisplayState::Living | DisplayState::Dead => {}
        }
    }

    pub fn color(&self, palette: &Palette) -> Rgb {
        match self.state {
            DisplayState::JustBorn => palette.born,
            DisplayState::JustKilled => palette.killed,
            DisplayState::Living => palette.living,
            DisplayState::Dead => palette.dead,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn born_then_kill_reports_each_transition_once() {
        let mut cell = Cell::new(3, 4);
        assert_eq!(cell.born(), Transition::Born);
        assert_eq!(cell.born(), Transition::NoChange);
        assert!(cell.is_living());
        assert_eq!(cell.state(), DisplayState::JustBorn);

        assert_eq!(cell.kill(), Transition::Killed);
        assert_eq!(cell.kill(), Transition::NoChange);
        assert!(!cell.is_living());
        assert_eq!(cell.state(), DisplayState::JustKilled);
        assert_eq!((cell.x(), cell.y()), (3, 4));
    }

    #[test]
    fn swap_fires_exactly_one_transition() {
        let mut cell = Cell::new(0, 0);
        assert_eq!(cell.swap(), Transition::Born);
        assert_eq!(cell.swap(), Transition::Killed);
        assert_eq!(cell.swap(), Transition::Born);
    }

    #[test]
    fn highlight_decays_after_one_frame() {
        let palette = Palette::default();
        let mut cell = Cell::new(1, 1);

        cell.born();
        assert_eq!(cell.color(&palette), palette.born);
        cell.decay();
        assert_eq!(cell.state(), DisplayState::Living);
        assert_eq!(cell.color(&palette), palette.living);

        cell.kill();
        assert_eq!(cell.color(&palette), palette.killed);
        cell.decay();
        cell.decay();
        assert_eq!(cell.color(&palette), palette.dead);
    }

    #[test]
    fn population_delta_follows_transition() {
        assert_eq!(Transition::Born.population_delta(), 1);
        assert_eq!(Transition::Killed.population_delta(), -1);
        assert_eq!(Transition::NoChange.population_delta(), 0);
    }
}
