//! Presets shipped with the simulator, in menu order.

use crate::preset::Preset;
use crate::Simulation;

/// Where a built-in preset lands on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// Pattern origin at the middle of the grid.
    Centered,
    /// Pattern origin at a fixed cell.
    At(isize, isize),
}

pub struct BuiltinPreset {
    pub name: &'static str,
    pub pattern: &'static str,
    pub placement: Placement,
}

pub const BUILTIN_PRESETS: [BuiltinPreset; 10] = [
    BuiltinPreset {
        name: "Metamorphosis II",
        pattern: METAMORPHOSIS_II,
        placement: Placement::At(25, 15),
    },
    BuiltinPreset {
        name: "Schick ship",
        pattern: SCHICK_SHIP,
        placement: Placement::Centered,
    },
    BuiltinPreset {
        name: "Lobster",
        pattern: LOBSTER,
        placement: Placement::At(10, 35),
    },
    BuiltinPreset {
        name: "Frothing Puffer",
        pattern: FROTHING_PUFFER,
        placement: Placement::At(36, 25),
    },
    BuiltinPreset {
        name: "6 bits",
        pattern: SIX_BITS,
        placement: Placement::At(35, 25),
    },
    BuiltinPreset {
        name: "Gosper Gun",
        pattern: GOSPER_GUN,
        placement: Placement::At(20, 20),
    },
    BuiltinPreset {
        name: "Hey!",
        pattern: HEY,
        placement: Placement::At(40, 37),
    },
    BuiltinPreset {
        name: "Acorn",
        pattern: ACORN,
        placement: Placement::Centered,
    },
    BuiltinPreset {
        name: "Methuselah",
        pattern: METHUSELAH,
        placement: Placement::Centered,
    },
    BuiltinPreset {
        name: "R-Pentomino",
        pattern: R_PENTOMINO,
        placement: Placement::Centered,
    },
];

impl BuiltinPreset {
    /// Parses the pattern and moves it into place on a `cols × rows` grid.
    pub fn build(&self, cols: usize, rows: usize) -> Preset {
        let mut preset = Preset::parse(self.name, self.pattern);
        match self.placement {
            Placement::Centered => preset.center_on(cols, rows),
            Placement::At(dx, dy) => preset.translate(dx, dy),
        };
        preset
    }
}

/// Registers every built-in preset, returning how many were added.
pub fn register_builtins(simulation: &mut Simulation) -> usize {
    let (cols, rows) = (simulation.cols(), simulation.rows());
    for builtin in &BUILTIN_PRESETS {
        simulation.register_preset(builtin.build(cols, rows));
    }
    BUILTIN_PRESETS.len()
}

const ACORN: &str = "
.O.....|
...O...|
OO..OOO|
";

const METHUSELAH: &str = "
......O.|
OO......|
.O...OOO|
";

const R_PENTOMINO: &str = "
.OO|
OO.|
.O.|
";

const SCHICK_SHIP: &str = "
.O..O...............|
O...................|
O...O...............|
OOOO.........OO.....|
......OOO.....OO....|
......OO.OO......OOO|
......OOO.....OO....|
OOOO.........OO.....|
O...O...............|
O...................|
.O..O...............|
";

const GOSPER_GUN: &str = "
........................O...........|
......................O.O...........|
............OO......OO............OO|
...........O...O....OO............OO|
OO........O.....O...OO..............|
OO........O...O.OO....O.O...........|
..........O.....O.......O...........|
...........O...O....................|
............OO......................|
";

const HEY: &str = "
O..O..OOOO..O.....O..O|
O..O..O......O...O...O|
O..O..O.......O.O....O|
OOOO..OOOO.....O.....O|
O..O..O........O.....O|
O..O..O........O......|
O..O..OOOO.....O.....O|
";

const LOBSTER: &str = "
...........OOO............|
.............O............|
........OO..O.............|
........OO................|
............OO............|
...........OO.............|
..........O..O............|
..........................|
........O..O..............|
.......O...O..............|
......O.OOO...............|
.....O....................|
.....O.............O.O..OO|
......O.............OO.O.O|
.OO.............OO..O....O|
O..OO..OO......O...O......|
.....O..O......O......OO..|
.........OO....O.O....OO..|
..O...O...O.....O.........|
......OO....O..O..........|
.O.O.....O...OO...........|
OO........O...............|
.....O....O...............|
.......O...O..............|
....OO.....O..............|
....O.....O...............|
";

const SIX_BITS: &str = "
.....................O..................|
.....................O..................|
....................O.O.................|
.....................O..................|
.....................O..................|
.....................O..................|
.....................O..................|
....................O.O.................|
.....................O..................|
.....................O..................|
........................................|
........................................|
........................................|
........................................|
..O..O....O..O..........................|
OOO..OOOOOO..OOO........................|
..O..O....O..O..........................|
......................OO................|
.....................OO.................|
.......................O................|
................................O....O..|
..............................OO.OOOO.OO|
................................O....O..|
";

const METAMORPHOSIS_II: &str = "
....................OO.........OO....................|
....................OO.........OO....................|
.....................................................|
.....................................................|
....................OOO.......OOO....................|
....................OOO.......OOO....................|
.....................................................|
.....................................................|
.....................................................|
..................OO...OO...OO...OO..................|
...................OOOOO.....OOOOO...................|
....................OOO.......OOO....................|
.....................O.........O.....................|
........O...................................O........|
.......O.O.................................O.O.......|
......O.OO.................................OO.O......|
OO...OO.OO.................................OO.OO...OO|
OO....O.OO.................................OO.O....OO|
.......O.O.................................O.O.......|
........O...................................O........|
.......................O.O...........................|
......................O..............................|
......................O..............................|
......................O..O...........................|
......................OOO............................|
.....................................................|
......................OOO............................|
......................O..O...........................|
......................O..............................|
......................O..............................|
.......................O.O...........................|
........O...................................O........|
.......O.O.................................O.O.......|
OO....O.OO.................................OO.O....OO|
OO...OO.OO.................................OO.OO...OO|
......O.OO.................................OO.O......|
.......O.O.................................O.O.......|
........O...................................O........|
.....................O.........O.....................|
....................OOO.......OOO....................|
...................OOOOO.....OOOOO...................|
..................OO...OO...OO...OO..................|
.....................................................|
.....................................................|
.....................................................|
....................OOO.......OOO....................|
....................OOO.......OOO....................|
.....................................................|
.....................................................|
....................OO.........OO....................|
....................OO.........OO....................|
";

const FROTHING_PUFFER: &str = "
.......O.................O.......|
......OOO...............OOO......|
.....OO....OOO.....OOO....OO.....|
...OO.O..OOO..O...O..OOO..O.OO...|
....O.O..O.O...O.O...O.O..O.O....|
.OO.O.O.O.O....O.O....O.O.O.O.OO.|
.OO...O.O....O.....O....O.O...OO.|
.OOO.O...O....O.O.O....O...O.OOO.|
OO.........OO.O.O.O.OO.........OO|
............O.......O............|
.........OO.O.......O.OO.........|
..........O...........O..........|
.......OO.O...........O.OO.......|
.......OO...............OO.......|
.......O.O.O.OOO.OOO.O.O.O.......|
......OO...O...O.O...O...OO......|
......O..O...O.O.O.O...O..O......|
.........OO....O.O....OO.........|
.....OO....O...O.O...O....OO.....|
.........O.OO.O...O.OO.O.........|
..........O.O.O.O.O.O.O..........|
............O..O.O..O............|
...........O.O.....O.O...........|
";
