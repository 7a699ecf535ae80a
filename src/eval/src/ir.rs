use {derive_more::Display, std::fmt};

/// The variables of a routine, one cell each.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq)]
pub enum Var {
    #[display("a")]
    A,
    #[display("b")]
    B,
    #[display("c")]
    C,
    #[display("d")]
    D,
    #[display("e")]
    E,
    #[display("f")]
    F,
    #[display("i")]
    I,
}

impl Var {
    pub const COUNT: usize = 7;
    pub const ALL: [Var; Var::COUNT] = [
        Var::A,
        Var::B,
        Var::C,
        Var::D,
        Var::E,
        Var::F,
        Var::I,
    ];
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct State {
    pub cells: [usize; Var::COUNT],
}

impl State {
    pub fn cell(&self, var: Var) -> usize {
        self.cells[var as usize]
    }

    fn cell_mut(&mut self, var: Var) -> &mut usize {
        &mut self.cells[var as usize]
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for var in Var::ALL {
            writeln!(f, "{var} = {}", self.cell(var))?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Value {
    Immediate(usize),
    At(Var),
}

impl Value {
    pub fn resolve(&self, state: &State) -> usize {
        match *self {
            Value::Immediate(value) => value,
            Value::At(var) => state.cell(var),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub enum StoreMode {
    Replace,
    Add,
    Subtract,
}

#[derive(Debug, Clone, Copy)]
pub enum Condition {
    NonZero(Var),
    AtLeast { place: Var, bound: Value },
}

impl Condition {
    pub fn holds(&self, state: &State) -> bool {
        match *self {
            Condition::NonZero(var) => state.cell(var) != 0,
            Condition::AtLeast { place, bound } => state.cell(place) >= bound.resolve(state),
        }
    }
}

#[derive(Debug, Clone)]
pub enum Instruction {
    Store {
        dst: Var,
        src: Value,
        mode: StoreMode,
    },
    While {
        cond: Condition,
        body: Vec<Instruction>,
    },
}

impl Instruction {
    pub fn execute(&self, state: &mut State) {
        match self {
            Instruction::Store { dst, src, mode } => {
                let value = src.resolve(state);
                let cell = state.cell_mut(*dst);
                match mode {
                    StoreMode::Replace => *cell = value,
                    StoreMode::Add => *cell = cell.wrapping_add(value),
                    StoreMode::Subtract => *cell = cell.wrapping_sub(value),
                }
            }
            Instruction::While { cond, body } => {
                // the guard is re-evaluated before every iteration
                while cond.holds(state) {
                    for instruction in body {
                        instruction.execute(state);
                    }
                }
            }
        }
    }
}

#[derive(Debug, Clone)]
pub struct Routine {
    pub instructions: Vec<Instruction>,
    pub result: Var,
}

impl Routine {
    pub fn execute(&self) -> State {
        let mut state = State::default();
        self.execute_into(&mut state);
        state
    }

    pub fn execute_into(&self, state: &mut State) {
        for instruction in &self.instructions {
            instruction.execute(state);
        }
    }

    pub fn result_of(&self, state: &State) -> usize {
        state.cell(self.result)
    }
}
