//! The fixed arithmetic routine: multiply by repeated addition, then divide
//! by repeated subtraction, ending with `f = ((a + b) - a) * b / a = 20`.

use crate::ir::{
    Condition::{AtLeast, NonZero},
    Instruction::{self, Store, While},
    Routine,
    StoreMode::{Add, Replace, Subtract},
    Value::{At, Immediate},
    Var,
};

/// `a = 5`, `b = 10`, `c = a + b`, `d = c - a`
pub fn initialization() -> Vec<Instruction> {
    vec![
        Store {
            dst: Var::A,
            src: Immediate(5),
            mode: Replace,
        },
        Store {
            dst: Var::B,
            src: Immediate(10),
            mode: Replace,
        },
        Store {
            dst: Var::C,
            src: At(Var::A),
            mode: Replace,
        },
        Store {
            dst: Var::C,
            src: At(Var::B),
            mode: Add,
        },
        Store {
            dst: Var::D,
            src: At(Var::C),
            mode: Replace,
        },
        Store {
            dst: Var::D,
            src: At(Var::A),
            mode: Subtract,
        },
    ]
}

/// `e = d * b`, accumulated one `d` per iteration over a counter of `b`
pub fn multiplication() -> Vec<Instruction> {
    vec![
        Store {
            dst: Var::E,
            src: Immediate(0),
            mode: Replace,
        },
        Store {
            dst: Var::I,
            src: At(Var::B),
            mode: Replace,
        },
        While {
            cond: NonZero(Var::I),
            body: vec![
                Store {
                    dst: Var::E,
                    src: At(Var::D),
                    mode: Add,
                },
                Store {
                    dst: Var::I,
                    src: Immediate(1),
                    mode: Subtract,
                },
            ],
        },
    ]
}

/// `f = e / a`, one subtraction of `a` per increment of `f`; the guard keeps
/// `e` from going below zero, so `e` holds `e mod a` afterwards
pub fn division() -> Vec<Instruction> {
    vec![
        Store {
            dst: Var::F,
            src: Immediate(0),
            mode: Replace,
        },
        While {
            cond: AtLeast {
                place: Var::E,
                bound: At(Var::A),
            },
            body: vec![
                Store {
                    dst: Var::E,
                    src: At(Var::A),
                    mode: Subtract,
                },
                Store {
                    dst: Var::F,
                    src: Immediate(1),
                    mode: Add,
                },
            ],
        },
    ]
}

/// The full routine; its result is the quotient in `f`.
pub fn arithmetic_routine() -> Routine {
    let mut instructions = initialization();
    instructions.extend(multiplication());
    instructions.extend(division());
    Routine {
        instructions,
        result: Var::F,
    }
}
