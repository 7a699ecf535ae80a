pub mod ir;
pub mod routine;
