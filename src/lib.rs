//! A dynamic symbolic execution runtime.
//!
//! The runtime shadows one concrete execution of an instrumented
//! program: for every executed instruction it maintains symbolic
//! expressions mirroring the concrete values, accumulates the path
//! condition the run takes, and at finalization emits the condition as
//! an SMT-LIB2 formula plus companion logs. It builds and exports
//! formulas only; solving is the job of an external solver, and each
//! run tracks exactly one path.

pub mod address;
pub mod config;
pub mod error;
pub mod eval;
pub mod export;
pub mod opcode;
pub mod replay;
pub mod runtime;
pub mod state;
pub mod value;

pub use address::{Address, RegisterId};
pub use config::Config;
pub use error::{Error, Result};
pub use opcode::{BinOp, Predicate};
pub use runtime::Runtime;
pub use state::{BranchId, InputId, Interpreter};
pub use value::{Constraint, Value};
