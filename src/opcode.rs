//! Instruction opcodes understood by the runtime.
//!
//! The runtime owns these encodings; an instrumentation pass translates
//! its native opcode space into them at the ABI boundary via
//! [`BinOp::from_raw`] and [`Predicate::from_raw`]. Unknown raw codes
//! translate to `None` and the corresponding instruction is a no-op.

use z3::ast::{Ast, Bool, Int};

/// Binary arithmetic opcodes.
///
/// Raw encoding: `Add = 0`, `Sub = 1`, `Mul = 2`, `SDiv = 3`,
/// `UDiv = 4`, `SRem = 5`, `URem = 6`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BinOp {
    Add,
    Sub,
    Mul,
    SDiv,
    UDiv,
    SRem,
    URem,
}

impl BinOp {
    pub fn from_raw(op: i32) -> Option<Self> {
        match op {
            0 => Some(BinOp::Add),
            1 => Some(BinOp::Sub),
            2 => Some(BinOp::Mul),
            3 => Some(BinOp::SDiv),
            4 => Some(BinOp::UDiv),
            5 => Some(BinOp::SRem),
            6 => Some(BinOp::URem),
            _ => None,
        }
    }

    /// Build the symbolic application of the opcode to `lhs`, `rhs`.
    ///
    /// The integer sort carries a single division, so `SDiv` and `UDiv`
    /// lower to the same term; the remainder pair stays distinct as z3
    /// `rem` (sign of the dividend) vs. `mod` (always non-negative).
    pub fn apply<'ctx>(self, lhs: &Int<'ctx>, rhs: &Int<'ctx>) -> Int<'ctx> {
        let ctx = lhs.get_ctx();
        match self {
            BinOp::Add => Int::add(ctx, &[lhs, rhs]),
            BinOp::Sub => Int::sub(ctx, &[lhs, rhs]),
            BinOp::Mul => Int::mul(ctx, &[lhs, rhs]),
            BinOp::SDiv => lhs.div(rhs),
            BinOp::UDiv => lhs.div(rhs),
            BinOp::SRem => lhs.rem(rhs),
            BinOp::URem => lhs.modulo(rhs),
        }
    }
}

/// Integer comparison predicates.
///
/// Raw encoding: `Eq = 0`, `Ne = 1`, `Sge = 2`, `Uge = 3`, `Sle = 4`,
/// `Ule = 5`, `Slt = 6`, `Ult = 7`, `Sgt = 8`, `Ugt = 9`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Predicate {
    Eq,
    Ne,
    Sge,
    Uge,
    Sle,
    Ule,
    Slt,
    Ult,
    Sgt,
    Ugt,
}

impl Predicate {
    pub fn from_raw(op: i32) -> Option<Self> {
        match op {
            0 => Some(Predicate::Eq),
            1 => Some(Predicate::Ne),
            2 => Some(Predicate::Sge),
            3 => Some(Predicate::Uge),
            4 => Some(Predicate::Sle),
            5 => Some(Predicate::Ule),
            6 => Some(Predicate::Slt),
            7 => Some(Predicate::Ult),
            8 => Some(Predicate::Sgt),
            9 => Some(Predicate::Ugt),
            _ => None,
        }
    }

    /// Build the comparison term. Signed and unsigned variants of an
    /// ordering are both the integer-sort comparison; the translation
    /// is not overflow-aware.
    pub fn apply<'ctx>(self, lhs: &Int<'ctx>, rhs: &Int<'ctx>) -> Bool<'ctx> {
        match self {
            Predicate::Eq => lhs._eq(rhs),
            Predicate::Ne => !lhs._eq(rhs),
            Predicate::Sge | Predicate::Uge => lhs.ge(rhs),
            Predicate::Sle | Predicate::Ule => lhs.le(rhs),
            Predicate::Slt | Predicate::Ult => lhs.lt(rhs),
            Predicate::Sgt | Predicate::Ugt => lhs.gt(rhs),
        }
    }
}
