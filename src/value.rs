//! Symbolic runtime values.

use std::fmt;

use z3::ast::{Ast, Bool, Int};
use z3::Context;

/// The type of formulae, i.e., terms of boolean sort.
pub type Constraint<'ctx> = Bool<'ctx>;

/// A symbolic value shadowing one concrete program value: an integer
/// term for data, a boolean term for a comparison result.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum Value<'ctx> {
    Int(Int<'ctx>),
    Bool(Bool<'ctx>),
}

impl<'ctx> Value<'ctx> {
    /// Injection from a program literal.
    pub fn from_i64(context: &'ctx Context, x: i64) -> Self {
        Value::Int(Int::from_i64(context, x))
    }

    /// Identity of a concrete memory location, as an integer numeral.
    pub fn from_location(context: &'ctx Context, loc: u64) -> Self {
        Value::Int(Int::from_u64(context, loc))
    }

    /// A named integer unknown, e.g. an input variable.
    pub fn named(context: &'ctx Context, name: &str) -> Self {
        Value::Int(Int::new_const(context, name))
    }

    pub fn as_int(&self) -> Option<&Int<'ctx>> {
        match self {
            Value::Int(x) => Some(x),
            Value::Bool(_) => None,
        }
    }

    pub fn as_bool(&self) -> Option<&Bool<'ctx>> {
        match self {
            Value::Bool(b) => Some(b),
            Value::Int(_) => None,
        }
    }

    /// The constraint stating that this value equals the boolean
    /// literal `b`. Integer-sorted values compare against 0/1, the
    /// encoding branch conditions arrive in.
    pub fn equals_bool(&self, context: &'ctx Context, b: bool) -> Constraint<'ctx> {
        match self {
            Value::Bool(x) => x._eq(&Bool::from_bool(context, b)),
            Value::Int(x) => x._eq(&Int::from_u64(context, b as u64)),
        }
    }

    pub fn simplify(&self) -> Self {
        match self {
            Value::Int(x) => Value::Int(x.simplify()),
            Value::Bool(b) => Value::Bool(b.simplify()),
        }
    }
}

impl<'ctx> fmt::Display for Value<'ctx> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(x) => write!(f, "{}", x),
            Value::Bool(b) => write!(f, "{}", b),
        }
    }
}
