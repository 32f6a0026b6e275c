//! Run finalization: turning the accumulated path condition into
//! durable artifacts, plus satisfiability helpers over constraints.

use std::fmt::Write as _;
use std::fs;

use itertools::Itertools;
use z3::ast::Ast;
use z3::{SatResult, Solver};

use crate::config::Config;
use crate::error::Result;
use crate::state::Interpreter;
use crate::value::Constraint;

/// Return false if the constraint is unsatisfiable.
pub fn sat(constraint: &Constraint<'_>) -> bool {
    let solver = Solver::new(constraint.get_ctx());
    solver.assert(constraint);
    match solver.check() {
        SatResult::Unsat => false,
        _ => true,
    }
}

/// Conjoin a run's path condition, in recorded order.
pub fn conjoin<'ctx>(interp: &Interpreter<'ctx>) -> Constraint<'ctx> {
    let constraints: Vec<_> = interp.path_condition().iter().map(|e| &e.constraint).collect();
    Constraint::and(interp.context(), &constraints)
}

/// The path condition as an SMT-LIB2 benchmark: one declaration per
/// allocated unknown, one assertion per recorded branch in execution
/// order, then `(check-sat)`.
pub fn to_smt2(interp: &Interpreter<'_>) -> String {
    let mut out = String::new();
    for name in interp.symbols() {
        writeln!(out, "(declare-fun {} () Int)", name).unwrap();
    }
    for entry in interp.path_condition() {
        writeln!(out, "(assert {})", entry.constraint).unwrap();
    }
    out.push_str("(check-sat)\n");
    out
}

/// Branch identifiers in execution order, one `B<id>` per line.
fn branch_order(interp: &Interpreter<'_>) -> String {
    let mut out = interp
        .path_condition()
        .iter()
        .map(|e| format!("B{}", e.branch))
        .join("\n");
    if !out.is_empty() {
        out.push('\n');
    }
    out
}

/// Human-readable dump of inputs, final memory bindings and path
/// condition.
fn trace_log(interp: &Interpreter<'_>) -> String {
    let mut out = String::new();
    out.push_str("=== Inputs ===\n");
    for (id, value) in interp.inputs() {
        writeln!(out, "X{} : {}", id, value).unwrap();
    }
    out.push('\n');
    out.push_str("=== Symbolic Memory ===\n");
    for (addr, value) in interp.memory() {
        writeln!(out, "{} : {}", addr, value).unwrap();
    }
    out.push('\n');
    out.push_str("=== Path Condition ===\n");
    for entry in interp.path_condition() {
        writeln!(out, "B{} : {}", entry.branch, entry.constraint).unwrap();
    }
    out
}

/// Persist the three artifacts of one finished run.
pub fn write_artifacts(interp: &Interpreter<'_>, config: &Config) -> Result<()> {
    fs::write(&config.branch_file, branch_order(interp))?;
    fs::write(&config.formula_file, to_smt2(interp))?;
    fs::write(&config.log_file, trace_log(interp))?;
    Ok(())
}
