//! The interpreter state shadowing one concrete execution.

use std::collections::{BTreeMap, BTreeSet};

use log::{debug, warn};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use z3::ast::Int;
use z3::Context;

use crate::address::{Address, RegisterId};
use crate::value::{Constraint, Value};

/// Stable per-call-site id of an input-reading site.
pub type InputId = i32;

/// Stable id of a conditional branch instruction.
pub type BranchId = i32;

/// One operand pushed by the instrumentation, not yet resolved against
/// memory: either a numeral literal or a reference to a register's
/// current symbolic value.
#[derive(Clone, Debug)]
pub enum Operand<'ctx> {
    Literal(Int<'ctx>),
    Register(RegisterId),
}

/// One recorded branch direction: the constraint holds exactly when
/// execution goes the way the concrete run went.
#[derive(Clone, Debug)]
pub struct PathEntry<'ctx> {
    pub branch: BranchId,
    pub constraint: Constraint<'ctx>,
}

/// Symbolic mirror of one concrete run: the current symbolic value of
/// every register and touched memory cell, the operand stack between
/// instrumentation call sites, the path condition, and the concrete
/// input cache.
///
/// Single-threaded by design; one instance per shadowed execution.
pub struct Interpreter<'ctx> {
    context: &'ctx Context,
    memory: BTreeMap<Address, Value<'ctx>>,
    stack: Vec<Operand<'ctx>>,
    path: Vec<PathEntry<'ctx>>,
    inputs: BTreeMap<InputId, i32>,
    /// Monotonic counter naming symbolic input variables. Deliberately
    /// not the caller's `InputId`: every `new_input` call allocates a
    /// fresh `X<n>`, even on a concrete-cache hit.
    num_inputs: usize,
    /// Names of every unknown allocated so far, for formula export.
    symbols: BTreeSet<String>,
    rng: StdRng,
}

impl<'ctx> Interpreter<'ctx> {
    pub fn new(context: &'ctx Context) -> Self {
        Interpreter {
            context,
            memory: BTreeMap::new(),
            stack: Vec::new(),
            path: Vec::new(),
            inputs: BTreeMap::new(),
            num_inputs: 0,
            symbols: BTreeSet::new(),
            rng: StdRng::from_entropy(),
        }
    }

    pub fn context(&self) -> &'ctx Context {
        self.context
    }

    /// Seed the concrete input cache, normally from a replay file.
    /// Later `new_input` calls with a seeded id return the seeded value.
    pub fn seed_inputs<I: IntoIterator<Item = (InputId, i32)>>(&mut self, inputs: I) {
        self.inputs.extend(inputs);
    }

    /// Bind `addr` to `value`, replacing any prior binding.
    pub fn bind(&mut self, addr: Address, value: Value<'ctx>) {
        debug!("bind {} := {}", addr, value);
        self.memory.insert(addr, value);
    }

    /// Current binding of `addr`, if any. A miss is expected and common
    /// (e.g. a just-declared register before its first write); fallback
    /// policy is the caller's.
    pub fn lookup(&self, addr: Address) -> Option<&Value<'ctx>> {
        self.memory.get(&addr)
    }

    pub fn push(&mut self, operand: Operand<'ctx>) {
        self.stack.push(operand);
    }

    pub fn pop(&mut self) -> Option<Operand<'ctx>> {
        self.stack.pop()
    }

    /// Record the direction the concrete run took at branch `branch`,
    /// whose condition lives in `register`. With no binding for the
    /// condition register (an instrumentation-contract violation
    /// upstream) no entry is produced.
    pub fn record_branch(&mut self, branch: BranchId, register: RegisterId, taken: bool) {
        let addr = Address::Register(register);
        let cond = match self.memory.get(&addr) {
            Some(v) => v.clone(),
            None => {
                warn!("branch B{}: no binding for condition register {}", branch, addr);
                return;
            }
        };
        let constraint = cond.equals_bool(self.context, taken);
        self.path.push(PathEntry { branch, constraint });
    }

    /// Read the input at call site `id`, storing its symbolic stand-in
    /// at `addr` and returning the concrete value the shadowed program
    /// must use. The concrete value is cached per `id`; the symbolic
    /// variable is fresh per call.
    pub fn new_input(&mut self, addr: Address, id: InputId) -> i32 {
        let concrete = match self.inputs.get(&id) {
            Some(&v) => v,
            None => {
                let v = self.rng.gen();
                self.inputs.insert(id, v);
                v
            }
        };
        let name = format!("X{}", self.num_inputs);
        self.num_inputs += 1;
        let symbolic = Value::named(self.context, &name);
        self.symbols.insert(name);
        self.memory.insert(addr, symbolic);
        concrete
    }

    pub(crate) fn declare_symbol(&mut self, name: String) {
        self.symbols.insert(name);
    }

    pub fn memory(&self) -> &BTreeMap<Address, Value<'ctx>> {
        &self.memory
    }

    pub fn path_condition(&self) -> &[PathEntry<'ctx>] {
        &self.path
    }

    pub fn inputs(&self) -> &BTreeMap<InputId, i32> {
        &self.inputs
    }

    pub fn symbols(&self) -> &BTreeSet<String> {
        &self.symbols
    }
}
