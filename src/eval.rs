//! Instruction semantics over the symbolic state.
//!
//! One method per instrumentation entry point, invoked inline with the
//! shadowed instruction. Operands arrive on the stack pushed
//! left-to-right ([`Interpreter::push_const`] /
//! [`Interpreter::push_register`]) and are consumed right-operand-first.

use log::warn;

use crate::address::{Address, RegisterId};
use crate::opcode::{BinOp, Predicate};
use crate::state::{Interpreter, Operand};
use crate::value::Value;

impl<'ctx> Interpreter<'ctx> {
    /// Resolve a raw stack entry to the symbolic value it denotes.
    /// Literals resolve to themselves. A register with no binding
    /// resolves, with a diagnostic, to a named unknown `R<id>`: the
    /// formula comes out under-constrained rather than the run
    /// aborting.
    fn resolve(&mut self, raw: Operand<'ctx>) -> Value<'ctx> {
        match raw {
            Operand::Literal(n) => Value::Int(n),
            Operand::Register(id) => {
                let addr = Address::Register(id);
                match self.lookup(addr) {
                    Some(v) => v.clone(),
                    None => {
                        warn!("cannot find register {} in memory", addr);
                        let name = format!("R{}", id);
                        let fallback = Value::named(self.context(), &name);
                        self.declare_symbol(name);
                        fallback
                    }
                }
            }
        }
    }

    /// Pop and resolve one operand. `None` with a diagnostic on an
    /// empty stack, which only an instrumentation-ordering violation
    /// can produce.
    fn pop_resolved(&mut self, what: &str) -> Option<Value<'ctx>> {
        match self.pop() {
            Some(raw) => Some(self.resolve(raw)),
            None => {
                warn!("operand stack empty at {}", what);
                None
            }
        }
    }

    /// Push a numeral literal operand.
    pub fn push_const(&mut self, value: i32) {
        let n = z3::ast::Int::from_i64(self.context(), value as i64);
        self.push(Operand::Literal(n));
    }

    /// Push a reference to a register's current symbolic value.
    pub fn push_register(&mut self, id: RegisterId) {
        self.push(Operand::Register(id));
    }

    /// Stack allocation: the destination register takes the identity of
    /// the allocated location as its symbolic value.
    pub fn alloca(&mut self, dst: RegisterId, location: u64) {
        let se = Value::from_location(self.context(), location);
        self.bind(Address::Register(dst), se);
    }

    /// Store: rebind the target cell to the resolved top-of-stack
    /// value, replacing any existing binding.
    pub fn store(&mut self, location: u64) {
        if let Some(value) = self.pop_resolved("store") {
            self.bind(Address::Memory(location), value);
        }
    }

    /// Load: the destination register takes the identity of the source
    /// location, not the symbolic value currently stored there.
    ///
    /// This reproduces the original runtime's behavior for
    /// compatibility. A load after a store to the same cell therefore
    /// does not see the stored symbolic value; constraints built from a
    /// loaded register speak about the address, not the content.
    pub fn load(&mut self, dst: RegisterId, location: u64) {
        let se = Value::from_location(self.context(), location);
        self.bind(Address::Register(dst), se);
    }

    /// Comparison: pops rhs then lhs, binds the boolean term at `dst`.
    /// Boolean-sorted operands carry a diagnostic and produce no
    /// binding, like an unsupported opcode.
    pub fn icmp(&mut self, dst: RegisterId, pred: Predicate) {
        let rhs = match self.pop_resolved("icmp") {
            Some(v) => v,
            None => return,
        };
        let lhs = match self.pop_resolved("icmp") {
            Some(v) => v,
            None => return,
        };
        match (lhs.as_int(), rhs.as_int()) {
            (Some(l), Some(r)) => {
                let se = Value::Bool(pred.apply(l, r));
                self.bind(Address::Register(dst), se);
            }
            _ => warn!("icmp R{}: non-integer operand", dst),
        }
    }

    /// Binary arithmetic: pops rhs then lhs, binds the result at `dst`.
    pub fn binop(&mut self, dst: RegisterId, op: BinOp) {
        let rhs = match self.pop_resolved("binop") {
            Some(v) => v,
            None => return,
        };
        let lhs = match self.pop_resolved("binop") {
            Some(v) => v,
            None => return,
        };
        match (lhs.as_int(), rhs.as_int()) {
            (Some(l), Some(r)) => {
                let se = Value::Int(op.apply(l, r));
                self.bind(Address::Register(dst), se);
            }
            _ => warn!("binop R{}: non-integer operand", dst),
        }
    }

    /// Raw-encoded variant of [`Interpreter::binop`] for callers on the
    /// numeric side of the ABI. Unknown opcodes consume nothing and
    /// bind nothing.
    pub fn binop_raw(&mut self, dst: RegisterId, op: i32) {
        match BinOp::from_raw(op) {
            Some(op) => self.binop(dst, op),
            None => warn!("binop R{}: unknown opcode {}", dst, op),
        }
    }

    /// Raw-encoded variant of [`Interpreter::icmp`].
    pub fn icmp_raw(&mut self, dst: RegisterId, pred: i32) {
        match Predicate::from_raw(pred) {
            Some(pred) => self.icmp(dst, pred),
            None => warn!("icmp R{}: unknown predicate {}", dst, pred),
        }
    }
}
