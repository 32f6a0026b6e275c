//! Locations in the interpreter's symbolic memory.

use std::fmt;

/// Stable integer id of an instruction result slot.
pub type RegisterId = u32;

/// A key into symbolic memory. Registers and concrete memory cells
/// share one keyspace, distinguished by the variant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Address {
    /// A per-instruction result slot.
    Register(RegisterId),
    /// A concrete memory location, identified by its numeric address.
    Memory(u64),
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Address::Register(id) => write!(f, "R{}", id),
            Address::Memory(loc) => write!(f, "{}", loc),
        }
    }
}
