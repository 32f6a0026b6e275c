//! Run lifecycle: initialization from a replay file, finalization into
//! artifacts.
//!
//! The original design wired finalization through a process-exit hook.
//! Here the lifecycle is a scoped resource instead: [`Runtime::init`]
//! replaces the init hook, [`Runtime::finalize`] the exit hook, and
//! `Drop` still flushes artifacts best-effort if `finalize` was never
//! called, so a run that unwinds early leaves its trace behind.

use std::ops::{Deref, DerefMut};

use log::{error, info};
use z3::Context;

use crate::config::Config;
use crate::error::Result;
use crate::export;
use crate::replay;
use crate::state::Interpreter;

/// One shadowed execution, from first instrumented instruction to the
/// artifact files.
pub struct Runtime<'ctx> {
    interp: Interpreter<'ctx>,
    config: Config,
    finalized: bool,
}

impl<'ctx> Runtime<'ctx> {
    /// Create the runtime for one run, seeding the input cache from the
    /// replay file named by `config`. Must precede every other runtime
    /// call of the process. Fails on a malformed replay file; a missing
    /// one means a fresh run.
    pub fn init(context: &'ctx Context, config: Config) -> Result<Self> {
        let inputs = replay::read_inputs(&config.input_file)?;
        let mut interp = Interpreter::new(context);
        if !inputs.is_empty() {
            info!("replaying {} inputs from {}", inputs.len(), config.input_file.display());
        }
        interp.seed_inputs(inputs);
        Ok(Runtime { interp, config, finalized: false })
    }

    /// Conjoin and persist the run's path condition, branch order and
    /// trace log.
    pub fn finalize(mut self) -> Result<()> {
        self.finalized = true;
        export::write_artifacts(&self.interp, &self.config)
    }

    pub fn interpreter(&self) -> &Interpreter<'ctx> {
        &self.interp
    }
}

impl<'ctx> Deref for Runtime<'ctx> {
    type Target = Interpreter<'ctx>;

    fn deref(&self) -> &Self::Target {
        &self.interp
    }
}

impl<'ctx> DerefMut for Runtime<'ctx> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.interp
    }
}

impl<'ctx> Drop for Runtime<'ctx> {
    fn drop(&mut self) {
        if self.finalized {
            return;
        }
        if let Err(e) = export::write_artifacts(&self.interp, &self.config) {
            error!("writing artifacts on drop: {}", e);
        }
    }
}
