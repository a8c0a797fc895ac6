//! Deterministic replay of a fixed program list.

use std::sync::Arc;

use laxity_core::config::{ProgramLimits, TestingConfig};
use laxity_core::errors::LaxityResult;
use laxity_core::schema::{Program, Spec};
use laxity_core::traits::{
    Cancellable, CancellationToken, IOutcomeTester, IProgramSource, ISpecValidator, ViolationIter,
};

use crate::stream::ViolationStream;

/// Program source over a fixed list; observes its cancellation token.
pub(crate) struct FixedSource {
    programs: std::vec::IntoIter<Program>,
    cancel: CancellationToken,
}

impl FixedSource {
    pub(crate) fn new(programs: Vec<Program>, cancel: CancellationToken) -> Self {
        Self {
            programs: programs.into_iter(),
            cancel,
        }
    }
}

impl IProgramSource for FixedSource {
    fn next_program(&mut self) -> Option<Program> {
        if self.cancel.is_cancelled() {
            return None;
        }
        self.programs.next()
    }
}

/// Replays an externally supplied program list, in order, for regression
/// runs and counter-example reproduction.
pub struct ProgramValidator {
    programs: Vec<Program>,
    tester: Arc<dyn IOutcomeTester>,
    limits: ProgramLimits,
    config: TestingConfig,
}

impl ProgramValidator {
    pub fn new(
        programs: Vec<Program>,
        tester: Arc<dyn IOutcomeTester>,
        limits: ProgramLimits,
    ) -> Self {
        Self {
            programs,
            tester,
            limits,
            config: TestingConfig::default(),
        }
    }

    pub fn with_config(mut self, config: TestingConfig) -> Self {
        self.config = config;
        self
    }
}

impl ISpecValidator for ProgramValidator {
    fn violations(&self, _spec: &Spec) -> LaxityResult<ViolationIter<'_>> {
        let cancel = CancellationToken::new();
        let source = FixedSource::new(self.programs.clone(), cancel.clone());
        Ok(Box::new(ViolationStream::new(
            Box::new(source),
            cancel,
            self.tester.clone(),
            &self.config,
            self.limits.max_programs,
        )))
    }
}
