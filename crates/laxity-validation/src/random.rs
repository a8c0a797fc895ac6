//! Randomized testing against a spec.

use std::sync::Arc;

use laxity_core::config::{ProgramLimits, TestingConfig};
use laxity_core::errors::LaxityResult;
use laxity_core::schema::Spec;
use laxity_core::traits::{
    CancellationToken, IOutcomeTester, IProgramGenerator, ISpecValidator, ProgramFilter,
    ViolationIter,
};

use crate::stream::ViolationStream;

/// Validates a spec against randomly generated programs, lazily filtered
/// by a caller-supplied predicate.
///
/// Each `violations` call opens a fresh source from the generator; the
/// returned stream owns that source's cancellation token.
pub struct RandomTestValidator {
    generator: Arc<dyn IProgramGenerator>,
    tester: Arc<dyn IOutcomeTester>,
    filter: ProgramFilter,
    limits: ProgramLimits,
    config: TestingConfig,
}

impl RandomTestValidator {
    pub fn new(
        generator: Arc<dyn IProgramGenerator>,
        tester: Arc<dyn IOutcomeTester>,
        limits: ProgramLimits,
    ) -> Self {
        Self {
            generator,
            tester,
            filter: Arc::new(|_| true),
            limits,
            config: TestingConfig::default(),
        }
    }

    /// Restrict generation to programs accepted by the filter.
    /// Rejected programs are skipped and generation continues.
    pub fn with_filter(mut self, filter: ProgramFilter) -> Self {
        self.filter = filter;
        self
    }

    pub fn with_config(mut self, config: TestingConfig) -> Self {
        self.config = config;
        self
    }
}

impl ISpecValidator for RandomTestValidator {
    fn violations(&self, spec: &Spec) -> LaxityResult<ViolationIter<'_>> {
        let cancel = CancellationToken::new();
        let source = self
            .generator
            .open(spec, self.filter.clone(), &self.limits, cancel.clone());
        Ok(Box::new(ViolationStream::new(
            source,
            cancel,
            self.tester.clone(),
            &self.config,
            self.limits.max_programs,
        )))
    }
}
