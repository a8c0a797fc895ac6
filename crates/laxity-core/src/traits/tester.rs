use crate::errors::LaxityResult;
use crate::models::OutcomeViolation;
use crate::schema::Program;

/// Executes a batch of programs against the implementation under test and
/// reports the outcomes the spec does not admit.
///
/// One call per batch; violations come back in program order. The tester
/// may parallelize execution inside a batch — that scheduling is opaque
/// here. How violations are detected is likewise the tester's business,
/// as is any retry policy.
pub trait IOutcomeTester: Send + Sync {
    fn violations(&self, programs: &[Program]) -> LaxityResult<Vec<OutcomeViolation>>;
}
