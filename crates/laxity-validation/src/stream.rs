//! The demand-driven violation pipeline: source → batch → tester.

use std::collections::VecDeque;
use std::sync::Arc;

use laxity_core::config::TestingConfig;
use laxity_core::errors::LaxityResult;
use laxity_core::models::OutcomeViolation;
use laxity_core::schema::Program;
use laxity_core::traits::{Cancellable, CancellationToken, IOutcomeTester, IProgramSource};
use tracing::debug;

use crate::batch::Batches;

/// Adapts a program source to a plain iterator.
pub struct SourcePrograms {
    source: Box<dyn IProgramSource>,
}

impl SourcePrograms {
    pub fn new(source: Box<dyn IProgramSource>) -> Self {
        Self { source }
    }
}

impl Iterator for SourcePrograms {
    type Item = Program;

    fn next(&mut self) -> Option<Program> {
        self.source.next_program()
    }
}

/// Lazy violation sequence over batched program testing.
///
/// Pulls one batch at a time from the program source, hands it to the
/// tester, and re-emits that batch's violations in order. Nothing runs
/// past the batch size and program cap.
///
/// The stream owns the source's cancellation token and cancels it on
/// exhaustion, on tester failure, and in `Drop` — abandoning consumption
/// before exhaustion still releases a possibly infinite source, with no
/// draining and no background continuation.
pub struct ViolationStream {
    batches: Batches<SourcePrograms>,
    tester: Arc<dyn IOutcomeTester>,
    cancel: CancellationToken,
    pending: VecDeque<OutcomeViolation>,
    done: bool,
}

impl ViolationStream {
    pub fn new(
        source: Box<dyn IProgramSource>,
        cancel: CancellationToken,
        tester: Arc<dyn IOutcomeTester>,
        config: &TestingConfig,
        max_programs: usize,
    ) -> Self {
        Self {
            batches: Batches::new(SourcePrograms::new(source), config.batch_size, max_programs),
            tester,
            cancel,
            pending: VecDeque::new(),
            done: false,
        }
    }

    fn finish(&mut self) {
        self.done = true;
        self.cancel.cancel();
    }
}

impl Iterator for ViolationStream {
    type Item = LaxityResult<OutcomeViolation>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(violation) = self.pending.pop_front() {
                return Some(Ok(violation));
            }

            if self.done {
                return None;
            }

            let Some(programs) = self.batches.next() else {
                self.finish();
                return None;
            };

            debug!("testing {} programs", programs.len());
            match self.tester.violations(&programs) {
                Ok(violations) => self.pending.extend(violations),
                Err(e) => {
                    self.finish();
                    return Some(Err(e));
                }
            }
        }
    }
}

impl Drop for ViolationStream {
    fn drop(&mut self) {
        // Guaranteed release of the program source, even on early exit.
        self.cancel.cancel();
    }
}
