use std::sync::Arc;

use super::cancellation::CancellationToken;
use crate::config::ProgramLimits;
use crate::schema::{Program, Spec};

/// Accepts or rejects a candidate program.
///
/// Rejection skips the program and generation continues; it never
/// restarts the source.
pub type ProgramFilter = Arc<dyn Fn(&Program) -> bool + Send + Sync>;

/// A demand-driven stream of programs.
///
/// Sources observe their cancellation token: once it is cancelled,
/// `next_program` returns `None` and any underlying resources are
/// released. Sources may be unbounded.
pub trait IProgramSource {
    fn next_program(&mut self) -> Option<Program>;
}

/// Randomized program generation for a spec.
///
/// The opened source yields programs accepted by `filter`, bounded by
/// `limits` (sessions, invocations, values; the program-count cap is
/// enforced by the caller). The token is the source's release hook: the
/// consumer cancels it when it stops pulling.
pub trait IProgramGenerator: Send + Sync {
    fn open(
        &self,
        spec: &Spec,
        filter: ProgramFilter,
        limits: &ProgramLimits,
        cancel: CancellationToken,
    ) -> Box<dyn IProgramSource>;
}
