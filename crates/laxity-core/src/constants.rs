//! Workspace-wide defaults.

/// Programs handed to the tester per batch.
pub const DEFAULT_BATCH_SIZE: usize = 100;

/// Total programs drawn from a source across one validator call.
pub const DEFAULT_MAX_PROGRAMS: usize = 1000;

/// Concurrent sessions per generated program.
pub const DEFAULT_MAX_SESSIONS: usize = 2;

/// Invocations per generated program, across all sessions.
pub const DEFAULT_MAX_INVOCATIONS: usize = 6;

/// Distinct argument values per generated program.
pub const DEFAULT_MAX_VALUES: usize = 2;
