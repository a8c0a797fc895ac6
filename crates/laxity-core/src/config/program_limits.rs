use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_MAX_INVOCATIONS, DEFAULT_MAX_PROGRAMS, DEFAULT_MAX_SESSIONS, DEFAULT_MAX_VALUES,
};

/// Bounds on program generation.
///
/// `max_programs` caps the total drawn from a source across one validator
/// call; the remaining bounds are forwarded to the generator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProgramLimits {
    /// Total programs drawn per validator call.
    pub max_programs: usize,
    /// Concurrent sessions per program.
    pub max_sessions: usize,
    /// Invocations per program, across all sessions.
    pub max_invocations: usize,
    /// Distinct argument values per program.
    pub max_values: usize,
}

impl Default for ProgramLimits {
    fn default() -> Self {
        Self {
            max_programs: DEFAULT_MAX_PROGRAMS,
            max_sessions: DEFAULT_MAX_SESSIONS,
            max_invocations: DEFAULT_MAX_INVOCATIONS,
            max_values: DEFAULT_MAX_VALUES,
        }
    }
}
