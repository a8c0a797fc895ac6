//! The maximality search: evidence that a strictly stronger spec also
//! holds, meaning the mined spec is not tight.

use std::sync::Arc;

use laxity_core::config::{ProgramLimits, TestingConfig};
use laxity_core::errors::LaxityResult;
use laxity_core::models::MaximalityViolation;
use laxity_core::schema::{Method, Spec};
use laxity_core::traits::{
    IOutcomeTester, IProgramGenerator, ISpecStrengthener, ISpecValidator, ProgramFilter,
    Strengthening,
};
use laxity_lattice::attribute;
use tracing::debug;

use crate::random::RandomTestValidator;

/// Drives the strengthening search over a spec's methods.
///
/// For each method, in spec order, the strengthener proposes candidate
/// stronger specs; each is handed to a [`RandomTestValidator`] whose
/// filter keeps only programs exercising that method. A candidate some
/// test refutes is rejected; a candidate no test refutes becomes a
/// maximality-violation event.
pub struct SpecStrengthValidator {
    generator: Arc<dyn IProgramGenerator>,
    tester: Arc<dyn IOutcomeTester>,
    strengthener: Arc<dyn ISpecStrengthener>,
    limits: ProgramLimits,
    config: TestingConfig,
}

impl SpecStrengthValidator {
    pub fn new(
        generator: Arc<dyn IProgramGenerator>,
        tester: Arc<dyn IOutcomeTester>,
        strengthener: Arc<dyn ISpecStrengthener>,
        limits: ProgramLimits,
    ) -> Self {
        Self {
            generator,
            tester,
            strengthener,
            limits,
            config: TestingConfig::default(),
        }
    }

    pub fn with_config(mut self, config: TestingConfig) -> Self {
        self.config = config;
        self
    }

    /// Lazy, consumer-cancellable stream of maximality-violation events.
    ///
    /// Strengthenings are tried strictly sequentially per method: each
    /// attempt fully resolves (violation found, or the bounded generator
    /// exhausted) before the next begins. Collaborator failures surface
    /// as `Err` items and end the stream.
    pub fn violations(&self, spec: &Spec) -> MaximalityStream<'_> {
        MaximalityStream {
            owner: self,
            spec: spec.clone(),
            methods: spec.methods.clone().into_iter(),
            current: None,
            done: false,
        }
    }

    /// The first maximality violation, if any.
    pub fn first_violation(&self, spec: &Spec) -> LaxityResult<Option<MaximalityViolation>> {
        match self.violations(spec).next() {
            Some(Ok(violation)) => Ok(Some(violation)),
            Some(Err(e)) => Err(e),
            None => Ok(None),
        }
    }

    fn method_validator(&self, method: &Method) -> RandomTestValidator {
        let name = method.name.clone();
        let filter: ProgramFilter =
            Arc::new(move |program| program.invocations().any(|i| i.method.name == name));
        RandomTestValidator::new(self.generator.clone(), self.tester.clone(), self.limits.clone())
            .with_filter(filter)
            .with_config(self.config.clone())
    }
}

/// One method's in-flight strengthening attempts.
struct MethodSearch<'a> {
    method: Method,
    validator: RandomTestValidator,
    strengthenings: Box<dyn Iterator<Item = Strengthening> + 'a>,
}

/// Iterator over maximality-violation events, distinct in meaning from
/// ordinary tester violations.
pub struct MaximalityStream<'a> {
    owner: &'a SpecStrengthValidator,
    spec: Spec,
    methods: std::vec::IntoIter<Method>,
    current: Option<MethodSearch<'a>>,
    done: bool,
}

impl Iterator for MaximalityStream<'_> {
    type Item = LaxityResult<MaximalityViolation>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        loop {
            if let Some(search) = self.current.as_mut() {
                if let Some(candidate) = search.strengthenings.next() {
                    debug!("trying {}: {}", search.method.name, attribute(candidate.attribute));
                    match search.validator.first_violation(&candidate.spec) {
                        Ok(Some(violation)) => {
                            // The implementation cannot meet the stronger
                            // spec; the candidate is rejected.
                            debug!("found violation to stronger spec:\n{violation}");
                            continue;
                        }
                        Ok(None) => {
                            debug!("found stronger spec; reporting maximality violation");
                            return Some(Ok(MaximalityViolation {
                                method: search.method.clone(),
                                attribute: candidate.attribute,
                            }));
                        }
                        Err(e) => {
                            self.done = true;
                            return Some(Err(e));
                        }
                    }
                }
                self.current = None;
            }

            let Some(method) = self.methods.next() else {
                self.done = true;
                return None;
            };
            let validator = self.owner.method_validator(&method);
            let strengthenings = self.owner.strengthener.strengthenings(&self.spec, &method);
            self.current = Some(MethodSearch {
                method,
                validator,
                strengthenings,
            });
        }
    }
}
