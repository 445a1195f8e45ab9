//! Validation rules for configurations.

use crate::core::MachineConfig;
use crate::validation::violations::ConfigViolation;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Type alias for validation check functions
pub type ConfigCheck =
    Box<dyn Fn(&MachineConfig) -> Validation<(), NonEmptyVec<ConfigViolation>> + Send + Sync>;

/// Rules a configuration must satisfy.
/// Uses Validation to accumulate ALL violations.
pub struct ConfigRules {
    structural: bool,
    required_checks: Vec<ConfigCheck>,
}

impl ConfigRules {
    /// Rules with no checks at all.
    pub fn empty() -> Self {
        Self {
            structural: false,
            required_checks: Vec::new(),
        }
    }

    /// Structural checks: the initial state and every transition target are
    /// declared, and no state name is empty.
    pub fn standard() -> Self {
        Self {
            structural: true,
            ..Self::empty()
        }
    }

    /// Add a custom validation check
    pub fn require<F>(mut self, check: F) -> Self
    where
        F: Fn(&MachineConfig) -> Validation<(), NonEmptyVec<ConfigViolation>>
            + Send
            + Sync
            + 'static,
    {
        self.required_checks.push(Box::new(check));
        self
    }

    /// Add a simple predicate check with error message
    pub fn require_pred<F>(mut self, predicate: F, error_msg: String) -> Self
    where
        F: Fn(&MachineConfig) -> bool + Send + Sync + 'static,
    {
        let check = move |config: &MachineConfig| {
            if predicate(config) {
                Validation::success(())
            } else {
                Validation::fail(ConfigViolation::CustomCheckFailed {
                    message: error_msg.clone(),
                })
            }
        };
        self.required_checks.push(Box::new(check));
        self
    }

    /// Check all rules, accumulating ALL violations.
    pub fn check(&self, config: &MachineConfig) -> Validation<(), NonEmptyVec<ConfigViolation>> {
        let mut checks: Vec<Validation<(), NonEmptyVec<ConfigViolation>>> = Vec::new();

        if self.structural {
            checks.extend(structural_checks(config));
        }

        for check_fn in &self.required_checks {
            checks.push(check_fn(config));
        }

        Validation::all_vec(checks).map(|_| ())
    }

    /// Like [`ConfigRules::check`], returning the violations as a plain list.
    pub fn validate(&self, config: &MachineConfig) -> Result<(), Vec<ConfigViolation>> {
        match self.check(config) {
            Validation::Success(_) => Ok(()),
            Validation::Failure(errors) => Err(errors.iter().cloned().collect()),
        }
    }
}

fn require(ok: bool, violation: ConfigViolation) -> Validation<(), NonEmptyVec<ConfigViolation>> {
    if ok {
        Validation::success(())
    } else {
        Validation::fail(violation)
    }
}

fn structural_checks(
    config: &MachineConfig,
) -> Vec<Validation<(), NonEmptyVec<ConfigViolation>>> {
    let mut checks = vec![require(
        config.contains(config.initial()),
        ConfigViolation::UnknownInitialState {
            state: config.initial().to_string(),
        },
    )];

    for state in config.states() {
        checks.push(require(
            !state.name.is_empty(),
            ConfigViolation::EmptyStateName,
        ));

        // Sorted so reports are stable across runs.
        let mut events: Vec<_> = state.transitions.iter().collect();
        events.sort();
        for (event, target) in events {
            checks.push(require(
                config.contains(target),
                ConfigViolation::UnknownTransitionTarget {
                    state: state.name.clone(),
                    event: event.clone(),
                    target: target.clone(),
                },
            ));
        }
    }

    checks
}
