// Skill trait: the uniform `run(payload)` capability.
//
// Every skill takes a JSON mapping and returns one. Its contract names the
// input key it reads and the output key it promises, so callers can check a
// result without knowing which skill produced it.

use anyhow::Result;
use thiserror::Error;

use crate::Payload;

/// The keys a skill reads and promises to produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkillContract {
    pub skill: &'static str,
    pub input_key: &'static str,
    pub output_key: &'static str,
}

impl SkillContract {
    pub fn missing_input(&self, payload: &Payload) -> bool {
        !payload.contains_key(self.input_key)
    }

    /// Check that a result carries the promised output key.
    pub fn check_output(&self, result: &Payload) -> Result<(), ContractGap> {
        if result.contains_key(self.output_key) {
            Ok(())
        } else {
            Err(ContractGap {
                skill: self.skill,
                missing: self.output_key,
            })
        }
    }
}

/// A skill returned a result without its promised output key.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{skill} result is missing `{missing}`")]
pub struct ContractGap {
    pub skill: &'static str,
    pub missing: &'static str,
}

/// A capability invoked with a JSON payload.
pub trait Skill: Send + Sync {
    fn contract(&self) -> SkillContract;

    /// Run the skill. The result is not checked against the contract.
    fn run(&self, payload: &Payload) -> Result<Payload>;

    fn name(&self) -> &'static str {
        self.contract().skill
    }

    /// Run the skill and fail if the result breaks the contract.
    fn run_checked(&self, payload: &Payload) -> Result<Payload> {
        let result = self.run(payload)?;
        self.contract().check_output(&result)?;
        Ok(result)
    }
}
