// Transcriber: turns a media file into transcript text.
//
// Not implemented yet: run() returns an empty mapping, which breaks the
// contract (no `transcript_text`).

use anyhow::Result;
use serde_json::Value;
use tracing::warn;

use super::traits::{Skill, SkillContract};
use crate::Payload;

pub const CONTRACT: SkillContract = SkillContract {
    skill: "transcriber",
    input_key: "file_path",
    output_key: "transcript_text",
};

#[derive(Debug, Clone, Copy, Default)]
pub struct Transcriber;

impl Skill for Transcriber {
    fn contract(&self) -> SkillContract {
        CONTRACT
    }

    fn run(&self, payload: &Payload) -> Result<Payload> {
        let file_path = payload.get(CONTRACT.input_key).and_then(Value::as_str);
        warn!(
            file_path = ?file_path,
            "Transcriber is not implemented, returning an empty result"
        );
        Ok(Payload::new())
    }
}
