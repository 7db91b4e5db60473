// Unit tests for the skill stubs and their contracts.
//
// The stubs return empty mappings. These tests pin that down and assert the
// resulting contract gap explicitly, so a real implementation shows up as a
// deliberate test change rather than a silent behavior shift.

use std::path::Path;

use serde_json::{json, Value};

use trendgate::skills::media_downloader::{self, MediaDownloader};
use trendgate::skills::traits::{ContractGap, Skill};
use trendgate::skills::transcriber::{self, Transcriber};
use trendgate::skills::{find, registry};
use trendgate::Payload;

fn payload(value: Value) -> Payload {
    value.as_object().cloned().expect("test payload must be an object")
}

// ============================================================
// MediaDownloader
// ============================================================

#[test]
fn media_downloader_stub_returns_empty_mapping() {
    let downloader = MediaDownloader::new("/tmp/trendgate-downloads");
    let result = downloader
        .run(&payload(json!({ "url": "http://example.com/video.mp4" })))
        .unwrap();
    assert!(result.is_empty());
}

#[test]
fn media_downloader_result_lacks_file_path() {
    let downloader = MediaDownloader::new("/tmp/trendgate-downloads");
    let result = downloader
        .run(&payload(json!({ "url": "http://example.com/video.mp4" })))
        .unwrap();

    // Contract requires `file_path`; the stub doesn't produce it yet
    assert!(!result.contains_key("file_path"));
    let gap = downloader.contract().check_output(&result).unwrap_err();
    assert_eq!(
        gap,
        ContractGap {
            skill: "media_downloader",
            missing: "file_path",
        }
    );
}

#[test]
fn media_downloader_contract_keys() {
    assert_eq!(media_downloader::CONTRACT.input_key, "url");
    assert_eq!(media_downloader::CONTRACT.output_key, "file_path");
}

#[test]
fn media_downloader_keeps_download_dir() {
    let downloader = MediaDownloader::new("/tmp/trendgate-downloads");
    assert_eq!(
        downloader.download_dir(),
        Path::new("/tmp/trendgate-downloads")
    );
}

// ============================================================
// Transcriber
// ============================================================

#[test]
fn transcriber_stub_returns_empty_mapping() {
    let result = Transcriber
        .run(&payload(json!({ "file_path": "/tmp/video.mp4" })))
        .unwrap();
    assert!(result.is_empty());
}

#[test]
fn transcriber_result_lacks_transcript_text() {
    let result = Transcriber
        .run(&payload(json!({ "file_path": "/tmp/video.mp4" })))
        .unwrap();

    // Contract requires `transcript_text`; the stub doesn't produce it yet
    assert!(!result.contains_key("transcript_text"));
    let gap = transcriber::CONTRACT.check_output(&result).unwrap_err();
    assert_eq!(gap.missing, "transcript_text");
    assert_eq!(gap.to_string(), "transcriber result is missing `transcript_text`");
}

#[test]
fn transcriber_run_checked_fails_with_contract_gap() {
    let err = Transcriber
        .run_checked(&payload(json!({ "file_path": "/tmp/video.mp4" })))
        .unwrap_err();
    let gap = err.downcast_ref::<ContractGap>().expect("should be a ContractGap");
    assert_eq!(gap.skill, "transcriber");
}

// ============================================================
// Stubs ignore their input
// ============================================================

#[test]
fn stubs_never_error_on_missing_input() {
    let downloader = MediaDownloader::new("/tmp/trendgate-downloads");
    assert!(downloader.run(&Payload::new()).unwrap().is_empty());
    assert!(Transcriber.run(&Payload::new()).unwrap().is_empty());
}

#[test]
fn missing_input_is_detected_by_contract() {
    let wrong = payload(json!({ "file_path": "/tmp/video.mp4" }));
    assert!(media_downloader::CONTRACT.missing_input(&wrong));
    assert!(!transcriber::CONTRACT.missing_input(&wrong));
}

// ============================================================
// Registry
// ============================================================

#[test]
fn registry_lists_both_skills() {
    let skills = registry(Path::new("/tmp/trendgate-downloads"));
    let names: Vec<&str> = skills.iter().map(|s| s.name()).collect();
    assert_eq!(names, vec!["media_downloader", "transcriber"]);
}

#[test]
fn every_registered_skill_currently_has_a_gap() {
    for skill in registry(Path::new("/tmp/trendgate-downloads")) {
        let contract = skill.contract();
        let mut input = Payload::new();
        input.insert(contract.input_key.to_string(), json!("placeholder"));
        let result = skill.run(&input).unwrap();
        assert!(
            contract.check_output(&result).is_err(),
            "{} unexpectedly satisfies its contract; update these tests",
            skill.name()
        );
    }
}

#[test]
fn find_ignores_dash_underscore_difference() {
    let dir = Path::new("/tmp/trendgate-downloads");
    assert!(find(dir, "media_downloader").is_some());
    assert!(find(dir, "media-downloader").is_some());
    assert!(find(dir, "encoder").is_none());
}
