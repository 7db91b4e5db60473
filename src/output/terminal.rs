// Colored terminal output for trend records and skill runs.
//
// main.rs delegates all formatting here so the command handlers stay about
// control flow.

use colored::Colorize;

use crate::intelligence::record::{FieldErrorKind, TrendRecord, ValidationError};
use crate::skills::traits::{ContractGap, Skill, SkillContract};
use crate::Payload;

/// Display a validated trend record.
pub fn display_trend_record(record: &TrendRecord) {
    println!(
        "\n{}",
        format!("=== Trend {} ===", record.trend_id()).bold()
    );
    println!("  Topic:       {}", record.topic());
    println!(
        "  Confidence:  {}",
        colorize_confidence(record.confidence_score())
    );
    match record.timestamp_utc() {
        Some(utc) => println!("  Timestamp:   {} ({})", record.timestamp(), utc.to_rfc3339()),
        None => println!(
            "  Timestamp:   {} {}",
            record.timestamp(),
            "(free-form)".dimmed()
        ),
    }
    println!("\n{}", "Valid.".green().bold());
}

/// Display every field that failed validation.
pub fn display_validation_error(err: &ValidationError) {
    let count = err.errors().len();
    println!(
        "\n{}",
        format!(
            "=== {} validation error{} ===",
            count,
            if count == 1 { "" } else { "s" }
        )
        .red()
        .bold()
    );

    for error in err.errors() {
        let reason = match &error.kind {
            FieldErrorKind::Missing => "missing".yellow().to_string(),
            FieldErrorKind::WrongType { expected, found } => {
                format!("expected {expected}, found {found}").red().to_string()
            }
        };
        println!("  {:<18} {}", error.field.bold(), reason);
    }
}

/// Display a skill's raw result and whether it meets its contract.
pub fn display_skill_result(skill: &dyn Skill, result: &Payload) {
    println!(
        "\n{}",
        format!("=== {} result ===", skill.name()).bold()
    );

    if result.is_empty() {
        println!("  {}", "(empty)".dimmed());
    }
    for (key, value) in result {
        println!("  {:<18} {}", key, super::preview_value(value, 100));
    }

    match skill.contract().check_output(result) {
        Ok(()) => println!("\n{}", "Contract satisfied.".green().bold()),
        Err(gap) => display_contract_gap(&gap),
    }
}

pub fn display_contract_gap(gap: &ContractGap) {
    println!(
        "\n  {} {}",
        "Contract gap:".red().bold(),
        gap.to_string().red()
    );
}

/// Display the skill registry with each skill's contract.
pub fn display_skill_list(skills: &[Box<dyn Skill>]) {
    println!(
        "\n{}",
        format!("=== Skills ({}) ===", skills.len()).bold()
    );
    println!();
    println!(
        "  {:<20} {:<14} {:<16}",
        "Skill".dimmed(),
        "Input".dimmed(),
        "Output".dimmed()
    );
    println!("  {}", "-".repeat(50).dimmed());

    for skill in skills {
        let SkillContract {
            skill: name,
            input_key,
            output_key,
        } = skill.contract();
        println!("  {:<20} {:<14} {:<16}", name, input_key, output_key);
    }
    println!();
}

/// Color a confidence score by band.
fn colorize_confidence(score: f64) -> colored::ColoredString {
    let text = format!("{score:.2}");
    if score >= 0.75 {
        text.bright_green()
    } else if score >= 0.4 {
        text.bright_yellow()
    } else {
        text.bright_blue()
    }
}
