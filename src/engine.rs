//! Password policy engine - gate validation and strength scoring.

use secrecy::{ExposeSecret, SecretString};

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

use crate::checks;
use crate::checks::{MAX_LENGTH, MIN_LENGTH};
use crate::report::{RuleChecks, StrengthReport, StrengthTier, ValidationResult};
use crate::wordlist;

/// Hard gate for account creation and password reset.
///
/// Checks run in a fixed priority order and stop at the first failure;
/// callers must not assume every rule was evaluated. The password value is
/// never logged or echoed in the result.
///
/// # Arguments
/// * `password` - The candidate password
///
/// # Returns
/// A `ValidationResult` with the verdict and the first failing requirement.
pub fn validate(password: &SecretString) -> ValidationResult {
    let pwd = password.expose_secret();

    if !checks::within_min_length(pwd) {
        return ValidationResult::rejected("Password must be at least 8 characters long");
    }
    if !checks::within_max_length(pwd) {
        return ValidationResult::rejected("Password must be at most 64 characters long");
    }
    if !checks::has_letter(pwd) {
        return ValidationResult::rejected("Password must contain at least one letter");
    }
    if wordlist::is_common(pwd) {
        return ValidationResult::rejected("Password is too common");
    }
    if checks::has_sequential_run(pwd) {
        return ValidationResult::rejected("Password contains sequential characters");
    }
    if checks::has_repeated_run(pwd) {
        return ValidationResult::rejected("Password contains too many repeated characters");
    }
    if checks::has_keyboard_pattern(pwd) {
        return ValidationResult::rejected("Password contains a keyboard pattern");
    }

    ValidationResult::accepted()
}

/// Exhaustive strength evaluation for real-time meters.
///
/// Unlike [`validate`], every rule is always computed regardless of earlier
/// failures, so the report can itemize all problems at once.
///
/// # Arguments
/// * `password` - The candidate password
///
/// # Returns
/// A `StrengthReport` with score, tier, feedback and per-rule outcomes.
pub fn calculate_strength(password: &SecretString) -> StrengthReport {
    let pwd = password.expose_secret();
    let len = checks::char_count(pwd);

    let rule_checks = RuleChecks {
        length_ok: len >= MIN_LENGTH,
        max_length_ok: len <= MAX_LENGTH,
        has_uppercase: checks::has_uppercase(pwd),
        has_lowercase: checks::has_lowercase(pwd),
        has_digit: checks::has_digit(pwd),
        has_special: checks::has_special(pwd),
        not_common: !wordlist::is_common(pwd),
        no_sequential_run: !checks::has_sequential_run(pwd),
        no_repeated_run: !checks::has_repeated_run(pwd),
        no_keyboard_pattern: !checks::has_keyboard_pattern(pwd),
    };

    let mut score: u8 = 0;

    // Length tier bonuses: up to 30 points, stacking at 8/12/16 characters
    if len >= 8 {
        score += 15;
    }
    if len >= 12 {
        score += 10;
    }
    if len >= 16 {
        score += 5;
    }

    // Character class bonuses: 10 points per class, up to 40
    if rule_checks.has_uppercase {
        score += 10;
    }
    if rule_checks.has_lowercase {
        score += 10;
    }
    if rule_checks.has_digit {
        score += 10;
    }
    if rule_checks.has_special {
        score += 10;
    }

    // Pattern health bonuses: up to 30
    if rule_checks.not_common {
        score += 10;
    }
    if rule_checks.no_sequential_run {
        score += 10;
    }
    if rule_checks.no_repeated_run {
        score += 5;
    }
    if rule_checks.no_keyboard_pattern {
        score += 5;
    }

    StrengthReport {
        score,
        tier: StrengthTier::from_score(score),
        feedback: build_feedback(&rule_checks, len),
        checks: rule_checks,
    }
}

/// One remediation message per failing rule, in a fixed order; a single
/// positive message when everything passes.
fn build_feedback(rule_checks: &RuleChecks, len: usize) -> Vec<String> {
    let mut feedback = Vec::new();

    if !rule_checks.length_ok {
        feedback.push(format!("Add at least {} more characters", MIN_LENGTH - len));
    }
    if !rule_checks.max_length_ok {
        feedback.push(format!("Use at most {MAX_LENGTH} characters"));
    }
    if !rule_checks.has_uppercase {
        feedback.push("Add uppercase letters (A-Z)".to_string());
    }
    if !rule_checks.has_lowercase {
        feedback.push("Add lowercase letters (a-z)".to_string());
    }
    if !rule_checks.has_digit {
        feedback.push("Add numbers (0-9)".to_string());
    }
    if !rule_checks.has_special {
        feedback.push("Add special characters (!@#$%...)".to_string());
    }
    if !rule_checks.not_common {
        feedback.push("Avoid common passwords".to_string());
    }
    if !rule_checks.no_sequential_run {
        feedback.push("Avoid sequential characters (e.g. 1234, abcd)".to_string());
    }
    if !rule_checks.no_repeated_run {
        feedback.push("Avoid repeating the same character (e.g. aaa)".to_string());
    }
    if !rule_checks.no_keyboard_pattern {
        feedback.push("Avoid keyboard patterns (e.g. qwerty)".to_string());
    }

    if feedback.is_empty() {
        feedback.push("Great! Your password is strong and secure".to_string());
    }

    feedback
}

/// Async version that debounces, then sends the strength report via channel.
///
/// A token cancelled before evaluation starts suppresses the send; once
/// evaluation runs it always computes every rule.
#[cfg(feature = "async")]
pub async fn calculate_strength_tx(
    password: &SecretString,
    token: CancellationToken,
    tx: mpsc::Sender<StrengthReport>,
) {
    use std::time::Duration;

    #[cfg(feature = "tracing")]
    tracing::info!("strength evaluation is about to start...");

    tokio::time::sleep(Duration::from_millis(300)).await;

    if token.is_cancelled() {
        #[cfg(feature = "tracing")]
        tracing::debug!("strength evaluation cancelled before it started");
        return;
    }

    let report = calculate_strength(password);

    if let Err(e) = tx.send(report).await {
        #[cfg(feature = "tracing")]
        tracing::error!("Failed to send strength report: {}", e);
        let _ = e;
    }
}
