//! Result types for validation and strength reporting.

/// Per-rule outcomes of an exhaustive evaluation.
///
/// Exactly these ten rules are always computed, each independently of the
/// others, so a strength meter can render an itemized checklist.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleChecks {
    pub length_ok: bool,
    pub max_length_ok: bool,
    pub has_uppercase: bool,
    pub has_lowercase: bool,
    pub has_digit: bool,
    pub has_special: bool,
    pub not_common: bool,
    pub no_sequential_run: bool,
    pub no_repeated_run: bool,
    pub no_keyboard_pattern: bool,
}

/// Strength tier, a monotonic function of the score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum StrengthTier {
    Weak,
    Fair,
    Good,
    Strong,
    VeryStrong,
}

impl StrengthTier {
    /// Maps a score in `0..=100` to its tier (thresholds 20/40/60/80).
    pub fn from_score(score: u8) -> Self {
        match score {
            80.. => StrengthTier::VeryStrong,
            60.. => StrengthTier::Strong,
            40.. => StrengthTier::Good,
            20.. => StrengthTier::Fair,
            _ => StrengthTier::Weak,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            StrengthTier::Weak => "Weak",
            StrengthTier::Fair => "Fair",
            StrengthTier::Good => "Good",
            StrengthTier::Strong => "Strong",
            StrengthTier::VeryStrong => "Very Strong",
        }
    }

    /// UI color hint carried with the tier; not part of the scoring contract.
    pub fn color(&self) -> &'static str {
        match self {
            StrengthTier::Weak => "#ff4b4b",
            StrengthTier::Fair => "#ffa64b",
            StrengthTier::Good => "#ffd24b",
            StrengthTier::Strong => "#9acd32",
            StrengthTier::VeryStrong => "#2ecc71",
        }
    }
}

impl std::fmt::Display for StrengthTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Output of [`calculate_strength`](crate::calculate_strength).
///
/// `tier` is fully determined by `score`, and `feedback` is fully determined
/// by `checks`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StrengthReport {
    /// Additive score in `0..=100`.
    pub score: u8,
    pub tier: StrengthTier,
    /// Remediation messages, one per failing rule in a fixed order, or a
    /// single positive message when every rule passes.
    pub feedback: Vec<String>,
    pub checks: RuleChecks,
}

impl StrengthReport {
    pub fn color(&self) -> &'static str {
        self.tier.color()
    }
}

/// Output of [`validate`](crate::validate): a fail-fast gate verdict.
///
/// `reason` names the first failing hard requirement; callers must not assume
/// later checks ran.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationResult {
    pub accepted: bool,
    pub reason: &'static str,
}

impl ValidationResult {
    pub(crate) fn rejected(reason: &'static str) -> Self {
        Self {
            accepted: false,
            reason,
        }
    }

    pub(crate) fn accepted() -> Self {
        Self {
            accepted: true,
            reason: "Valid password",
        }
    }
}
