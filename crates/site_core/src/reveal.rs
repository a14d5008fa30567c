//! One-shot scroll reveal tracking per page section.

use std::collections::HashSet;

use tracing::debug;

/// Fraction of a section that must be visible in the viewport before it
/// reveals.
pub const REVEAL_THRESHOLD: f64 = 0.3;

/// Top-level page sections, in display order. Each exposes a fixed
/// in-page anchor id and its navbar label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Problem,
    Solution,
    ServiceModel,
    Brands,
    Team,
    Contact,
}

impl Section {
    pub const ALL: [Section; 6] = [
        Section::Problem,
        Section::Solution,
        Section::ServiceModel,
        Section::Brands,
        Section::Team,
        Section::Contact,
    ];

    pub fn anchor(self) -> &'static str {
        match self {
            Section::Problem => "problem",
            Section::Solution => "solution",
            Section::ServiceModel => "service-model",
            Section::Brands => "brands",
            Section::Team => "team",
            Section::Contact => "contact",
        }
    }

    pub fn nav_label(self) -> &'static str {
        match self {
            Section::Problem => "Problem",
            Section::Solution => "Solution",
            Section::ServiceModel => "Service Model",
            Section::Brands => "Trusted By",
            Section::Team => "Team",
            Section::Contact => "Contact",
        }
    }
}

/// Per-section revealed flags. Reveals are monotonic: once a section is
/// revealed no later observation can hide it, and sections are tracked
/// independently of each other.
#[derive(Debug, Clone, Default)]
pub struct RevealTracker {
    revealed: HashSet<Section>,
}

impl RevealTracker {
    /// Records one intersection observation. Returns `true` only when
    /// `section` transitions to revealed for the first time.
    pub fn record_intersection(&mut self, section: Section, visible_ratio: f64) -> bool {
        if self.revealed.contains(&section) {
            return false;
        }
        if visible_ratio < REVEAL_THRESHOLD {
            return false;
        }
        self.revealed.insert(section);
        debug!(section = section.anchor(), "section revealed");
        true
    }

    pub fn is_revealed(&self, section: Section) -> bool {
        self.revealed.contains(&section)
    }
}

#[cfg(test)]
#[path = "tests/reveal_tests.rs"]
mod tests;
