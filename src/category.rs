//! Marker categories and the classification tables that assign them.
//!
//! Two independent schemes exist. The tree scheme ranks every marker into one
//! of four precedence tiers; the clause scheme only knows about clause
//! boundaries and the connectives between them. The tables are kept apart on
//! purpose: a code's clause role is not derived from its tier.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Precedence tier of a marker in the tree scheme, highest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Tier {
    /// Closes a grouping unit and hangs directly off the verse root.
    Terminator,
    Primary,
    Secondary,
    Tertiary,
}

impl Tier {
    /// All tiers in precedence order.
    pub const ALL: [Tier; 4] = [Tier::Terminator, Tier::Primary, Tier::Secondary, Tier::Tertiary];

    /// Zero for the highest tier.
    pub fn rank(self) -> usize {
        match self {
            Tier::Terminator => 0,
            Tier::Primary => 1,
            Tier::Secondary => 2,
            Tier::Tertiary => 3,
        }
    }

    /// True when `self` takes precedence over `other`.
    pub fn outranks(self, other: Tier) -> bool {
        self.rank() < other.rank()
    }

    /// Pending tiers a new marker of this tier takes as children, in the
    /// order their stacks are drained.
    ///
    /// A terminator only closes the primary groups; secondaries and
    /// tertiaries still pending at that point stay pending.
    pub fn claims(self) -> &'static [Tier] {
        match self {
            Tier::Terminator => &[Tier::Primary],
            Tier::Primary => &[Tier::Tertiary, Tier::Secondary],
            Tier::Secondary => &[Tier::Tertiary],
            Tier::Tertiary => &[],
        }
    }
}

/// Role of a marker in the clause scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ClauseRole {
    /// Ends the current clause.
    Terminator,
    /// Belongs to the current clause without closing it.
    Continuer,
}

/// Which table a lookup goes through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scheme {
    Tree,
    Clause,
}

/// Result of a scheme-selected lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Tier(Tier),
    Clause(ClauseRole),
    Unclassified,
}

impl Category {
    pub fn is_classified(&self) -> bool {
        !matches!(self, Category::Unclassified)
    }
}

/// Code to tier lookup for the tree scheme.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TierTable {
    codes: HashMap<String, Tier>,
}

impl TierTable {
    /// Build a table from per-tier code lists.
    ///
    /// A code listed under more than one tier keeps its first assignment;
    /// [`crate::SchemeConfig`] rejects such input before it gets here.
    pub fn from_tiers<'a>(tiers: impl IntoIterator<Item = (Tier, &'a [String])>) -> Self {
        let mut codes = HashMap::new();
        for (tier, list) in tiers {
            for code in list {
                codes.entry(code.trim().to_string()).or_insert(tier);
            }
        }
        TierTable { codes }
    }

    pub fn get(&self, code: &str) -> Option<Tier> {
        self.codes.get(code.trim()).copied()
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }
}

/// Code to role lookup for the clause scheme.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClauseTable {
    codes: HashMap<String, ClauseRole>,
}

impl ClauseTable {
    pub fn new(terminators: &[String], continuers: &[String]) -> Self {
        let mut codes = HashMap::new();
        for code in terminators {
            codes.entry(code.trim().to_string()).or_insert(ClauseRole::Terminator);
        }
        for code in continuers {
            codes.entry(code.trim().to_string()).or_insert(ClauseRole::Continuer);
        }
        ClauseTable { codes }
    }

    pub fn get(&self, code: &str) -> Option<ClauseRole> {
        self.codes.get(code.trim()).copied()
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }
}

/// Holds both tables and answers lookups against either.
///
/// ```
/// use layered_taamim::{Category, Classifier, Scheme, Tier};
///
/// let classifier = Classifier::default();
/// assert_eq!(classifier.classify("92", Scheme::Tree), Category::Tier(Tier::Terminator));
/// assert_eq!(classifier.classify("-", Scheme::Tree), Category::Unclassified);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classifier {
    tiers: TierTable,
    clauses: ClauseTable,
}

impl Classifier {
    pub fn new(tiers: TierTable, clauses: ClauseTable) -> Self {
        Classifier { tiers, clauses }
    }

    pub fn classify(&self, code: &str, scheme: Scheme) -> Category {
        match scheme {
            Scheme::Tree => self.tier(code).map_or(Category::Unclassified, Category::Tier),
            Scheme::Clause => self
                .clause_role(code)
                .map_or(Category::Unclassified, Category::Clause),
        }
    }

    pub fn tier(&self, code: &str) -> Option<Tier> {
        self.tiers.get(code)
    }

    pub fn clause_role(&self, code: &str) -> Option<ClauseRole> {
        self.clauses.get(code)
    }

    pub fn tier_table(&self) -> &TierTable {
        &self.tiers
    }

    pub fn clause_table(&self) -> &ClauseTable {
        &self.clauses
    }
}

impl Default for Classifier {
    fn default() -> Self {
        crate::SchemeConfig::default().into_classifier_unchecked()
    }
}
