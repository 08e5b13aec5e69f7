//! Strategy profiles and the scoring-weight table.
//!
//! A strategy bundles three things: per-member goal assignments, sparse
//! overrides of the global score weights, and (for relationship-aware
//! profiles) two sets of division pairs the strategy considers opposed or
//! allied. Weight resolution is an explicit two-level chain: strategy
//! override first, globally configured default second.

use std::collections::{BTreeMap, BTreeSet};

use crate::board::Division;
use crate::goal::{GoalAssignments, MemberGoal};
use crate::roster::Member;

// ============================================================================
// Weight Table
// ============================================================================

/// Named, independently configurable scoring weights.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum WeightKind {
    /// Ranking up the decided member.
    Execute,
    /// Ranking up another member.
    PromoteNpc,
    /// Stealing ranks from another member.
    StealRanks,
    GainItemScarab,
    GainItemAnyUnique,
    GainItemCurrency,
    /// Forming a friendship or rivalry.
    NpcBefriendsAnother,
    GainIntelligence,
    GainIntelligenceLarge,
    SwapNpcJob,
    SwapLeader,
    /// Destroying items. Should be negative.
    DestroyItems,
    /// Removing rivalries. Should be negative.
    RemoveRivalries,
    /// Releasing everyone from prison. Should be negative.
    RemoveFromPrison,
    /// Magnitude of the affinity bonus/malus on relationship actions.
    RelationshipModifier,
}

impl WeightKind {
    /// The globally configured default for this weight.
    pub fn default_value(self) -> i32 {
        match self {
            WeightKind::Execute => 35,
            WeightKind::PromoteNpc => 40,
            WeightKind::StealRanks => 60,
            WeightKind::GainItemScarab => 80,
            WeightKind::GainItemAnyUnique => 40,
            WeightKind::GainItemCurrency => 35,
            WeightKind::NpcBefriendsAnother => 30,
            WeightKind::GainIntelligence => 15,
            WeightKind::GainIntelligenceLarge => 25,
            WeightKind::SwapNpcJob => 5,
            WeightKind::SwapLeader => 5,
            WeightKind::DestroyItems => -50,
            WeightKind::RemoveRivalries => -75,
            WeightKind::RemoveFromPrison => -80,
            WeightKind::RelationshipModifier => 75,
        }
    }
}

/// Sparse per-strategy weight overrides.
pub type WeightOverrides = BTreeMap<WeightKind, i32>;

/// The globally configured weight table.
///
/// Only stores values the player changed; [`ScoreWeights::get`] falls back
/// to [`WeightKind::default_value`] for everything else, and
/// [`ScoreWeights::resolve`] layers strategy overrides on top.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScoreWeights {
    values: BTreeMap<WeightKind, i32>,
}

impl ScoreWeights {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the global value for one weight.
    pub fn set(&mut self, kind: WeightKind, value: i32) {
        self.values.insert(kind, value);
    }

    /// The global value for one weight (configured or built-in default).
    pub fn get(&self, kind: WeightKind) -> i32 {
        self.values
            .get(&kind)
            .copied()
            .unwrap_or_else(|| kind.default_value())
    }

    /// Resolves one weight through the override chain:
    /// strategy override → global value.
    pub fn resolve(&self, kind: WeightKind, overrides: &WeightOverrides) -> i32 {
        overrides.get(&kind).copied().unwrap_or_else(|| self.get(kind))
    }
}

// ============================================================================
// Affinity Rules
// ============================================================================

/// Unordered division pairs a relationship-aware strategy cares about.
///
/// Pairs are stored normalized (smaller division first), so
/// `Research-Transportation` and `Transportation-Research` are the same rule.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AffinityRules {
    opposed: BTreeSet<(Division, Division)>,
    allied: BTreeSet<(Division, Division)>,
}

impl AffinityRules {
    /// Parses two comma-separated `DivisionA-DivisionB` lists.
    ///
    /// Malformed items and unknown division names are skipped silently.
    pub fn parse(opposed: &str, allied: &str) -> AffinityRules {
        AffinityRules {
            opposed: parse_pair_list(opposed),
            allied: parse_pair_list(allied),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.opposed.is_empty() && self.allied.is_empty()
    }

    pub fn is_opposed(&self, a: Division, b: Division) -> bool {
        self.opposed.contains(&normalize_pair(a, b))
    }

    pub fn is_allied(&self, a: Division, b: Division) -> bool {
        self.allied.contains(&normalize_pair(a, b))
    }
}

fn normalize_pair(a: Division, b: Division) -> (Division, Division) {
    if a <= b { (a, b) } else { (b, a) }
}

fn parse_pair_list(raw: &str) -> BTreeSet<(Division, Division)> {
    raw.split(',')
        .filter_map(|item| {
            let (left, right) = item.split_once('-')?;
            let a = Division::parse_lenient(left);
            let b = Division::parse_lenient(right);
            (a.is_active() && b.is_active()).then(|| normalize_pair(a, b))
        })
        .collect()
}

// ============================================================================
// Strategy Definitions
// ============================================================================

/// One named strategy profile.
///
/// Definitions are static content: goal strings are kept in their
/// collaborator form and parsed leniently at activation, like any other
/// goal configuration.
#[derive(Clone, Copy, Debug)]
pub struct StrategyDefinition {
    pub name: &'static str,
    pub member_goals: &'static [(Member, &'static str)],
    pub score_overrides: &'static [(WeightKind, i32)],
    pub opposed_divisions: &'static str,
    pub allied_divisions: &'static str,
}

impl StrategyDefinition {
    /// Expands the goal table into a full assignment map.
    ///
    /// Every roster member is reset to no-goal first, then the strategy's
    /// explicit entries are applied on top.
    pub fn assignments(&self) -> GoalAssignments {
        use strum::IntoEnumIterator;

        let mut assignments: GoalAssignments = Member::iter()
            .map(|member| (member, MemberGoal::NONE))
            .collect();
        for (member, goal) in self.member_goals {
            assignments.insert(*member, MemberGoal::parse(goal));
        }
        assignments
    }

    pub fn overrides(&self) -> WeightOverrides {
        self.score_overrides.iter().copied().collect()
    }

    pub fn affinity(&self) -> AffinityRules {
        AffinityRules::parse(self.opposed_divisions, self.allied_divisions)
    }
}

/// The immutable, ordered strategy catalog plus the synthetic "Custom" entry.
#[derive(Clone, Copy, Debug)]
pub struct Catalog {
    strategies: &'static [StrategyDefinition],
}

impl Catalog {
    /// Name of the synthetic entry that performs no automatic assignment.
    pub const CUSTOM: &'static str = "Custom";

    pub fn new(strategies: &'static [StrategyDefinition]) -> Self {
        Self { strategies }
    }

    /// All selectable profile names, "Custom" first.
    pub fn names(&self) -> Vec<&'static str> {
        std::iter::once(Self::CUSTOM)
            .chain(self.strategies.iter().map(|s| s.name))
            .collect()
    }

    pub fn get(&self, name: &str) -> Option<&'static StrategyDefinition> {
        self.strategies.iter().find(|s| s.name == name)
    }

    /// Activates a profile by name.
    ///
    /// Named profiles reset every member's goal and apply their table;
    /// "Custom" leaves `current` untouched and clears overrides and
    /// affinity rules. Unknown names return `None`.
    pub fn activate(
        &self,
        name: &str,
        current: &GoalAssignments,
    ) -> Option<(GoalAssignments, WeightOverrides, AffinityRules)> {
        if name == Self::CUSTOM {
            return Some((
                current.clone(),
                WeightOverrides::new(),
                AffinityRules::default(),
            ));
        }
        let definition = self.get(name)?;
        Some((
            definition.assignments(),
            definition.overrides(),
            definition.affinity(),
        ))
    }
}
