//! Board snapshot normalization.
//!
//! The collaborator that reads the live game hands over raw strings: one
//! `(name, rank, job)` tuple per visible member, the set of names currently
//! credited with division leadership, and loose UI text fragments. This
//! module turns that into a validated [`BoardState`] keyed by [`Member`].
//! Parsing is lenient: unknown identities are skipped, and
//! unparseable division or rank strings degrade to their `None` variants
//! instead of failing the tick.

use std::collections::{BTreeMap, BTreeSet};

use crate::roster::Member;

/// Status-line fragment marking a detained member.
const DETENTION_MARKER: &str = "Turns Left";

/// Relationship verbs recognized in collaborator text fragments.
const FRIENDS_PATTERN: &str = " is friends with ";
const RIVALS_PATTERN: &str = " is rivals with ";

// ============================================================================
// Division
// ============================================================================

/// One of the four organizational branches a member can belong to.
///
/// `None` means the member is currently untracked (imprisoned, unassigned,
/// or simply not parsed). Declaration order is the scan order used by the
/// planner when looking for leaderless divisions.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(ascii_case_insensitive)]
pub enum Division {
    Transportation,
    Fortification,
    Research,
    Intervention,
    #[default]
    None,
}

impl Division {
    /// The four real divisions, excluding `None`.
    pub const ACTIVE: [Division; 4] = [
        Division::Transportation,
        Division::Fortification,
        Division::Research,
        Division::Intervention,
    ];

    /// Parses a job/division name, mapping anything unrecognized to `None`.
    pub fn parse_lenient(raw: &str) -> Division {
        raw.trim().parse().unwrap_or(Division::None)
    }

    /// Whether this is a real division (not the `None` sentinel).
    pub fn is_active(self) -> bool {
        self != Division::None
    }
}

// ============================================================================
// Rank
// ============================================================================

/// Seniority within a division. `Captain` is the ceiling below leadership.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(ascii_case_insensitive)]
pub enum Rank {
    #[default]
    None,
    Sergeant,
    Lieutenant,
    Captain,
}

impl Rank {
    /// Parses a rank name, mapping anything unrecognized to `None`.
    pub fn parse_lenient(raw: &str) -> Rank {
        raw.trim().parse().unwrap_or(Rank::None)
    }

    /// Ordinal on the 0..=3 scale used by interrogation scoring.
    pub fn ordinal(self) -> i32 {
        match self {
            Rank::None => 0,
            Rank::Sergeant => 1,
            Rank::Lieutenant => 2,
            Rank::Captain => 3,
        }
    }
}

// ============================================================================
// Raw Input
// ============================================================================

/// One member tuple exactly as delivered by the snapshot collaborator.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RawMemberEntry {
    pub name: String,
    pub rank: String,
    pub job: String,
}

impl RawMemberEntry {
    pub fn new(
        name: impl Into<String>,
        rank: impl Into<String>,
        job: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            rank: rank.into(),
            job: job.into(),
        }
    }
}

/// A complete raw board snapshot for one tick.
///
/// `status_lines` carries the loose UI text fragments from which detention
/// counts and relationship facts are pattern-matched. Lines that match
/// nothing are ignored.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BoardSnapshot {
    pub members: Vec<RawMemberEntry>,
    pub leaders: Vec<String>,
    pub status_lines: Vec<String>,
}

impl BoardSnapshot {
    /// Normalizes the raw snapshot into a validated board state.
    pub fn normalize(&self) -> BoardState {
        BoardState::build(&self.members, &self.leaders, &self.status_lines)
    }
}

// ============================================================================
// Normalized State
// ============================================================================

/// Per-tick facts about one member. Rebuilt from scratch every tick and
/// never mutated afterwards.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MemberState {
    pub member: Member,
    pub division: Division,
    pub rank: Rank,
    pub is_leader: bool,
    pub friends: BTreeSet<Member>,
    pub rivals: BTreeSet<Member>,
}

/// Canonical snapshot of the board for one tick.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BoardState {
    members: BTreeMap<Member, MemberState>,
    imprisoned: usize,
}

impl BoardState {
    /// Builds a board state from collaborator-supplied raw data.
    ///
    /// Entries with empty or unknown identities are skipped. Division and
    /// rank strings parse leniently. Leadership is derived from membership
    /// in `leaders`, never stored redundantly by the caller.
    pub fn build(
        entries: &[RawMemberEntry],
        leaders: &[String],
        status_lines: &[String],
    ) -> BoardState {
        let mut members = BTreeMap::new();

        for entry in entries {
            let Some(member) = Member::parse(&entry.name) else {
                continue;
            };
            let is_leader = leaders.iter().any(|name| name.trim() == entry.name.trim());
            members.insert(
                member,
                MemberState {
                    member,
                    division: Division::parse_lenient(&entry.job),
                    rank: Rank::parse_lenient(&entry.rank),
                    is_leader,
                    friends: BTreeSet::new(),
                    rivals: BTreeSet::new(),
                },
            );
        }

        let mut board = BoardState {
            members,
            imprisoned: 0,
        };
        board.apply_status_lines(status_lines);
        board
    }

    fn apply_status_lines(&mut self, status_lines: &[String]) {
        use strum::EnumCount;

        let mut detained = 0usize;
        for line in status_lines {
            if line.contains(DETENTION_MARKER) {
                detained += 1;
                continue;
            }
            if let Some((a, b)) = split_relationship(line, FRIENDS_PATTERN) {
                self.record_friendship(a, b);
            } else if let Some((a, b)) = split_relationship(line, RIVALS_PATTERN) {
                self.record_rivalry(a, b);
            }
        }
        self.imprisoned = detained.min(Member::COUNT);
    }

    fn record_friendship(&mut self, a: Member, b: Member) {
        if let Some(state) = self.members.get_mut(&a) {
            state.friends.insert(b);
        }
        if let Some(state) = self.members.get_mut(&b) {
            state.friends.insert(a);
        }
    }

    fn record_rivalry(&mut self, a: Member, b: Member) {
        if let Some(state) = self.members.get_mut(&a) {
            state.rivals.insert(b);
        }
        if let Some(state) = self.members.get_mut(&b) {
            state.rivals.insert(a);
        }
    }

    /// Looks up one member's state, if present on the board.
    pub fn member(&self, member: Member) -> Option<&MemberState> {
        self.members.get(&member)
    }

    /// All members currently tracked on the board, in roster order.
    pub fn members(&self) -> impl Iterator<Item = &MemberState> {
        self.members.values()
    }

    /// The member currently credited with leadership of `division`, if any.
    pub fn leader_of(&self, division: Division) -> Option<Member> {
        self.members
            .values()
            .find(|state| state.division == division && state.is_leader)
            .map(|state| state.member)
    }

    /// Number of members currently detained.
    pub fn imprisoned_count(&self) -> usize {
        self.imprisoned
    }
}

/// Splits `"<A><pattern><B>"` into two roster members.
///
/// Returns `None` when the pattern is absent or either side is not a known
/// member; malformed fragments contribute nothing.
fn split_relationship(line: &str, pattern: &str) -> Option<(Member, Member)> {
    let (left, right) = line.split_once(pattern)?;
    Some((Member::parse(left)?, Member::parse(right)?))
}
