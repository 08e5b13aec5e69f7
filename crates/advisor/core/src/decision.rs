//! Open-encounter decision context and action codes.
//!
//! While an encounter is open the collaborator reports the member on trial
//! and up to three offered choices, each an opaque action-code string plus
//! a human-readable effect description. Interrogation is always implicitly
//! on offer. The context exists only for the duration of the encounter.

use arrayvec::ArrayVec;

use crate::roster::Member;

/// Maximum number of explicitly offered choices per encounter.
pub const MAX_CHOICES: usize = 3;

/// Action-code string of the ever-present interrogation choice.
pub const INTERROGATE_CODE: &str = "Interrogate";

// ============================================================================
// Action Codes
// ============================================================================

/// Effect kind identified by the collaborator's action-code string.
///
/// Codes outside this set parse to [`ActionCode::Unknown`] and score
/// neutrally; only an *empty* code is treated as caller error.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ActionCode {
    // ========================================================================
    // Detention
    // ========================================================================
    /// Imprison the decided member, always implicitly on offer.
    Interrogate,

    // ========================================================================
    // Ranks & Relationships
    // ========================================================================
    /// Rank up the decided member.
    Execute,

    /// Rank up another member.
    #[strum(serialize = "PromoteNPC")]
    PromoteNpc,

    /// Form a friendship or rivalry between two members.
    #[strum(serialize = "NPCBefriendsAnother")]
    NpcBefriendsAnother,

    StealRanks,

    // ========================================================================
    // Item & Intelligence Gains
    // ========================================================================
    GainItemScarab,
    GainItemAnyUnique,
    GainItemCurrency,
    GainItemMap,
    GainItemVeiledItem,
    GainIntelligence,
    GainIntelligenceLarge,
    StealIntelligence,

    // ========================================================================
    // Destructive Effects
    // ========================================================================
    DestroyAllItemsInDivision,
    DestroyAllItemsOfRivalDivision,
    RemoveAllRivalries,
    RemoveAllRivalriesInDivision,
    RemoveAllFromPrison,

    // ========================================================================
    // Board Reshuffles
    // ========================================================================
    #[strum(serialize = "SwapNPCJob")]
    SwapNpcJob,
    SwapLeader,
    DownrankRivalsUprankMyDivision,

    /// Remove the decided member from the organization entirely.
    #[strum(serialize = "RemoveNPCFromOrg")]
    RemoveNpcFromOrg,

    /// The decided member leaves of their own accord.
    #[strum(serialize = "NPCLeavesOrg")]
    NpcLeavesOrg,

    ExecuteSafehouse,

    /// Anything the scorer does not recognize.
    Unknown,
}

impl ActionCode {
    /// Parses a collaborator action code.
    ///
    /// Empty (or all-whitespace) codes return `None`, the documented
    /// caller-error case. Unrecognized codes map to [`ActionCode::Unknown`].
    pub fn parse(raw: &str) -> Option<ActionCode> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return None;
        }
        Some(trimmed.parse().unwrap_or(ActionCode::Unknown))
    }

    /// Whether performing this action raises a member's rank.
    pub fn is_rank_increase(self) -> bool {
        matches!(self, ActionCode::Execute | ActionCode::PromoteNpc)
    }
}

// ============================================================================
// Decision Context
// ============================================================================

/// One offered choice: the raw action code plus its effect description.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OfferedChoice {
    pub code: String,
    pub description: String,
}

impl OfferedChoice {
    pub fn new(code: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            description: description.into(),
        }
    }

    /// The implicit interrogation choice.
    pub fn interrogate() -> Self {
        Self::new(INTERROGATE_CODE, INTERROGATE_CODE)
    }

    /// Parsed action code; `None` for the empty-code caller error.
    pub fn action(&self) -> Option<ActionCode> {
        ActionCode::parse(&self.code)
    }
}

/// The member currently on trial and the choices on offer.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DecisionContext {
    pub member: Member,
    choices: ArrayVec<OfferedChoice, MAX_CHOICES>,
}

impl DecisionContext {
    pub fn new(member: Member) -> Self {
        Self {
            member,
            choices: ArrayVec::new(),
        }
    }

    /// Adds an offered choice, silently dropping anything past the third.
    pub fn push_choice(&mut self, choice: OfferedChoice) {
        let _ = self.choices.try_push(choice);
    }

    pub fn choices(&self) -> &[OfferedChoice] {
        &self.choices
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_codes_parse_to_their_variant() {
        assert_eq!(ActionCode::parse("Interrogate"), Some(ActionCode::Interrogate));
        assert_eq!(ActionCode::parse("PromoteNPC"), Some(ActionCode::PromoteNpc));
        assert_eq!(
            ActionCode::parse("NPCBefriendsAnother"),
            Some(ActionCode::NpcBefriendsAnother)
        );
        assert_eq!(
            ActionCode::parse("RemoveNPCFromOrg"),
            Some(ActionCode::RemoveNpcFromOrg)
        );
    }

    #[test]
    fn unrecognized_code_is_unknown_not_error() {
        assert_eq!(ActionCode::parse("OpenPortal"), Some(ActionCode::Unknown));
    }

    #[test]
    fn empty_code_is_caller_error() {
        assert_eq!(ActionCode::parse(""), None);
        assert_eq!(ActionCode::parse("   "), None);
    }

    #[test]
    fn context_caps_offered_choices() {
        let mut decision = DecisionContext::new(Member::Rin);
        for n in 0..5 {
            decision.push_choice(OfferedChoice::new("Execute", format!("choice {n}")));
        }
        assert_eq!(decision.choices().len(), MAX_CHOICES);
    }
}
