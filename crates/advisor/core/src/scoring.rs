//! Choice scoring for open encounters.
//!
//! Every offered action resolves to one integer score. The table is
//! flat: interrogation and a handful of member-contextual
//! codes compute their score from board state, everything else resolves
//! through the two-level weight chain, and anything unrecognized is
//! neutral. No code path returns an error; the one caller-misuse case
//! (an empty action code) yields a documented sentinel instead.

use crate::board::BoardState;
use crate::decision::{ActionCode, DecisionContext, OfferedChoice};
use crate::goal::{goal_for, GoalAssignments};
use crate::roster::Member;
use crate::strategy::{AffinityRules, ScoreWeights, WeightKind, WeightOverrides};

/// Hard limit on concurrently detained members.
pub const PRISON_CAPACITY: usize = 3;

/// Sentinel returned for an empty action code. Far outside the normal
/// scoring range so caller misuse is visible in output.
pub const SCORE_CALLER_ERROR: i32 = -999;

/// Interrogating the configured, already-seated primary leader would
/// destroy an optimal board state.
const INTERROGATE_OPTIMAL_LEADER: i32 = -200;
/// Interrogation is unusable while the prison is at capacity.
const INTERROGATE_PRISON_FULL: i32 = -100;
const INTERROGATE_BASE: i32 = 10;
const INTERROGATE_PER_RANK: i32 = 10;

/// Removing a member nobody has plans for frees a slot.
const REMOVE_UNPLANNED_MEMBER: i32 = 40;
/// Removing a member with an assigned goal costs a planned asset.
const REMOVE_PLANNED_MEMBER: i32 = -60;

// Codes with fixed secondary constants rather than configurable weights.
const GAIN_ITEM_MAP: i32 = 20;
const GAIN_ITEM_VEILED: i32 = 20;
const STEAL_INTELLIGENCE: i32 = 20;
const DOWNRANK_RIVALS: i32 = 50;

/// Relationship verbs recognized in action descriptions.
const BEFRIENDS_VERB: &str = " befriends ";
const RIVALS_VERB: &str = " becomes rivals with ";

/// Scores one offered choice.
///
/// An empty action code yields [`SCORE_CALLER_ERROR`]; unrecognized codes
/// score 0. Everything else follows the weight table and the contextual
/// rules below.
pub fn score_choice(
    choice: &OfferedChoice,
    decision: &DecisionContext,
    board: &BoardState,
    assignments: &GoalAssignments,
    weights: &ScoreWeights,
    overrides: &WeightOverrides,
    affinity: &AffinityRules,
) -> i32 {
    let Some(action) = choice.action() else {
        return SCORE_CALLER_ERROR;
    };

    let resolve = |kind: WeightKind| weights.resolve(kind, overrides);

    match action {
        ActionCode::Interrogate => score_interrogate(decision.member, board, assignments),

        ActionCode::Execute => resolve(WeightKind::Execute),
        ActionCode::PromoteNpc => resolve(WeightKind::PromoteNpc),
        ActionCode::NpcBefriendsAnother => {
            resolve(WeightKind::NpcBefriendsAnother)
                + affinity_bonus(
                    &choice.description,
                    board,
                    affinity,
                    resolve(WeightKind::RelationshipModifier),
                )
        }
        ActionCode::GainItemScarab => resolve(WeightKind::GainItemScarab),
        ActionCode::GainItemAnyUnique => resolve(WeightKind::GainItemAnyUnique),
        ActionCode::GainItemCurrency => resolve(WeightKind::GainItemCurrency),
        ActionCode::GainItemMap => GAIN_ITEM_MAP,
        ActionCode::GainItemVeiledItem => GAIN_ITEM_VEILED,
        ActionCode::GainIntelligence => resolve(WeightKind::GainIntelligence),
        ActionCode::GainIntelligenceLarge => resolve(WeightKind::GainIntelligenceLarge),
        ActionCode::DestroyAllItemsInDivision
        | ActionCode::DestroyAllItemsOfRivalDivision => resolve(WeightKind::DestroyItems),
        ActionCode::RemoveAllRivalries | ActionCode::RemoveAllRivalriesInDivision => {
            resolve(WeightKind::RemoveRivalries)
        }
        ActionCode::RemoveAllFromPrison => resolve(WeightKind::RemoveFromPrison),
        ActionCode::SwapNpcJob => resolve(WeightKind::SwapNpcJob),
        ActionCode::SwapLeader => resolve(WeightKind::SwapLeader),
        ActionCode::StealRanks => resolve(WeightKind::StealRanks),
        ActionCode::StealIntelligence => STEAL_INTELLIGENCE,
        ActionCode::RemoveNpcFromOrg | ActionCode::NpcLeavesOrg => {
            score_remove_member(decision.member, assignments)
        }
        ActionCode::DownrankRivalsUprankMyDivision => DOWNRANK_RIVALS,
        ActionCode::ExecuteSafehouse => 0,
        ActionCode::Unknown => 0,
    }
}

/// Interrogation: valuable in proportion to rank while prison capacity
/// lasts, harmful when it would unseat the configured primary leader,
/// unusable at capacity. A member absent from the board scores neutral:
/// there is not enough information to advise.
fn score_interrogate(
    member: Member,
    board: &BoardState,
    assignments: &GoalAssignments,
) -> i32 {
    let Some(state) = board.member(member) else {
        return 0;
    };
    let desired = goal_for(assignments, member);
    if desired.is_primary_leader && state.is_leader && state.division == desired.division {
        return INTERROGATE_OPTIMAL_LEADER;
    }
    if board.imprisoned_count() < PRISON_CAPACITY {
        INTERROGATE_BASE + state.rank.ordinal() * INTERROGATE_PER_RANK
    } else {
        INTERROGATE_PRISON_FULL
    }
}

/// Discarding a member is good exactly when nobody has plans for them.
fn score_remove_member(member: Member, assignments: &GoalAssignments) -> i32 {
    if goal_for(assignments, member).is_none() {
        REMOVE_UNPLANNED_MEMBER
    } else {
        REMOVE_PLANNED_MEMBER
    }
}

/// Affinity adjustment for relationship-forming actions.
///
/// Parses `"<A> befriends <B>"` or `"<A> becomes rivals with <B>"` from the
/// description and consults the strategy's opposed/allied pair sets.
/// Befriending an allied pair or rivaling an opposed pair is worth
/// `+modifier`; the inverse combinations are worth `-modifier`. Pattern
/// misses, members unknown to the board, and unregistered pairs all
/// contribute 0.
fn affinity_bonus(
    description: &str,
    board: &BoardState,
    affinity: &AffinityRules,
    modifier: i32,
) -> i32 {
    if affinity.is_empty() {
        return 0;
    }

    let (pair, is_befriend) = if let Some(pair) = split_verb(description, BEFRIENDS_VERB) {
        (pair, true)
    } else if let Some(pair) = split_verb(description, RIVALS_VERB) {
        (pair, false)
    } else {
        return 0;
    };

    let (Some(a), Some(b)) = (board.member(pair.0), board.member(pair.1)) else {
        return 0;
    };

    if affinity.is_opposed(a.division, b.division) {
        if is_befriend { -modifier } else { modifier }
    } else if affinity.is_allied(a.division, b.division) {
        if is_befriend { modifier } else { -modifier }
    } else {
        0
    }
}

fn split_verb(description: &str, verb: &str) -> Option<(Member, Member)> {
    let (left, right) = description.split_once(verb)?;
    let b = right.trim().trim_end_matches('.');
    Some((Member::parse(left)?, Member::parse(b)?))
}
