//! Per-member, per-division reward table.
//!
//! Static reference data used to annotate board portraits: what each
//! member yields from each division and how good that yield is relative
//! to their alternatives.

use advisor_core::board::Division;
use advisor_core::roster::Member;

/// Relative quality of one member/division reward.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RewardTier {
    Great,
    Good,
    Average,
    Worst,
}

/// One reward annotation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RewardInfo {
    pub text: &'static str,
    pub tier: RewardTier,
}

/// Looks up the reward a member yields from a division.
///
/// Returns `None` for the untracked division.
pub fn reward_for(member: Member, division: Division) -> Option<RewardInfo> {
    use RewardTier::{Average, Good, Great, Worst};

    // (Transportation, Fortification, Research, Intervention)
    let table: [(&'static str, RewardTier); 4] = match member {
        Member::Aisling => [
            ("Dbl-Veiled Items", Good),
            ("Veiled Exalt", Worst),
            ("Veiled Chaos", Great),
            ("Torment Scarabs", Good),
        ],
        Member::Cameria => [
            ("Abyss Scarabs", Good),
            ("Jewel Chest", Worst),
            ("Jewel Craft", Average),
            ("Delirium Scarabs", Great),
        ],
        Member::Elreon => [
            ("Fragments", Average),
            ("Corrupt Equip.", Worst),
            ("Tainted Craft", Average),
            ("Beyond Scarabs", Good),
        ],
        Member::Gravicius => [
            ("Div Cards Stack", Good),
            ("Div Card Chest", Worst),
            ("Swap Div Card", Worst),
            ("Divination Scarabs", Good),
        ],
        Member::Guff => [
            ("Misc. Currency", Average),
            ("Rare Equip.", Worst),
            ("Misc. Craft", Good),
            ("Blight Scarabs", Good),
        ],
        Member::Haku => [
            ("Unique Strongbox", Average),
            ("Domination Scarabs", Average),
            ("Influence Craft", Good),
            ("Ambush Scarabs", Good),
        ],
        Member::Hillock => [
            ("Influenced Equip.", Worst),
            ("30% Quality", Great),
            ("Eldritch Implicit", Average),
            ("Influenced Scarabs", Good),
        ],
        Member::ItThatFled => [
            ("Corrupt Maps", Average),
            ("Breachstone Bargain", Worst),
            ("Tainted Sockets", Good),
            ("Breach Scarabs", Good),
        ],
        Member::Janus => [
            ("Gold Piles", Worst),
            ("Kaguuran Scarabs", Worst),
            ("Cadiro's Offer", Great),
            ("Expedition Scarabs", Good),
        ],
        Member::Jorgin => [
            ("Sulphite Scarabs", Good),
            ("Delve Equip.", Worst),
            ("Talisman Craft", Good),
            ("Bestiary Scarabs", Great),
        ],
        Member::Korell => [
            ("Anarchy Scarabs", Average),
            ("Essence Equip.", Worst),
            ("Essence Craft", Good),
            ("Essence Scarabs", Good),
        ],
        Member::Leo => [
            ("Incursion Scarabs", Average),
            ("Corrupt Unique", Worst),
            ("Djinn Baal Orb", Good),
            ("Ultimatum Scarabs", Great),
        ],
        Member::Riker => [
            ("Unique Items", Average),
            ("Unique Item Chest", Worst),
            ("Ancient Orb", Good),
            ("Titanic Scarabs", Good),
        ],
        Member::Rin => [
            ("Map Currency", Average),
            ("Unique Map Chest", Worst),
            ("Map Craft", Average),
            ("Cartography Scarabs", Great),
        ],
        Member::Tora => [
            ("Quality Gems", Average),
            ("Gem Chest", Worst),
            ("Gem Craft", Good),
            ("Ritual Scarabs", Great),
        ],
        Member::Vagan => [
            ("Harbinger Scarabs", Good),
            ("Incubators", Worst),
            ("Chaos/Fracture", Average),
            ("Legion Scarabs", Great),
        ],
        Member::Vorici => [
            ("Stack of Currency", Average),
            ("Socket Crafts", Average),
            ("Socket Color", Great),
            ("Harvest Scarabs", Great),
        ],
    };

    let index = match division {
        Division::Transportation => 0,
        Division::Fortification => 1,
        Division::Research => 2,
        Division::Intervention => 3,
        Division::None => return None,
    };
    let (text, tier) = table[index];
    Some(RewardInfo { text, tier })
}
