//! The built-in strategy profile catalog.
//!
//! Seven curated profiles covering the common farming plans, in the order
//! they are presented to the player. Goal strings stay in collaborator
//! form and are parsed leniently at activation; the synthetic "Custom"
//! entry is contributed by [`Catalog`] itself.

use advisor_core::roster::Member;
use advisor_core::strategy::{Catalog, StrategyDefinition, WeightKind};

pub const STRATEGIES: &[StrategyDefinition] = &[
    StrategyDefinition {
        name: "Comprehensive Scarab Farm",
        member_goals: &[
            (Member::Cameria, "Intervention (Leader)"),
            (Member::Rin, "Intervention"),
            (Member::Vagan, "Intervention"),
            (Member::Gravicius, "Intervention"),
            (Member::Tora, "Fortification"),
            (Member::Hillock, "Fortification"),
            (Member::Guff, "Fortification"),
            (Member::Aisling, "Research"),
            (Member::Vorici, "Research"),
            (Member::ItThatFled, "Research"),
            (Member::Leo, "Transportation"),
            (Member::Janus, "Transportation"),
        ],
        score_overrides: &[
            (WeightKind::GainItemScarab, 100),
            (WeightKind::PromoteNpc, 50),
            (WeightKind::Execute, 40),
        ],
        opposed_divisions: "",
        allied_divisions: "",
    },
    StrategyDefinition {
        name: "Crafting Meta (Research)",
        member_goals: &[
            (Member::Aisling, "Research (Leader)"),
            (Member::Vorici, "Research"),
            (Member::ItThatFled, "Research"),
            (Member::Hillock, "Fortification (Leader)"),
            (Member::Tora, "Fortification"),
            (Member::Guff, "Fortification"),
            (Member::Vagan, "Intervention"),
            (Member::Cameria, "Intervention"),
        ],
        score_overrides: &[
            (WeightKind::PromoteNpc, 60),
            (WeightKind::Execute, 50),
            (WeightKind::SwapNpcJob, 20),
        ],
        opposed_divisions: "",
        allied_divisions: "",
    },
    StrategyDefinition {
        name: "Relationship-Based",
        member_goals: &[
            (Member::Gravicius, "Transportation"),
            (Member::Rin, "Transportation"),
            (Member::Janus, "Research"),
            (Member::Guff, "Research"),
            (Member::Hillock, "Fortification"),
        ],
        score_overrides: &[
            (WeightKind::NpcBefriendsAnother, 100),
            (WeightKind::RelationshipModifier, 75),
            (WeightKind::RemoveRivalries, -50),
        ],
        opposed_divisions: "Transportation-Research,Fortification-Intervention",
        allied_divisions: "Fortification-Transportation,Fortification-Research,Intervention-Transportation,Intervention-Research",
    },
    StrategyDefinition {
        name: "Gamble (Currency/Div)",
        member_goals: &[
            (Member::ItThatFled, "Research"),
            (Member::Jorgin, "Research"),
            (Member::Vorici, "Research"),
            (Member::Leo, "Research"),
            (Member::Rin, "Intervention"),
            (Member::Cameria, "Intervention"),
            (Member::Gravicius, "Intervention"),
        ],
        score_overrides: &[
            (WeightKind::GainItemCurrency, 90),
            (WeightKind::GainItemAnyUnique, 60),
        ],
        opposed_divisions: "",
        allied_divisions: "",
    },
    StrategyDefinition {
        name: "Delve Deeper",
        member_goals: &[
            (Member::Hillock, "Transportation"),
            (Member::Gravicius, "Fortification"),
            (Member::Tora, "Research"),
            (Member::Vagan, "Intervention"),
            (Member::Rin, "Intervention"),
            (Member::Cameria, "Intervention"),
        ],
        score_overrides: &[
            (WeightKind::GainIntelligenceLarge, 80),
            (WeightKind::GainIntelligence, 40),
        ],
        opposed_divisions: "",
        allied_divisions: "",
    },
    StrategyDefinition {
        name: "Einhar's Menagerie",
        member_goals: &[
            (Member::Jorgin, "Research (Leader)"),
            (Member::ItThatFled, "Research"),
            (Member::Vorici, "Research"),
            (Member::Aisling, "Research"),
            (Member::Tora, "Fortification"),
            (Member::Guff, "Fortification"),
            (Member::Vagan, "Intervention"),
            (Member::Rin, "Intervention"),
        ],
        score_overrides: &[],
        opposed_divisions: "",
        allied_divisions: "",
    },
    StrategyDefinition {
        name: "The Atlas Grind",
        member_goals: &[
            (Member::Hillock, "Transportation"),
            (Member::Gravicius, "Fortification"),
            (Member::Cameria, "Intervention"),
            (Member::Rin, "Intervention"),
            (Member::ItThatFled, "Research"),
            (Member::Vorici, "Research"),
        ],
        score_overrides: &[],
        opposed_divisions: "",
        allied_divisions: "",
    },
];

/// The full catalog over the built-in profiles.
pub fn catalog() -> Catalog {
    Catalog::new(STRATEGIES)
}
