//! The fixed roster of syndicate members.
//!
//! Identities are a closed set known at compile time. Board snapshots,
//! goal configuration, and decision contexts all key off this enum rather
//! than raw strings, so a misspelled collaborator string degrades to
//! "unknown member" exactly once, at the parsing boundary.

/// A syndicate member identity.
///
/// The `Ord` derive follows declaration order and doubles as the
/// deterministic tie-break wherever the rules need "first member wins"
/// (e.g. two members both configured as primary leader of one division).
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
    strum::EnumCount,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Member {
    Aisling,
    Cameria,
    Elreon,
    Gravicius,
    Guff,
    Haku,
    Hillock,
    #[strum(serialize = "It That Fled")]
    ItThatFled,
    Janus,
    Jorgin,
    Korell,
    Leo,
    Rin,
    Riker,
    Tora,
    Vagan,
    Vorici,
}

impl Member {
    /// Parses a collaborator-supplied display name.
    ///
    /// Returns `None` for anything outside the roster; callers treat that
    /// entry as untracked rather than failing the tick.
    pub fn parse(name: &str) -> Option<Member> {
        name.trim().parse().ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::{EnumCount, IntoEnumIterator};

    #[test]
    fn roster_has_seventeen_members() {
        assert_eq!(Member::COUNT, 17);
        assert_eq!(Member::iter().count(), 17);
    }

    #[test]
    fn display_names_round_trip() {
        for member in Member::iter() {
            assert_eq!(Member::parse(&member.to_string()), Some(member));
        }
    }

    #[test]
    fn multi_word_name_parses() {
        assert_eq!(Member::parse("It That Fled"), Some(Member::ItThatFled));
        assert_eq!(Member::ItThatFled.to_string(), "It That Fled");
    }

    #[test]
    fn unknown_name_is_rejected() {
        assert_eq!(Member::parse(""), None);
        assert_eq!(Member::parse("Catarina"), None);
    }
}
