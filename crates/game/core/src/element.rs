//! Elements and the elemental reaction table.
//!
//! Every attack carries an [`Element`]; enemies remember the last element
//! that hit them. When an attack's element meets a *different* applied
//! element, the [`ReactionTable`] yields a [`Reaction`] and a damage
//! multiplier. The table is asymmetric: the order (source, applied)
//! matters.

use strum::{Display, EnumIter};

/// Damage type attached to attacks and to a target's applied status.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumIter)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Element {
    Anemo,
    Pyro,
    Cryo,
    Electro,
}

/// Bonus-damage event triggered by mixing two elements on one target.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumIter)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Reaction {
    Melt,
    Overloaded,
    Superconduct,
}

/// Immutable `(source, applied) -> (reaction, multiplier)` lookup.
///
/// Total over all element pairs: absence means no reaction, with an
/// effective multiplier of 1.0. Pyro striking a Cryo-affected target melts
/// at 2.0; the reverse order melts at 1.5.
pub struct ReactionTable;

impl ReactionTable {
    /// Looks up the reaction for an attacking element against the element
    /// currently applied to the target. Pure, no side effects.
    pub fn lookup(source: Element, applied: Element) -> Option<(Reaction, f32)> {
        use Element::*;
        use Reaction::*;

        match (source, applied) {
            (Pyro, Cryo) => Some((Melt, 2.0)),
            (Cryo, Pyro) => Some((Melt, 1.5)),
            (Pyro, Electro) | (Electro, Pyro) => Some((Overloaded, 1.8)),
            (Cryo, Electro) | (Electro, Cryo) => Some((Superconduct, 1.4)),
            _ => None,
        }
    }

    /// Damage multiplier for the pair; 1.0 when no reaction triggers.
    pub fn multiplier(source: Element, applied: Element) -> f32 {
        Self::lookup(source, applied).map_or(1.0, |(_, multiplier)| multiplier)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_is_asymmetric_for_melt() {
        let (forward, forward_mult) = ReactionTable::lookup(Element::Pyro, Element::Cryo)
            .expect("pyro on cryo reacts");
        let (reverse, reverse_mult) = ReactionTable::lookup(Element::Cryo, Element::Pyro)
            .expect("cryo on pyro reacts");

        assert_eq!(forward, Reaction::Melt);
        assert_eq!(reverse, Reaction::Melt);
        assert_eq!(forward_mult, 2.0);
        assert_eq!(reverse_mult, 1.5);
    }

    #[test]
    fn same_element_never_reacts() {
        for element in [
            Element::Anemo,
            Element::Pyro,
            Element::Cryo,
            Element::Electro,
        ] {
            assert!(ReactionTable::lookup(element, element).is_none());
        }
    }

    #[test]
    fn anemo_has_no_reactions() {
        for other in [Element::Pyro, Element::Cryo, Element::Electro] {
            assert!(ReactionTable::lookup(Element::Anemo, other).is_none());
            assert!(ReactionTable::lookup(other, Element::Anemo).is_none());
        }
    }

    #[test]
    fn multiplier_defaults_to_one_without_reaction() {
        assert_eq!(ReactionTable::multiplier(Element::Anemo, Element::Pyro), 1.0);
        assert_eq!(
            ReactionTable::multiplier(Element::Electro, Element::Cryo),
            1.4
        );
    }
}
