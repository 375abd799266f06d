//! Elemental damage resolution.

use crate::element::{Element, Reaction, ReactionTable};

/// Result of resolving base damage against a target's applied element.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DamageResolution {
    /// Final damage after any reaction multiplier.
    pub damage: f32,
    /// The reaction that triggered, if any.
    pub reaction: Option<Reaction>,
}

/// Resolves elemental damage against a target.
///
/// When the target carries an applied element, the reaction table is
/// consulted with `(source, applied)`; a hit multiplies the base damage
/// and names the reaction. Without a status (or without a matching pair)
/// the base damage passes through unmodified.
pub fn resolve(base_damage: f32, source: Element, applied: Option<Element>) -> DamageResolution {
    match applied.and_then(|element| ReactionTable::lookup(source, element)) {
        Some((reaction, multiplier)) => DamageResolution {
            damage: base_damage * multiplier,
            reaction: Some(reaction),
        },
        None => DamageResolution {
            damage: base_damage,
            reaction: None,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_status_passes_damage_through() {
        let resolution = resolve(10.0, Element::Pyro, None);
        assert_eq!(resolution.damage, 10.0);
        assert_eq!(resolution.reaction, None);
    }

    #[test]
    fn melt_doubles_pyro_on_cryo() {
        let resolution = resolve(10.0, Element::Pyro, Some(Element::Cryo));
        assert_eq!(resolution.damage, 20.0);
        assert_eq!(resolution.reaction, Some(Reaction::Melt));
    }

    #[test]
    fn melt_is_weaker_in_reverse_order() {
        let resolution = resolve(10.0, Element::Cryo, Some(Element::Pyro));
        assert_eq!(resolution.damage, 15.0);
        assert_eq!(resolution.reaction, Some(Reaction::Melt));
    }

    #[test]
    fn matching_elements_do_not_react() {
        let resolution = resolve(8.0, Element::Electro, Some(Element::Electro));
        assert_eq!(resolution.damage, 8.0);
        assert_eq!(resolution.reaction, None);
    }
}
