use hashbrown::HashMap;
use serde::Serialize;
use std::fmt;

#[derive(Serialize, Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Icon {
    Boost,
    Cooling,
}

impl fmt::Display for Icon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Icon::Boost => write!(f, "Boost"),
            Icon::Cooling => write!(f, "Cooling"),
        }
    }
}

// Resource icon counts carried by a card or accumulated by a player.
// Zero counts are never stored, so two tallies compare equal iff they hold the same icons.
#[derive(Serialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct Icons(HashMap<Icon, u32>);

impl Icons {
    pub fn new() -> Self {
        Icons(HashMap::new())
    }

    pub fn get(&self, icon: Icon) -> u32 {
        self.0.get(&icon).copied().unwrap_or(0)
    }

    pub fn add(&mut self, icon: Icon, count: u32) {
        if count == 0 {
            return;
        }
        *self.0.entry(icon).or_insert(0) += count;
    }

    pub fn merge(&mut self, other: &Icons) {
        for (icon, count) in other.iter() {
            self.add(icon, count);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Icon, u32)> + '_ {
        self.0.iter().map(|(icon, count)| (*icon, *count))
    }
}

impl FromIterator<(Icon, u32)> for Icons {
    fn from_iter<I: IntoIterator<Item = (Icon, u32)>>(iter: I) -> Self {
        let mut icons = Icons::new();
        for (icon, count) in iter {
            icons.add(icon, count);
        }
        icons
    }
}

impl<const N: usize> From<[(Icon, u32); N]> for Icons {
    fn from(pairs: [(Icon, u32); N]) -> Self {
        pairs.into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_icon_names() {
        assert_eq!(Icon::Boost.to_string(), "Boost");
        assert_eq!(Icon::Cooling.to_string(), "Cooling");
    }

    #[test]
    fn test_merge_is_additive() {
        let mut totals = Icons::from([(Icon::Boost, 1)]);
        totals.merge(&Icons::from([(Icon::Boost, 2), (Icon::Cooling, 1)]));
        assert_eq!(totals.get(Icon::Boost), 3);
        assert_eq!(totals.get(Icon::Cooling), 1);
    }

    #[test]
    fn test_zero_counts_are_not_stored() {
        let icons = Icons::from([(Icon::Cooling, 0)]);
        assert!(icons.is_empty());
        assert_eq!(icons, Icons::new());
    }

    #[test]
    fn test_merge_empty_is_noop() {
        let mut totals = Icons::from([(Icon::Cooling, 2)]);
        totals.merge(&Icons::new());
        assert_eq!(totals, Icons::from([(Icon::Cooling, 2)]));
    }
}
