// crates/adpost-core/src/location.rs
//
// "Confirm your location": state → city → neighbourhood.
//
// Each level is only meaningful under its parent, so changing a level
// clears everything below it. An empty string means "not selected yet".

use serde::{Deserialize, Serialize};

use crate::error::FormError;

/// (state, [(city, [neighbourhood])])
type CatalogEntry = (&'static str, &'static [(&'static str, &'static [&'static str])]);

const CATALOG: &[CatalogEntry] = &[
    ("Himachal Pradesh", &[
        ("Bhota",  &["Morsu", "Bazaar Road"]),
        ("Shimla", &["Lakkar Bazar", "Mall Road"]),
    ]),
    ("Delhi", &[
        ("South Delhi",   &["Saket", "Hauz Khas"]),
        ("Central Delhi", &["Connaught Place", "Karol Bagh"]),
    ]),
    ("Maharashtra", &[
        ("Mumbai", &["Andheri", "Bandra", "Dadar"]),
        ("Pune",   &["Kothrud", "Hinjewadi"]),
    ]),
    ("Karnataka", &[
        ("Bengaluru", &["Indiranagar", "Whitefield", "Koramangala"]),
        ("Mysuru",    &["VV Mohalla", "Chamundi Hill"]),
    ]),
];

// ── Catalog lookups ───────────────────────────────────────────────────────────

pub fn states() -> impl Iterator<Item = &'static str> {
    CATALOG.iter().map(|(state, _)| *state)
}

/// Cities of `state`; empty when the state is unknown or unset.
pub fn cities(state: &str) -> impl Iterator<Item = &'static str> + '_ {
    CATALOG
        .iter()
        .filter(move |(s, _)| *s == state)
        .flat_map(|(_, cities)| cities.iter().map(|(city, _)| *city))
}

/// Neighbourhoods of `city` within `state`.
pub fn neighborhoods<'a>(state: &'a str, city: &'a str) -> impl Iterator<Item = &'static str> + 'a {
    CATALOG
        .iter()
        .filter(move |(s, _)| *s == state)
        .flat_map(|(_, cities)| cities.iter())
        .filter(move |(c, _)| *c == city)
        .flat_map(|(_, hoods)| hoods.iter().copied())
}

// ── Selection ─────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationSelection {
    pub state:        String,
    pub city:         String,
    pub neighborhood: String,
}

impl LocationSelection {
    /// Pick a state; city and neighbourhood reset.
    pub fn select_state(&mut self, state: &str) -> Result<(), FormError> {
        if !state.is_empty() && !states().any(|s| s == state) {
            return Err(FormError::UnknownLocation { level: "state", value: state.to_string() });
        }
        self.state = state.to_string();
        self.city.clear();
        self.neighborhood.clear();
        Ok(())
    }

    /// Pick a city of the current state; neighbourhood resets.
    pub fn select_city(&mut self, city: &str) -> Result<(), FormError> {
        if !city.is_empty() && !cities(&self.state).any(|c| c == city) {
            return Err(FormError::UnknownLocation { level: "city", value: city.to_string() });
        }
        self.city = city.to_string();
        self.neighborhood.clear();
        Ok(())
    }

    pub fn select_neighborhood(&mut self, neighborhood: &str) -> Result<(), FormError> {
        if !neighborhood.is_empty()
            && !neighborhoods(&self.state, &self.city).any(|n| n == neighborhood)
        {
            return Err(FormError::UnknownLocation {
                level: "neighbourhood",
                value: neighborhood.to_string(),
            });
        }
        self.neighborhood = neighborhood.to_string();
        Ok(())
    }

    pub fn is_complete(&self) -> bool {
        !self.state.is_empty() && !self.city.is_empty() && !self.neighborhood.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_lookups() {
        assert_eq!(states().count(), 4);
        assert_eq!(cities("Delhi").collect::<Vec<_>>(), vec!["South Delhi", "Central Delhi"]);
        assert_eq!(
            neighborhoods("Maharashtra", "Mumbai").collect::<Vec<_>>(),
            vec!["Andheri", "Bandra", "Dadar"],
        );
        assert_eq!(cities("Atlantis").count(), 0);
        assert_eq!(neighborhoods("Delhi", "Pune").count(), 0);
    }

    #[test]
    fn state_change_resets_children() {
        let mut loc = LocationSelection::default();
        loc.select_state("Karnataka").unwrap();
        loc.select_city("Mysuru").unwrap();
        loc.select_neighborhood("Chamundi Hill").unwrap();
        assert!(loc.is_complete());

        loc.select_state("Delhi").unwrap();
        assert_eq!(loc.state, "Delhi");
        assert!(loc.city.is_empty());
        assert!(loc.neighborhood.is_empty());
    }

    #[test]
    fn city_change_resets_neighborhood() {
        let mut loc = LocationSelection::default();
        loc.select_state("Maharashtra").unwrap();
        loc.select_city("Mumbai").unwrap();
        loc.select_neighborhood("Bandra").unwrap();
        loc.select_city("Pune").unwrap();
        assert_eq!(loc.city, "Pune");
        assert!(loc.neighborhood.is_empty());
    }

    #[test]
    fn city_from_other_state_is_rejected() {
        let mut loc = LocationSelection::default();
        loc.select_state("Delhi").unwrap();
        let err = loc.select_city("Shimla").unwrap_err();
        assert!(matches!(err, FormError::UnknownLocation { level: "city", .. }));
        assert!(loc.city.is_empty());
    }

    #[test]
    fn neighborhood_needs_city() {
        let mut loc = LocationSelection::default();
        loc.select_state("Delhi").unwrap();
        assert!(loc.select_neighborhood("Saket").is_err());
    }

    #[test]
    fn empty_clears_level() {
        let mut loc = LocationSelection::default();
        loc.select_state("Delhi").unwrap();
        loc.select_city("South Delhi").unwrap();
        loc.select_state("").unwrap();
        assert_eq!(loc, LocationSelection::default());
    }
}
