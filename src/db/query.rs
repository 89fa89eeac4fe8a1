use planetarium_schema::Planet;

/// Query-by-example filter for planet listing.
///
/// Built from a partially populated [`Planet`] template: a blank field is
/// excluded from the filter and matches any value, a populated field requires
/// an exact match. No substring or wildcard semantics.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlanetFilter {
    pub name: Option<String>,
    pub climate: Option<String>,
    pub terrain: Option<String>,
}

impl PlanetFilter {
    pub fn from_template(template: &Planet) -> Self {
        Self {
            name: non_blank(&template.name),
            climate: non_blank(&template.climate),
            terrain: non_blank(&template.terrain),
        }
    }

    pub fn is_unfiltered(&self) -> bool {
        self.name.is_none() && self.climate.is_none() && self.terrain.is_none()
    }

    /// WHERE predicates and their bind values, in matching order.
    pub(crate) fn predicates(&self) -> Vec<(&'static str, &str)> {
        let mut predicates = Vec::new();
        if let Some(name) = &self.name {
            predicates.push(("name = ?", name.as_str()));
        }
        if let Some(climate) = &self.climate {
            predicates.push(("climate = ?", climate.as_str()));
        }
        if let Some(terrain) = &self.terrain {
            predicates.push(("terrain = ?", terrain.as_str()));
        }
        predicates
    }
}

fn non_blank(value: &str) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}
