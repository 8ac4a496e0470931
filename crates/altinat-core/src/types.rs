//! Observation records as returned by the iNaturalist API

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Taxon attached to an observation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Taxon {
    pub name: String,
    #[serde(default)]
    pub preferred_common_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Photo {
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObservationUser {
    pub login: String,
}

/// A single sighting. `id` is the only identity key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    pub id: u64,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub species_guess: Option<String>,
    #[serde(default)]
    pub taxon: Option<Taxon>,
    #[serde(default)]
    pub photos: Vec<Photo>,
    pub user: ObservationUser,
    #[serde(default)]
    pub uri: String,
    #[serde(default)]
    pub place_guess: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

impl Observation {
    pub fn login(&self) -> &str {
        &self.user.login
    }

    /// Common name when the taxon has one, otherwise the observer's guess
    pub fn display_name(&self) -> &str {
        self.taxon
            .as_ref()
            .and_then(|t| t.preferred_common_name.as_deref())
            .filter(|name| !name.is_empty())
            .or(self.species_guess.as_deref())
            .unwrap_or("")
    }

    pub fn scientific_name(&self) -> Option<&str> {
        self.taxon.as_ref().map(|t| t.name.as_str())
    }

    /// First photo, resized from the API's square thumbnail to medium
    pub fn medium_photo_url(&self) -> Option<String> {
        self.photos
            .first()
            .map(|p| p.url.replacen("square", "medium", 1))
    }

    /// Description cut to `limit` characters, with `...` when truncated
    pub fn description_preview(&self, limit: usize) -> Option<String> {
        let description = self.description.as_deref()?;
        if description.chars().count() > limit {
            let cut: String = description.chars().take(limit).collect();
            Some(format!("{}...", cut))
        } else {
            Some(description.to_string())
        }
    }
}

/// One page of the observations endpoint
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ObservationPage {
    #[serde(default)]
    pub results: Vec<Observation>,
}
