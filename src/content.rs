use std::collections::HashSet;

use serde::Deserialize;
use thiserror::Error;

const EMBEDDED: &str = include_str!("../assets/site_content.json");

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("site content is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("KPI {index} has an empty label")]
    EmptyKpiLabel { index: usize },
    #[error("KPI label {0:?} appears more than once")]
    DuplicateKpiLabel(String),
    #[error("contact form needs at least one facility type")]
    NoFacilityTypes,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct KpiItem {
    pub label: String,
    pub value: String,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct KpiContent {
    pub items: Vec<KpiItem>,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct ContactContent {
    pub headline: String,
    pub subheadline: String,
    pub facility_types: Vec<String>,
    pub submit_cta: String,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct SiteContent {
    pub kpis: KpiContent,
    pub contact: ContactContent,
}

impl SiteContent {
    /// The content bundled into the build.
    pub fn embedded() -> Result<Self, ContentError> {
        Self::from_json(EMBEDDED)
    }

    pub fn from_json(json: &str) -> Result<Self, ContentError> {
        let content: SiteContent = serde_json::from_str(json)?;
        content.check()?;
        Ok(content)
    }

    // KPI labels double as component keys, so they must be unique.
    fn check(&self) -> Result<(), ContentError> {
        let mut seen = HashSet::new();
        for (index, item) in self.kpis.items.iter().enumerate() {
            if item.label.trim().is_empty() {
                return Err(ContentError::EmptyKpiLabel { index });
            }
            if !seen.insert(item.label.as_str()) {
                return Err(ContentError::DuplicateKpiLabel(item.label.clone()));
            }
        }
        if self.contact.facility_types.is_empty() {
            return Err(ContentError::NoFacilityTypes);
        }
        Ok(())
    }
}
