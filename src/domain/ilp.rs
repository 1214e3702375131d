//! Integrated Learning Programme event catalog.
//!
//! The catalog ships as a static JSON file embedded at compile time and is
//! parsed once on first access. Events are recommended per domain by the ILP
//! pipeline; CRNs identify individual scheduled events.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Objectives are truncated to this length when embedded in prompts.
pub const OBJECTIVES_PROMPT_LIMIT: usize = 200;

/// The six ILP domains.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum IlpDomain {
    #[serde(rename = "CELD")]
    Celd,
    #[serde(rename = "IED")]
    Ied,
    #[serde(rename = "SEW")]
    Sew,
    #[serde(rename = "PFW")]
    Pfw,
    #[serde(rename = "AES")]
    Aes,
    #[serde(rename = "RE")]
    Re,
}

impl IlpDomain {
    /// All domains in catalog order.
    pub const ALL: [IlpDomain; 6] = [
        IlpDomain::Celd,
        IlpDomain::Ied,
        IlpDomain::Sew,
        IlpDomain::Pfw,
        IlpDomain::Aes,
        IlpDomain::Re,
    ];

    /// Short domain code as it appears in the catalog and in prompts.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Celd => "CELD",
            Self::Ied => "IED",
            Self::Sew => "SEW",
            Self::Pfw => "PFW",
            Self::Aes => "AES",
            Self::Re => "RE",
        }
    }
}

/// One ILP event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IlpEvent {
    pub crn: String,
    pub title_eng: String,
    pub domain: IlpDomain,
    #[serde(default)]
    pub objectives: Option<String>,
}

impl IlpEvent {
    /// Objectives truncated for prompt embedding.
    pub fn objectives_for_prompt(&self) -> Option<&str> {
        self.objectives.as_deref().map(|o| {
            if o.len() > OBJECTIVES_PROMPT_LIMIT {
                // Truncate on a char boundary at or below the limit.
                let mut end = OBJECTIVES_PROMPT_LIMIT;
                while !o.is_char_boundary(end) {
                    end -= 1;
                }
                &o[..end]
            } else {
                o
            }
        })
    }
}

/// Human-readable names for one domain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DomainInfo {
    pub full_name: String,
    #[serde(default)]
    pub name_chi: String,
}

#[derive(Debug, Deserialize)]
struct CatalogMetadata {
    domains: BTreeMap<IlpDomain, DomainInfo>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CatalogFile {
    metadata: CatalogMetadata,
    events_by_name: BTreeMap<String, IlpEvent>,
}

/// The bundled ILP event catalog.
#[derive(Debug)]
pub struct IlpCatalog {
    domains: BTreeMap<IlpDomain, DomainInfo>,
    events: Vec<IlpEvent>,
}

impl IlpCatalog {
    /// The catalog embedded in the crate.
    pub fn bundled() -> &'static IlpCatalog {
        static CATALOG: Lazy<IlpCatalog> = Lazy::new(|| {
            let file: CatalogFile = serde_json::from_str(include_str!("../../data/ilp_events.json"))
                .expect("bundled ILP catalog is valid JSON");
            IlpCatalog {
                domains: file.metadata.domains,
                events: file.events_by_name.into_values().collect(),
            }
        });
        &CATALOG
    }

    /// All events.
    pub fn events(&self) -> &[IlpEvent] {
        &self.events
    }

    /// Events belonging to a domain.
    pub fn events_by_domain(&self, domain: IlpDomain) -> Vec<&IlpEvent> {
        self.events.iter().filter(|e| e.domain == domain).collect()
    }

    /// Looks up an event by CRN.
    pub fn event_by_crn(&self, crn: &str) -> Option<&IlpEvent> {
        self.events.iter().find(|e| e.crn == crn)
    }

    /// Human-readable names for a domain.
    pub fn domain_info(&self, domain: IlpDomain) -> Option<&DomainInfo> {
        self.domains.get(&domain)
    }
}
