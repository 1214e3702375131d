//! Schema for ILP activity recommendations returned by the model.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::ilp::IlpDomain;

/// Recommendation for one development domain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DomainRecommendation {
    /// Primary event, referenced by name as listed in the catalog.
    pub primary: String,
    #[serde(default)]
    pub alternatives: Vec<String>,
    pub reasoning: String,
}

/// Full ILP recommendation report keyed by domain code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IlpRecommendations {
    pub ilp_recommendations: BTreeMap<IlpDomain, DomainRecommendation>,
    #[serde(default)]
    pub overall_theme: Option<String>,
}

impl IlpRecommendations {
    /// Domains present in the report, in canonical order.
    pub fn domains(&self) -> impl Iterator<Item = IlpDomain> + '_ {
        self.ilp_recommendations.keys().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_domain_keyed_report() {
        let json = r#"{
            "ilpRecommendations": {
                "IED": {
                    "primary": "Startup Bootcamp: From Idea to Pitch",
                    "alternatives": ["Design Thinking Workshop"],
                    "reasoning": "Matches entrepreneurial drive"
                },
                "RE": {
                    "primary": "Undergraduate Research Symposium",
                    "alternatives": [],
                    "reasoning": "Fits investigative profile"
                }
            },
            "overallTheme": "Build and investigate"
        }"#;

        let report: IlpRecommendations = serde_json::from_str(json).unwrap();
        assert_eq!(report.ilp_recommendations.len(), 2);
        let domains: Vec<IlpDomain> = report.domains().collect();
        assert_eq!(domains, vec![IlpDomain::Ied, IlpDomain::Re]);
        assert_eq!(
            report.ilp_recommendations[&IlpDomain::Ied].primary,
            "Startup Bootcamp: From Idea to Pitch"
        );
    }

    #[test]
    fn unknown_domain_key_is_rejected() {
        let json = r#"{
            "ilpRecommendations": {
                "XYZ": {"primary": "p", "reasoning": "r"}
            }
        }"#;
        assert!(serde_json::from_str::<IlpRecommendations>(json).is_err());
    }
}
