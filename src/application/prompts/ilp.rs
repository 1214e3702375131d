//! Prompt for the ILP event recommendation pipeline.

use std::fmt::Write;

use crate::domain::assessment::{BigFiveScores, RiasecProfile};
use crate::domain::ilp::{IlpCatalog, IlpDomain};

/// Everything the ILP recommender knows about the student.
///
/// Built from derived traits in the quick pathway, or from scores parsed out
/// of uploaded reports in the comprehensive one; every field is optional
/// because either source may be incomplete.
#[derive(Debug, Clone, Default)]
pub struct IlpStudentProfile {
    pub big_five: Option<BigFiveScores>,
    pub riasec: Option<RiasecProfile>,
    /// Top Clifton strengths, when a report provided them.
    pub clifton_strengths: Vec<String>,
    /// Career path names from the preceding analysis.
    pub career_interests: Vec<String>,
    pub user_description: Option<String>,
    pub undergraduate_degree: Option<String>,
}

impl IlpStudentProfile {
    fn format(&self) -> String {
        let mut text = String::new();

        if let Some(big_five) = &self.big_five {
            let _ = writeln!(text, "\n### Big Five Personality Scores:");
            for (name, score) in big_five.entries() {
                let _ = writeln!(
                    text,
                    "- {}: {}% ({})",
                    name,
                    score,
                    BigFiveScores::level(score)
                );
            }
        }

        if let Some(riasec) = &self.riasec {
            let _ = writeln!(text, "\n### RIASEC Career Interest Codes:");
            let _ = writeln!(text, "Primary: {}", riasec.primary.name());
            let _ = writeln!(text, "Secondary: {}", riasec.secondary.name());
            for (code, score) in &riasec.scores {
                let _ = writeln!(text, "- {}: {}%", code.name(), score);
            }
        }

        if !self.clifton_strengths.is_empty() {
            let _ = writeln!(text, "\n### Top Clifton Strengths:");
            for (i, strength) in self.clifton_strengths.iter().take(5).enumerate() {
                let _ = writeln!(text, "{}. {}", i + 1, strength);
            }
        }

        if !self.career_interests.is_empty() {
            let _ = writeln!(text, "\n### Career Interests:");
            for interest in &self.career_interests {
                let _ = writeln!(text, "- {}", interest);
            }
        }

        if let Some(description) = self.user_description.as_deref().filter(|d| !d.is_empty()) {
            let _ = writeln!(text, "\n### Additional Context:\n{}", description);
        }

        if let Some(degree) = self.undergraduate_degree.as_deref().filter(|d| !d.is_empty()) {
            let _ = writeln!(text, "\n### Academic Background:\n{}", degree);
        }

        if text.is_empty() {
            "No personality profile data available".to_string()
        } else {
            text
        }
    }
}

fn domain_event_list(catalog: &IlpCatalog, domain: IlpDomain) -> String {
    catalog
        .events_by_domain(domain)
        .iter()
        .map(|e| format!("[{}] {}", e.crn, e.title_eng))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Renders the ILP recommendation prompt: the student profile plus the full
/// event catalog grouped by domain, and the exact JSON shape to return.
pub fn ilp_recommendation_prompt(profile: &IlpStudentProfile, catalog: &IlpCatalog) -> String {
    format!(
        r#"You are an academic advisor at Lingnan University of Hong Kong matching students with Integrated Learning Programme (ILP) events based on their comprehensive personality assessment results.

## Student Personality Profile:
{profile}

## Available ILP Events by Domain:

### CELD (Civic Education & Leadership Development):
{celd}

### IED (Intellectual & Entrepreneurship Development):
{ied}

### SEW (Social & Emotional Well-being):
{sew}

### PFW (Physical Fitness & Well-being):
{pfw}

### AES (Aesthetic Development):
{aes}

### RE (Residential Education):
{re}

## Your Task:
Recommend 3-4 ILP events from EACH domain that best match this student's personality profile and interests.

## Matching Guidelines:

### For CELD (Civic & Leadership):
- High Extraversion: group leadership activities, team projects
- High Agreeableness: community service, volunteer programs
- Social RIASEC: interpersonal leadership roles
- Low Extraversion: behind-the-scenes civic roles

### For IED (Intellectual & Entrepreneurship):
- High Openness: innovation workshops, creative problem-solving
- Investigative RIASEC: research, technical skills training
- Enterprising RIASEC: business, startup, entrepreneurship events
- High Conscientiousness: structured learning programs

### For SEW (Social & Emotional Well-being):
- High Neuroticism: stress management, mindfulness workshops
- Low Extraversion: self-paced wellness, individual counseling
- High Extraversion: group therapy, peer support programs

### For PFW (Physical Fitness):
- High Extraversion: team sports, group fitness classes
- Low Extraversion: individual activities (yoga, swimming, running)

### For AES (Aesthetic Development):
- High Openness: creative arts workshops, experimental arts
- Artistic RIASEC: hands-on art creation, performance
- Low Openness: structured, traditional art appreciation

### For RE (Residential Education):
- High Extraversion: social hall activities, community building
- Low Extraversion: quiet study groups, individual development

## IMPORTANT: Return ONLY valid JSON with this exact structure:
{{
  "ilpRecommendations": {{
    "CELD": {{
      "primary": "[CRN] Event Name",
      "alternatives": ["[CRN] Event Name 1", "[CRN] Event Name 2", "[CRN] Event Name 3"],
      "reasoning": "Brief explanation tied to specific personality traits"
    }},
    "IED": {{ "primary": "...", "alternatives": ["..."], "reasoning": "..." }},
    "SEW": {{ "primary": "...", "alternatives": ["..."], "reasoning": "..." }},
    "PFW": {{ "primary": "...", "alternatives": ["..."], "reasoning": "..." }},
    "AES": {{ "primary": "...", "alternatives": ["..."], "reasoning": "..." }},
    "RE": {{ "primary": "...", "alternatives": ["..."], "reasoning": "..." }}
  }},
  "overallTheme": "1-2 sentences about the overall recommendation pattern based on personality"
}}

Rules:
1. Use EXACT event names with [CRN] prefix from the provided list
2. Must recommend from ALL 6 domains
3. Match events to personality traits, not random selection
4. Balance comfort zone with growth opportunities
5. Provide specific reasoning tied to measurable traits"#,
        profile = profile.format(),
        celd = domain_event_list(catalog, IlpDomain::Celd),
        ied = domain_event_list(catalog, IlpDomain::Ied),
        sew = domain_event_list(catalog, IlpDomain::Sew),
        pfw = domain_event_list(catalog, IlpDomain::Pfw),
        aes = domain_event_list(catalog, IlpDomain::Aes),
        re = domain_event_list(catalog, IlpDomain::Re),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::assessment::RiasecCode;

    #[test]
    fn empty_profile_says_so() {
        let profile = IlpStudentProfile::default();
        assert_eq!(profile.format(), "No personality profile data available");
    }

    #[test]
    fn big_five_lines_carry_level_bands() {
        let profile = IlpStudentProfile {
            big_five: Some(BigFiveScores {
                openness: 85,
                conscientiousness: 50,
                extraversion: 20,
                agreeableness: 60,
                neuroticism: 40,
            }),
            ..Default::default()
        };
        let text = profile.format();
        assert!(text.contains("- Openness: 85% (High)"));
        assert!(text.contains("- Extraversion: 20% (Low)"));
    }

    #[test]
    fn prompt_lists_events_under_every_domain() {
        let profile = IlpStudentProfile {
            riasec: Some(RiasecProfile {
                primary: RiasecCode::Investigative,
                secondary: RiasecCode::Artistic,
                scores: vec![(RiasecCode::Investigative, 60)],
            }),
            ..Default::default()
        };
        let prompt = ilp_recommendation_prompt(&profile, IlpCatalog::bundled());

        for heading in [
            "### CELD (Civic Education & Leadership Development):",
            "### IED (Intellectual & Entrepreneurship Development):",
            "### SEW (Social & Emotional Well-being):",
            "### PFW (Physical Fitness & Well-being):",
            "### AES (Aesthetic Development):",
            "### RE (Residential Education):",
        ] {
            assert!(prompt.contains(heading), "missing heading {heading}");
        }
        assert!(prompt.contains("Primary: Investigative"));
    }
}
