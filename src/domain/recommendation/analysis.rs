//! Analysis report schemas for the quick and comprehensive pipelines.

use serde::{Deserialize, Serialize};

/// A match percentage in `[0, 100]`.
///
/// Deserialization rejects out-of-range values, so an analysis carrying a
/// nonsense score fails the single schema-validation pass instead of leaking
/// into display code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct MatchScore(u8);

impl MatchScore {
    /// Creates a score, rejecting values above 100.
    pub fn new(value: u8) -> Option<Self> {
        (value <= 100).then_some(Self(value))
    }

    /// The percentage value.
    pub fn value(&self) -> u8 {
        self.0
    }
}

impl<'de> Deserialize<'de> for MatchScore {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = u64::deserialize(deserializer)?;
        if raw <= 100 {
            Ok(Self(raw as u8))
        } else {
            Err(serde::de::Error::custom(format!(
                "match score {} exceeds 100",
                raw
            )))
        }
    }
}

impl std::fmt::Display for MatchScore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}%", self.0)
    }
}

/// One trait line in the core profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileTrait {
    pub category: String,
    pub evidence: String,
    pub description: String,
}

/// Headline personality profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoreProfile {
    /// Catchy 3-4 word description, e.g. "The Creative Problem-Solver".
    pub title: String,
    #[serde(default)]
    pub traits: Vec<ProfileTrait>,
}

/// A recommended skill with getting-started guidance (quick pipeline).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillRecommendation {
    pub name: String,
    pub description: String,
    #[serde(rename = "match")]
    pub match_score: MatchScore,
    pub personality_alignment: String,
    #[serde(default)]
    pub getting_started: Option<String>,
}

/// A recommended career direction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CareerPath {
    pub name: String,
    pub description: String,
    #[serde(rename = "match")]
    pub match_score: MatchScore,
    pub personality_alignment: String,
    pub skills_needed: String,
    #[serde(default)]
    pub daily_realities: Option<String>,
    #[serde(default)]
    pub career_progression: Option<String>,
}

/// A skill or career direction to avoid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillToAvoid {
    pub name: String,
    pub reason: String,
    #[serde(default)]
    pub personality_mismatch: Option<String>,
}

/// Quick-assessment analysis report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuickAnalysis {
    pub profile_summary: String,
    pub core_profile: CoreProfile,
    pub skills: Vec<SkillRecommendation>,
    pub career_paths: Vec<CareerPath>,
    #[serde(default)]
    pub skills_to_avoid: Vec<SkillToAvoid>,
    pub insights: String,
    #[serde(default)]
    pub next_steps: Vec<String>,
}

/// Primary skill direction (comprehensive pipeline).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrimarySkill {
    pub name: String,
    pub description: String,
    #[serde(rename = "match")]
    pub match_score: MatchScore,
    pub personality_alignment: String,
}

/// Detailed skill with category tagging (comprehensive pipeline).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillDetail {
    pub name: String,
    pub description: String,
    #[serde(rename = "match")]
    pub match_score: MatchScore,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub personality_traits: Option<String>,
}

/// Additional skill direction with combined reasoning.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdditionalSkill {
    pub name: String,
    pub description: String,
    #[serde(rename = "match")]
    pub match_score: MatchScore,
    pub reasoning: String,
}

/// Recommended educational direction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EducationPath {
    pub name: String,
    pub description: String,
    #[serde(rename = "match")]
    pub match_score: MatchScore,
}

/// Work environment that suits the student.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkEnvironmentFit {
    pub name: String,
    pub description: String,
}

/// Comprehensive (uploaded-test) analysis report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComprehensiveAnalysis {
    #[serde(default)]
    pub profile_summary: Option<String>,
    #[serde(default)]
    pub core_profile: Option<CoreProfile>,
    #[serde(default)]
    pub primary_skills: Vec<PrimarySkill>,
    pub skills: Vec<SkillDetail>,
    #[serde(default)]
    pub additional_skills: Vec<AdditionalSkill>,
    pub career_paths: Vec<CareerPath>,
    #[serde(default)]
    pub skills_to_avoid: Vec<SkillToAvoid>,
    #[serde(default)]
    pub education: Vec<EducationPath>,
    #[serde(default)]
    pub work_environment: Vec<WorkEnvironmentFit>,
    pub insights: String,
    #[serde(default)]
    pub next_steps: Vec<String>,

    /// Set when the career path list was padded with defaults because the
    /// model returned fewer than two. Not part of the model schema.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub used_default_career_paths: bool,
}

impl ComprehensiveAnalysis {
    /// Minimum number of career paths a report should carry.
    pub const MIN_CAREER_PATHS: usize = 2;

    /// Pads the career path list with defaults when the model returned fewer
    /// than [`Self::MIN_CAREER_PATHS`]. Degree-aware: a Data Science degree
    /// gets analyst-track defaults first. Returns true when padding occurred.
    pub fn fill_default_career_paths(&mut self, degree: Option<&str>) -> bool {
        if self.career_paths.len() >= Self::MIN_CAREER_PATHS {
            return false;
        }

        let mut defaults = Vec::new();

        if degree.is_some_and(|d| d.contains("Data Science")) {
            defaults.push(CareerPath {
                name: "Data Analyst".to_string(),
                description: "Analyze and interpret complex data to help organizations make informed decisions".to_string(),
                match_score: MatchScore(75),
                personality_alignment: "Combines analytical thinking with practical application of data science skills".to_string(),
                skills_needed: "SQL, Python, Data Visualization, Statistical Analysis".to_string(),
                daily_realities: Some("Working with datasets, creating reports, presenting insights to stakeholders".to_string()),
                career_progression: Some("Junior Analyst -> Senior Analyst -> Lead Analyst -> Analytics Manager".to_string()),
            });
            defaults.push(CareerPath {
                name: "Business Intelligence Developer".to_string(),
                description: "Design and develop BI solutions to transform data into actionable insights".to_string(),
                match_score: MatchScore(72),
                personality_alignment: "Bridges technical skills with business understanding".to_string(),
                skills_needed: "BI Tools, Dashboard Design, SQL, Business Acumen".to_string(),
                daily_realities: Some("Creating dashboards, automating reports, collaborating with business teams".to_string()),
                career_progression: Some("BI Developer -> Senior BI Developer -> BI Architect -> BI Manager".to_string()),
            });
        }

        if self.career_paths.len() + defaults.len() < Self::MIN_CAREER_PATHS {
            defaults.push(CareerPath {
                name: "Project Coordinator".to_string(),
                description: "Organize and coordinate project activities to ensure successful completion".to_string(),
                match_score: MatchScore(70),
                personality_alignment: "Suitable for organized individuals who enjoy structured work".to_string(),
                skills_needed: "Project Management, Communication, Organization, Time Management".to_string(),
                daily_realities: Some("Managing timelines, coordinating teams, tracking progress, reporting to stakeholders".to_string()),
                career_progression: Some("Coordinator -> Project Manager -> Senior PM -> Program Manager".to_string()),
            });
            defaults.push(CareerPath {
                name: "Digital Marketing Specialist".to_string(),
                description: "Create and implement digital marketing strategies to promote products and services".to_string(),
                match_score: MatchScore(68),
                personality_alignment: "Combines creativity with analytical thinking and digital skills".to_string(),
                skills_needed: "Social Media, Content Creation, Analytics, SEO/SEM".to_string(),
                daily_realities: Some("Creating content, analyzing campaigns, managing social media, optimizing digital presence".to_string()),
                career_progression: Some("Marketing Assistant -> Specialist -> Senior Specialist -> Marketing Manager".to_string()),
            });
        }

        self.career_paths.extend(defaults);
        self.career_paths.truncate(5);
        self.used_default_career_paths = true;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod match_score {
        use super::*;

        #[test]
        fn accepts_percentage_range() {
            assert!(MatchScore::new(0).is_some());
            assert!(MatchScore::new(100).is_some());
            assert!(MatchScore::new(101).is_none());
        }

        #[test]
        fn deserialization_rejects_over_100() {
            assert!(serde_json::from_str::<MatchScore>("85").is_ok());
            assert!(serde_json::from_str::<MatchScore>("140").is_err());
        }

        #[test]
        fn displays_as_percent() {
            assert_eq!(MatchScore(85).to_string(), "85%");
        }
    }

    mod schema {
        use super::*;

        #[test]
        fn quick_analysis_parses_model_shape() {
            let json = r#"{
                "profileSummary": "Based on your quick assessment...",
                "coreProfile": {
                    "title": "The Analytical Builder",
                    "traits": [{
                        "category": "Primary Strength",
                        "evidence": "Based on your answers",
                        "description": "You favor systematic problem solving"
                    }]
                },
                "skills": [{
                    "name": "Data Analysis",
                    "description": "Fits your analytical style",
                    "match": 88,
                    "personalityAlignment": "High conscientiousness",
                    "gettingStarted": "Start with spreadsheets"
                }],
                "careerPaths": [{
                    "name": "Data Analyst",
                    "description": "Turn data into decisions",
                    "match": 85,
                    "personalityAlignment": "Investigative type",
                    "skillsNeeded": "SQL, Python"
                }],
                "skillsToAvoid": [{
                    "name": "Cold Sales",
                    "reason": "Conflicts with introversion"
                }],
                "insights": "Strong analytical core",
                "nextSteps": ["Learn SQL basics"]
            }"#;

            let analysis: QuickAnalysis = serde_json::from_str(json).unwrap();
            assert_eq!(analysis.core_profile.title, "The Analytical Builder");
            assert_eq!(analysis.skills[0].match_score.value(), 88);
            assert_eq!(analysis.skills_to_avoid[0].personality_mismatch, None);
        }

        #[test]
        fn invalid_match_score_fails_the_whole_parse() {
            let json = r#"{
                "profileSummary": "s",
                "coreProfile": {"title": "t", "traits": []},
                "skills": [{
                    "name": "n", "description": "d", "match": 250,
                    "personalityAlignment": "p"
                }],
                "careerPaths": [],
                "insights": "i"
            }"#;
            assert!(serde_json::from_str::<QuickAnalysis>(json).is_err());
        }
    }

    mod default_career_paths {
        use super::*;

        fn analysis_with_paths(n: usize) -> ComprehensiveAnalysis {
            let path = CareerPath {
                name: "Given".to_string(),
                description: "d".to_string(),
                match_score: MatchScore(80),
                personality_alignment: "p".to_string(),
                skills_needed: "s".to_string(),
                daily_realities: None,
                career_progression: None,
            };
            ComprehensiveAnalysis {
                profile_summary: None,
                core_profile: None,
                primary_skills: vec![],
                skills: vec![],
                additional_skills: vec![],
                career_paths: vec![path; n],
                skills_to_avoid: vec![],
                education: vec![],
                work_environment: vec![],
                insights: "i".to_string(),
                next_steps: vec![],
                used_default_career_paths: false,
            }
        }

        #[test]
        fn two_or_more_paths_are_left_alone() {
            let mut analysis = analysis_with_paths(2);
            assert!(!analysis.fill_default_career_paths(None));
            assert_eq!(analysis.career_paths.len(), 2);
            assert!(!analysis.used_default_career_paths);
        }

        #[test]
        fn short_list_is_padded_with_generic_defaults() {
            let mut analysis = analysis_with_paths(0);
            assert!(analysis.fill_default_career_paths(None));
            assert!(analysis.career_paths.len() >= 2);
            assert!(analysis.used_default_career_paths);
            assert_eq!(analysis.career_paths[0].name, "Project Coordinator");
        }

        #[test]
        fn data_science_degree_gets_analyst_defaults() {
            let mut analysis = analysis_with_paths(1);
            assert!(analysis.fill_default_career_paths(Some("BSc Data Science")));
            let names: Vec<&str> = analysis.career_paths.iter().map(|p| p.name.as_str()).collect();
            assert!(names.contains(&"Data Analyst"));
            assert!(names.contains(&"Business Intelligence Developer"));
        }

        #[test]
        fn padded_list_is_capped_at_five() {
            let mut analysis = analysis_with_paths(1);
            analysis.fill_default_career_paths(Some("Data Science"));
            assert!(analysis.career_paths.len() <= 5);
        }
    }
}
