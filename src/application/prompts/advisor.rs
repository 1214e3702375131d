//! System prompt for the advisor chat.

use std::fmt::Write;

use crate::domain::recommendation::{CareerPath, CoreProfile, SkillToAvoid};
use crate::domain::session::AnalysisReport;

/// Renders the advisor system prompt from a finished analysis report.
///
/// The advisor must speak from the student's actual results, so the whole
/// report is inlined: profile, skills, career paths, avoidances, insights.
pub fn advisor_system_prompt(report: &AnalysisReport) -> String {
    let mut prompt = String::from(
        "You are a highly personalized AI Career Advisor who knows this specific user \
         intimately based on their comprehensive personality assessment results. You must \
         ALWAYS reference their specific traits, test results, and recommendations in your \
         responses.\n\nUSER'S COMPLETE PROFILE:\n",
    );

    match report {
        AnalysisReport::Quick(analysis) => {
            let _ = writeln!(prompt, "\nProfile Summary:\n{}", analysis.profile_summary);
            write_core_profile(&mut prompt, &analysis.core_profile);

            let _ = writeln!(prompt, "\nRecommended Skills:");
            for skill in &analysis.skills {
                let _ = writeln!(
                    prompt,
                    "- {} ({} match)\n  Why it suits them: {}\n  Getting started: {}",
                    skill.name,
                    skill.match_score,
                    skill.personality_alignment,
                    skill.getting_started.as_deref().unwrap_or("Not specified"),
                );
            }

            write_career_paths(&mut prompt, &analysis.career_paths);
            write_avoidances(&mut prompt, &analysis.skills_to_avoid);
            write_closing(&mut prompt, &analysis.insights, &analysis.next_steps);
        }
        AnalysisReport::Comprehensive(analysis) => {
            if let Some(summary) = &analysis.profile_summary {
                let _ = writeln!(prompt, "\nProfile Summary:\n{}", summary);
            }
            if let Some(core) = &analysis.core_profile {
                write_core_profile(&mut prompt, core);
            }

            let _ = writeln!(prompt, "\nRecommended Skills:");
            for skill in &analysis.skills {
                let _ = writeln!(
                    prompt,
                    "- {} ({} match)\n  Why it suits them: {}",
                    skill.name,
                    skill.match_score,
                    skill.personality_traits.as_deref().unwrap_or(&skill.description),
                );
            }

            write_career_paths(&mut prompt, &analysis.career_paths);
            write_avoidances(&mut prompt, &analysis.skills_to_avoid);
            write_closing(&mut prompt, &analysis.insights, &analysis.next_steps);
        }
    }

    prompt.push_str(
        "\nIMPORTANT INSTRUCTIONS:\n\
         1. You are NOT a generic career advisor. You know THIS SPECIFIC USER intimately.\n\
         2. ALWAYS reference their specific test results, personality traits, and recommendations.\n\
         3. Use phrases like \"Based on your high extraversion...\" or \"Given your analytical thinking style...\"\n\
         4. When giving advice, connect it to their personality profile.\n\
         5. Be conversational, supportive, and encouraging while being specific to THEIR profile.\n\
         6. If they ask about a skill or career, relate it back to their test results.\n\
         7. Remember their strengths and weaknesses from the analysis.\n\
         8. Be their personal mentor who truly understands them.\n\n\
         Remember: You're not just answering questions - you're their personal career advisor \
         who knows them better than any generic counselor could.",
    );

    prompt
}

fn write_core_profile(prompt: &mut String, core: &CoreProfile) {
    let _ = writeln!(prompt, "\nCore Personality Profile:\nTitle: {}", core.title);
    for t in &core.traits {
        let _ = writeln!(prompt, "{}: {} ({})", t.category, t.description, t.evidence);
    }
}

fn write_career_paths(prompt: &mut String, paths: &[CareerPath]) {
    let _ = writeln!(prompt, "\nCareer Paths:");
    for career in paths {
        let _ = writeln!(
            prompt,
            "- {} ({} match)\n  Why it suits them: {}\n  Skills needed: {}",
            career.name, career.match_score, career.personality_alignment, career.skills_needed,
        );
    }
}

fn write_avoidances(prompt: &mut String, avoid: &[SkillToAvoid]) {
    if avoid.is_empty() {
        return;
    }
    let _ = writeln!(prompt, "\nSkills to Avoid:");
    for skill in avoid {
        let _ = writeln!(prompt, "- {}: {}", skill.name, skill.reason);
    }
}

fn write_closing(prompt: &mut String, insights: &str, next_steps: &[String]) {
    let _ = writeln!(prompt, "\nKey Insights:\n{}", insights);
    if !next_steps.is_empty() {
        let _ = writeln!(prompt, "\nNext Steps:\n{}", next_steps.join("\n"));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::recommendation::{MatchScore, ProfileTrait, QuickAnalysis, SkillRecommendation};

    fn report() -> AnalysisReport {
        AnalysisReport::Quick(QuickAnalysis {
            profile_summary: "Based on your quick assessment, you are analytical.".to_string(),
            core_profile: CoreProfile {
                title: "The Methodical Explorer".to_string(),
                traits: vec![ProfileTrait {
                    category: "Primary Strength".to_string(),
                    evidence: "Consistent analytical answers".to_string(),
                    description: "You break problems down before acting".to_string(),
                }],
            },
            skills: vec![SkillRecommendation {
                name: "Data Analysis".to_string(),
                description: "d".to_string(),
                match_score: MatchScore::new(88).unwrap(),
                personality_alignment: "High conscientiousness".to_string(),
                getting_started: Some("Start with spreadsheets".to_string()),
            }],
            career_paths: vec![CareerPath {
                name: "Data Analyst".to_string(),
                description: "d".to_string(),
                match_score: MatchScore::new(85).unwrap(),
                personality_alignment: "Investigative".to_string(),
                skills_needed: "SQL, Python".to_string(),
                daily_realities: None,
                career_progression: None,
            }],
            skills_to_avoid: vec![],
            insights: "Strong analytical core".to_string(),
            next_steps: vec!["Learn SQL".to_string()],
        })
    }

    #[test]
    fn inlines_the_report_contents() {
        let prompt = advisor_system_prompt(&report());
        assert!(prompt.contains("Title: The Methodical Explorer"));
        assert!(prompt.contains("- Data Analysis (88% match)"));
        assert!(prompt.contains("Skills needed: SQL, Python"));
        assert!(prompt.contains("Strong analytical core"));
    }

    #[test]
    fn empty_avoid_list_adds_no_section() {
        let prompt = advisor_system_prompt(&report());
        assert!(!prompt.contains("Skills to Avoid:"));
    }
}
