//! Prompt for the quick-assessment analysis pipeline.

use std::fmt::Write;

use crate::domain::assessment::QuickAssessmentAnswers;

/// Renders the quick-analysis prompt from the completed answer set.
///
/// The degree only appears when the student asked for their major to be
/// considered; otherwise the prompt steers toward alternative paths.
pub fn quick_analysis_prompt(answers: &QuickAssessmentAnswers) -> String {
    let degree = answers.degree_for_prompt().unwrap_or("Not specified");
    let major_guidance = if answers.include_major {
        "Yes - suggest complementary skills"
    } else {
        "No - suggest alternative paths"
    };

    format!(
        r#"You are an expert career counselor analyzing a quick personality assessment. Based on the user's responses, provide personalized skill and career recommendations.

USER PROFILE:
- Undergraduate Degree: {degree}
- Major Satisfaction: {satisfaction}
- Include Major in Recommendations: {major_guidance}
- About Them: {about}

PERSONALITY ASSESSMENT RESULTS:

Work Style & Preferences:
- Work Style: {work_style}
- Problem Solving: {problem_solving}
- Social Energy: {social_energy}
- Learning Preference: {learning_preference}
- Work Environment: {work_environment}

Interests & Strengths:
- Free Time Activities: {free_time}
- Exciting Projects: {exciting_project}
- Natural Strengths: {natural_strength}
- Activities to Avoid: {avoid_activity}
- Future Vision: {future_vision}

Values & Motivations:
- Primary Motivation: {motivation}
- Stress Response: {stress_coping}
- Team Role: {team_role}
- Decision Making: {decision_making}
- Work Pace: {work_pace}

DERIVED PERSONALITY TRAITS:
{derived_traits}

Based on this quick assessment, provide recommendations that are:
1. Specific and actionable
2. Aligned with their personality and interests
3. Complementary to their undergraduate degree
4. Realistic to learn within 6-12 months

Provide your analysis in this JSON format:

{{
  "profileSummary": "A 2-3 paragraph summary that captures their personality, strengths, and potential. Start with 'Based on your quick assessment...' and make it personal and insightful.",
  "coreProfile": {{
    "title": "A catchy 3-4 word description (e.g., 'The Creative Problem-Solver')",
    "traits": [
      {{
        "category": "Primary Strength",
        "evidence": "Based on your answers",
        "description": "What this means for your career"
      }}
    ]
  }},
  "skills": [
    {{
      "name": "Specific skill name (e.g., UI/UX Design, Data Analysis, Content Creation)",
      "description": "Why this skill matches their personality and interests",
      "match": 85,
      "personalityAlignment": "How their specific traits make them suited for this",
      "gettingStarted": "Concrete first steps to begin learning"
    }}
  ],
  "careerPaths": [
    {{
      "name": "Specific Career Title",
      "description": "What this career involves",
      "match": 85,
      "personalityAlignment": "Why this fits their personality profile",
      "skillsNeeded": "Key skills to develop for this path"
    }}
  ],
  "skillsToAvoid": [
    {{
      "name": "Skill that doesn't match",
      "reason": "Why this might not be a good fit",
      "personalityMismatch": "Specific traits that conflict"
    }}
  ],
  "insights": "Key insights about their personality and potential",
  "nextSteps": [
    "Specific action item 1",
    "Specific action item 2",
    "Specific action item 3"
  ]
}}

Remember: This is a quick assessment, so focus on 3-5 strong skill recommendations and 3-4 career paths. Be encouraging but realistic."#,
        degree = degree,
        satisfaction = answers.major_satisfaction.describe(),
        major_guidance = major_guidance,
        about = answers.about_yourself,
        work_style = answers.work_style.describe(),
        problem_solving = answers.problem_solving.describe(),
        social_energy = answers.social_energy.describe(),
        learning_preference = answers.learning_preference.describe(),
        work_environment = answers.work_environment.describe(),
        free_time = answers.free_time.describe(),
        exciting_project = answers.exciting_project.describe(),
        natural_strength = answers.natural_strength.describe(),
        avoid_activity = answers.avoid_activity.describe(),
        future_vision = answers.future_vision.describe(),
        motivation = answers.motivation.describe(),
        stress_coping = answers.stress_coping.describe(),
        team_role = answers.team_role.describe(),
        decision_making = answers.decision_making.describe(),
        work_pace = answers.work_pace.describe(),
        derived_traits = derived_traits_summary(answers),
    )
}

/// Prose trait lines inferred directly from selected answers.
fn derived_traits_summary(answers: &QuickAssessmentAnswers) -> String {
    use crate::domain::assessment::{
        AvoidActivity, ExcitingProject, NaturalStrength, ProblemSolving, SocialEnergy,
        StressCoping, TeamRole, WorkEnvironment, WorkPace, WorkStyle,
    };

    let mut traits = String::new();

    if answers.social_energy == SocialEnergy::Energized || answers.work_style == WorkStyle::LargeTeam
    {
        let _ = writeln!(
            traits,
            "High Extraversion: Energized by social interaction, enjoys collaborative environments"
        );
    } else if answers.social_energy == SocialEnergy::Exhausted
        || answers.work_style == WorkStyle::Independent
    {
        let _ = writeln!(
            traits,
            "High Introversion: Prefers independent work, needs quiet time to recharge"
        );
    } else {
        let _ = writeln!(
            traits,
            "Moderate Extraversion: Balanced social needs, adaptable to different settings"
        );
    }

    if answers.problem_solving == ProblemSolving::Creative
        || answers.exciting_project == ExcitingProject::Innovation
    {
        let _ = writeln!(
            traits,
            "High Openness: Creative, innovative, enjoys new experiences"
        );
    } else if answers.work_environment == WorkEnvironment::Structured {
        let _ = writeln!(
            traits,
            "Lower Openness: Prefers proven methods and structured approaches"
        );
    }

    if answers.problem_solving == ProblemSolving::Analyze
        || answers.natural_strength == NaturalStrength::Planning
    {
        let _ = writeln!(
            traits,
            "High Conscientiousness: Organized, detail-oriented, systematic"
        );
    } else if answers.work_pace == WorkPace::Bursts
        || answers.avoid_activity == AvoidActivity::Detail
    {
        let _ = writeln!(
            traits,
            "Moderate Conscientiousness: Flexible approach, big-picture focused"
        );
    }

    if answers.natural_strength == NaturalStrength::Emotional
        || answers.team_role == TeamRole::Mediator
    {
        let _ = writeln!(
            traits,
            "High Agreeableness: Empathetic, collaborative, people-focused"
        );
    } else if answers.avoid_activity == AvoidActivity::Conflict {
        let _ = writeln!(
            traits,
            "Moderate to High Agreeableness: Harmony-seeking, diplomatic"
        );
    }

    if answers.stress_coping == StressCoping::Thrive {
        let _ = writeln!(traits, "High Stress Tolerance: Performs well under pressure");
    } else if answers.stress_coping == StressCoping::Struggle {
        let _ = writeln!(
            traits,
            "Lower Stress Tolerance: Needs supportive, low-pressure environment"
        );
    }

    traits.trim_end().to_string()
}
