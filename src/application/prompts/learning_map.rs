//! Prompt for the personalized learning map pipeline.

use crate::domain::recommendation::SkillRecommendation;

/// Renders the learning-map prompt for one selected skill.
///
/// `profile_summary` is the prose profile from the preceding analysis;
/// `personality_data` is whatever structured trait data exists, serialized so
/// the model can reference concrete scores.
pub fn learning_map_prompt(
    skill: &SkillRecommendation,
    profile_summary: &str,
    personality_data: &serde_json::Value,
) -> String {
    let personality_json =
        serde_json::to_string_pretty(personality_data).unwrap_or_else(|_| "{}".to_string());

    format!(
        r#"You are an expert career coach and learning path designer. Based on the user's personality profile and their selected skill, create a comprehensive, personalized learning roadmap.

USER'S PERSONALITY PROFILE:
{profile_summary}

PERSONALITY TEST DATA:
{personality_json}

SELECTED SKILL TO LEARN: {skill_name}
SKILL DESCRIPTION: {skill_description}
PERSONALITY ALIGNMENT: {alignment}

Create a detailed, personalized learning map for this specific person learning {skill_name}. The map should be tailored to their personality traits, learning style, and strengths.

IMPORTANT: Return ONLY valid JSON in this exact format:
{{
  "skillName": "{skill_name}",
  "personalizedApproach": "Brief explanation of how this learning path is customized for their personality",
  "estimatedDuration": "Total estimated time to proficiency",
  "phases": [
    {{
      "title": "Phase name",
      "duration": "Estimated duration",
      "focus": "What this phase focuses on",
      "personalityNote": "How this phase aligns with their personality",
      "color": "from-blue-500 to-blue-600",
      "steps": [
        {{
          "id": "unique_id",
          "title": "Step title",
          "description": "Detailed description of what to do",
          "personalizedTip": "Specific tip based on their personality",
          "difficulty": "Beginner",
          "resources": ["Specific resource 1", "Specific resource 2"],
          "timeEstimate": "2-3 hours"
        }}
      ]
    }}
  ],
  "milestones": [
    {{
      "metric": "projects",
      "value": 3,
      "reward": "Built first portfolio",
      "description": "What this milestone represents"
    }}
  ],
  "personalityBasedTips": [
    "Tip 1 based on their specific traits",
    "Tip 2 based on their learning style"
  ],
  "potentialChallenges": [
    {{
      "challenge": "Specific challenge they might face",
      "solution": "Personalized solution based on their strengths"
    }}
  ]
}}

Guidelines:
1. Make the learning path HIGHLY SPECIFIC to {skill_name} - include actual tools, platforms, and resources
2. Customize every phase based on their personality traits (introvert/extrovert, analytical/creative, etc.)
3. Include 3-4 phases with 3-4 steps each
4. Make milestones realistic and measurable
5. Use varied colors for phases: blue (from-blue-500 to-blue-600), green (from-green-500 to-green-600), purple (from-purple-500 to-purple-600), etc.
6. Provide specific, actionable resources (actual course names, websites, books)
7. The "difficulty" of every step must be exactly one of: Beginner, Intermediate, Advanced
8. Make time estimates realistic and ensure the path progresses from beginner to advanced naturally

Do not include any text outside the JSON structure."#,
        profile_summary = profile_summary,
        personality_json = personality_json,
        skill_name = skill.name,
        skill_description = skill.description,
        alignment = skill.personality_alignment,
    )
}
