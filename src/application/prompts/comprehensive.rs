//! Prompt for the comprehensive (uploaded-test) analysis pipeline.

use std::fmt::Write;

use crate::domain::assessment::{MajorSatisfaction, UploadedTests};

fn satisfaction_phrase(satisfaction: MajorSatisfaction) -> &'static str {
    match satisfaction.level() {
        1 => "Really dislikes/hates their major",
        2 => "Is not happy with their major",
        3 => "Feels neutral about their major",
        4 => "Likes their major",
        _ => "Loves their major",
    }
}

/// Renders the comprehensive-analysis prompt from the uploaded test reports.
///
/// The degree section only appears when a degree is provided; the student's
/// satisfaction with it steers the recommendation direction.
pub fn comprehensive_analysis_prompt(
    uploads: &UploadedTests,
    about_yourself: &str,
    degree: Option<&str>,
    satisfaction: MajorSatisfaction,
) -> String {
    let mut prompt = String::from(
        "You are an expert career counselor and personality analyst. You have access to \
         comprehensive personality test results and need to provide a detailed, interconnected \
         analysis that shows how all the test results work together to create a clear \
         professional profile.\n\n\
         IMPORTANT: Your analysis should be like a professional career assessment report - \
         detailed, interconnected, and with specific examples of how different test results \
         support each other.\n\n\
         Here are the personality test results:\n\n",
    );

    for test in uploads.iter() {
        let _ = writeln!(
            prompt,
            "\n## {}:\n{}",
            test.kind.prompt_heading(),
            test.content.prompt_text(test.kind)
        );
    }

    if let Some(degree) = degree {
        let phrase = satisfaction_phrase(satisfaction);
        let _ = write!(
            prompt,
            "\n## Current Education:\nStudying: {degree}\nSatisfaction with major: {phrase} \
             (Level {level}/5)\n\nIMPORTANT: This student's feelings about their major \
             ({phrase}) should significantly influence your recommendations. If they hate \
             their major, suggest skills that could lead to alternative career paths. If they \
             love it, suggest complementary skills that enhance their current path.\n",
            degree = degree,
            phrase = phrase,
            level = satisfaction.level(),
        );
    }

    if !about_yourself.trim().is_empty() {
        let _ = write!(prompt, "\n## Additional Context:\n{}\n", about_yourself);
    }

    prompt.push_str(
        r#"

CRITICAL INSTRUCTIONS:

1. **Cross-Reference All Tests**: Don't analyze each test in isolation. Show how Big 5 traits connect to RIASEC interests, how CliftonStrengths support career directions, how Multiple Intelligences explain learning preferences, etc.

2. **Create a Unified Profile**: Start with a compelling 2-3 paragraph overview that synthesizes all results into a coherent professional identity.

3. **Use Specific Data Points**: Reference actual percentiles, rankings, and scores from the tests. Don't be generic.

4. **Focus on Hard Skills**: Recommend concrete, learnable skills like vlogging, programming, photography, baking, digital marketing, web design, content creation, data analysis, etc. These should be practical skills they can start learning immediately.

5. **Professional Depth**: MUST provide AT LEAST 3 detailed career recommendations (minimum 3, maximum 7) with comprehensive explanations. Even with limited test data, use available personality patterns and the student's degree to suggest suitable careers. NEVER return empty careerPaths.

6. **Actionable Insights**: Include specific next steps, skill development recommendations, and learning approaches based on their test results.

Provide your analysis in this JSON format:

{
  "profileSummary": "A comprehensive 3-4 paragraph analysis that reads like the introduction to a professional assessment report.",
  "coreProfile": {
    "title": "A catchy professional identity title (e.g., 'The Action-Oriented Leader')",
    "traits": [
      {
        "category": "Highly Energetic & Social",
        "evidence": "Extraversion 93rd percentile",
        "description": "You are energized by interaction and are comfortable taking the lead."
      }
    ]
  },
  "skills": [
    {
      "name": "Practical skill name (e.g., Vlogging, Programming, Photography, Digital Marketing)",
      "description": "Why this specific hard skill fits their personality perfectly",
      "match": 90,
      "category": "Skill category",
      "personalityTraits": "Detailed explanation connecting multiple test results to this concrete skill"
    }
  ],
  "primarySkills": [
    {
      "name": "Strongest skill direction",
      "description": "Why this leads the recommendations",
      "match": 92,
      "personalityAlignment": "Cross-test evidence for this direction"
    }
  ],
  "additionalSkills": [
    {
      "name": "Supplementary skill",
      "description": "A secondary direction worth exploring",
      "match": 78,
      "reasoning": "How it rounds out the primary directions"
    }
  ],
  "careerPaths": [
    {
      "name": "Detailed Career Path Name",
      "description": "Comprehensive description of this career and its appeal",
      "match": 88,
      "personalityAlignment": "Why this career fits, referencing specific test results and scores",
      "skillsNeeded": "Key skills they should develop for this path",
      "dailyRealities": "What their day-to-day work would look like in this role",
      "careerProgression": "How they could advance in this field"
    }
  ],
  "education": [
    {
      "name": "Recommended educational direction",
      "description": "Why this study path fits",
      "match": 80
    }
  ],
  "workEnvironment": [
    {
      "name": "Ideal Environment Type",
      "description": "Detailed description of work environment that suits their personality"
    }
  ],
  "skillsToAvoid": [
    {
      "name": "Skill/Career to Avoid",
      "reason": "Detailed explanation of personality mismatches based on test results",
      "personalityMismatch": "Specific traits that conflict"
    }
  ],
  "insights": "A comprehensive 3-4 paragraph analysis that ties everything together",
  "nextSteps": [
    "Specific, actionable step based on their results",
    "Another concrete next step",
    "Third actionable recommendation"
  ]
}

CRITICAL JSON FORMATTING REQUIREMENTS:
- You MUST respond with ONLY valid JSON - no markdown, no explanations, no additional text
- Start your response with { and end with }
- Use double quotes for all strings
- Do not include trailing commas
- Ensure all brackets and braces are properly closed
- MANDATORY: The "careerPaths" array MUST contain AT LEAST 3 career recommendations

Remember: This should read like a professional career assessment report, not generic advice. Use their actual test scores and create connections between different results. Be specific, detailed, and insightful.

RESPOND WITH ONLY THE JSON OBJECT - NO OTHER TEXT BEFORE OR AFTER."#,
    );

    prompt
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::assessment::{TestKind, UploadedTest};

    fn uploads() -> UploadedTests {
        let mut uploads = UploadedTests::new();
        uploads.insert(UploadedTest::new(
            TestKind::Big5,
            "Openness: 85th percentile, Conscientiousness: 72nd percentile",
        ));
        uploads.insert(UploadedTest::new(TestKind::Riasec, "Your code is IAS"));
        uploads
    }

    #[test]
    fn embeds_each_uploaded_test_under_its_heading() {
        let prompt = comprehensive_analysis_prompt(
            &uploads(),
            "",
            None,
            MajorSatisfaction::default(),
        );
        assert!(prompt.contains("## Big Five Personality Test Results:"));
        assert!(prompt.contains("Openness: 85th percentile"));
        assert!(prompt.contains("## RIASEC Career Interest Test Results:"));
    }

    #[test]
    fn education_section_only_present_with_a_degree() {
        let without = comprehensive_analysis_prompt(
            &uploads(),
            "",
            None,
            MajorSatisfaction::default(),
        );
        assert!(!without.contains("## Current Education:"));

        let with = comprehensive_analysis_prompt(
            &uploads(),
            "",
            Some("Philosophy"),
            MajorSatisfaction::new(2).unwrap(),
        );
        assert!(with.contains("Studying: Philosophy"));
        assert!(with.contains("Is not happy with their major"));
        assert!(with.contains("(Level 2/5)"));
    }

    #[test]
    fn blank_description_adds_no_context_section() {
        let prompt = comprehensive_analysis_prompt(
            &uploads(),
            "   ",
            None,
            MajorSatisfaction::default(),
        );
        assert!(!prompt.contains("## Additional Context:"));
    }
}
