// Evaluation prompt templates.
// All prompts for the evaluation module are defined here.
// Placeholders: {resume_text}, {job_description}, {role_text}, {json_rule}.

pub const BASIC_SYSTEM: &str = "You are a professional resume analyst.";
pub const ATS_SYSTEM: &str = "You are a strict ATS resume evaluator.";
pub const JD_MATCH_SYSTEM: &str = "You are a strict ATS matcher.";
pub const REWRITE_SYSTEM: &str = "You are a professional resume optimization expert.";

pub const NO_TARGET_ROLE: &str = "No target role provided.";

pub const BASIC_PROMPT_TEMPLATE: &str = r#"You are a resume analysis expert.

Analyze the resume below and report the skills it demonstrates, its strengths,
its weak areas, and concrete suggestions for improvement.

JSON format (return EXACTLY this structure):
{
  "skills_detected": [],
  "strengths": [],
  "weak_areas": [],
  "suggestions": []
}

{json_rule}

Resume:
{resume_text}
"#;

pub const ATS_PROMPT_TEMPLATE: &str = r#"You are an ATS resume evaluator.

Evaluate the resume strictly.

Scoring rules:
- ATS score: integer 0-100
- Role match score: integer 0-100 (null if no role)
- Section scores: integer 0-100
- Be strict and realistic
- Give actionable feedback

JSON format:
{
  "ats_score": 0,
  "role_match_score": null,
  "detected_skills": [],
  "missing_skills": [],
  "strengths": [],
  "critical_improvements": [],
  "section_feedback": [
    {
      "section": "Experience",
      "score": 0,
      "comments": []
    }
  ],
  "final_verdict": ""
}

{json_rule}

Resume:
{resume_text}

{role_text}
"#;

pub const JD_MATCH_PROMPT_TEMPLATE: &str = r#"You are an ATS system comparing a resume against a job description.

Evaluate STRICTLY.

Scoring rules:
- Match score: integer 0-100
- Keyword coverage percentage: integer 0-100
- Be realistic (no inflated scores)
- Focus on skills, experience, and keywords

JSON format:
{
  "match_score": 0,
  "matched_skills": [],
  "missing_skills": [],
  "experience_gaps": [],
  "keyword_coverage_percentage": 0,
  "improvement_suggestions": [],
  "final_verdict": ""
}

{json_rule}

Resume:
{resume_text}

Job Description:
{job_description}
"#;

pub const REWRITE_PROMPT_TEMPLATE: &str = r#"You are an ATS optimization and resume rewriting expert.

TASK:
1. Identify weak or generic resume bullets.
2. Rewrite them to strongly match the job description.
3. Assign an impact score (integer 0-100) to each rewritten bullet.

Impact scoring criteria:
- Job description keyword relevance (40%)
- Strong action verbs (20%)
- Quantified impact / metrics (20%)
- Technical specificity (20%)

JSON format:
{
  "rewritten_bullets": [
    {
      "original": "",
      "rewritten": "",
      "reason": "",
      "impact_score": 0
    }
  ]
}

{json_rule}

RESUME:
{resume_text}

JOB DESCRIPTION:
{job_description}
"#;
