use serde::{Deserialize, Serialize};

/// Basic resume analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BasicAnalysis {
    pub skills_detected: Vec<String>,
    pub strengths: Vec<String>,
    pub weak_areas: Vec<String>,
    pub suggestions: Vec<String>,
}

/// ATS scoring, optionally against a target role.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AtsAnalysis {
    pub ats_score: u32, // 0 – 100
    /// Present only when a target role was supplied. Serialized as `null` otherwise.
    #[serde(default)]
    pub role_match_score: Option<u32>,
    pub detected_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    pub strengths: Vec<String>,
    pub critical_improvements: Vec<String>,
    pub section_feedback: Vec<SectionFeedback>,
    pub final_verdict: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionFeedback {
    pub section: String,
    pub score: u32, // 0 – 100
    pub comments: Vec<String>,
}

/// Resume matched against a job description.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JdMatchAnalysis {
    pub match_score: u32, // 0 – 100
    pub matched_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    pub experience_gaps: Vec<String>,
    pub keyword_coverage_percentage: u32, // 0 – 100
    pub improvement_suggestions: Vec<String>,
    pub final_verdict: String,
}

/// Rewritten bullets, highest impact first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RewriteResponse {
    pub rewritten_bullets: Vec<RewrittenBullet>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RewrittenBullet {
    pub original: String,
    pub rewritten: String,
    pub reason: String,
    pub impact_score: u32, // 0 – 100
}
