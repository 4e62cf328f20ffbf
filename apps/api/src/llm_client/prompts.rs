// Shared prompt fragments.
// Each service that needs completion calls defines its own prompts.rs alongside it.
// This file contains cross-cutting fragments only.

/// Output rule appended to every evaluation prompt.
pub const JSON_ONLY_RULE: &str = "\
Return ONLY valid JSON matching the format above. \
Do NOT wrap it in markdown code fences. \
Do NOT include any text before or after the JSON object.";
