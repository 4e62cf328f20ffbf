//! Prompt Builder — turns resume text plus optional JD / target role into a
//! flavor-specific instruction. Pure string construction, no failure modes.

use crate::evaluation::prompts::{
    ATS_PROMPT_TEMPLATE, ATS_SYSTEM, BASIC_PROMPT_TEMPLATE, BASIC_SYSTEM,
    JD_MATCH_PROMPT_TEMPLATE, JD_MATCH_SYSTEM, NO_TARGET_ROLE, REWRITE_PROMPT_TEMPLATE,
    REWRITE_SYSTEM,
};
use crate::evaluation::Flavor;
use crate::llm_client::prompts::JSON_ONLY_RULE;
use crate::llm_client::CompletionRequest;

/// Inputs shared by every flavor. Text is embedded verbatim.
#[derive(Debug, Clone, Copy, Default)]
pub struct PromptInput<'a> {
    pub resume_text: &'a str,
    pub job_description: Option<&'a str>,
    pub target_role: Option<&'a str>,
}

/// A fully assembled completion exchange for one flavor.
#[derive(Debug, Clone, PartialEq)]
pub struct Prompt {
    pub flavor: Flavor,
    pub system: &'static str,
    pub user: String,
    pub temperature: f32,
}

impl Prompt {
    pub fn as_request(&self) -> CompletionRequest<'_> {
        CompletionRequest {
            system: self.system,
            user: &self.user,
            temperature: self.temperature,
        }
    }
}

pub fn build_prompt(flavor: Flavor, input: &PromptInput<'_>) -> Prompt {
    let job_description = input.job_description.unwrap_or_default();

    let (system, template, temperature) = match flavor {
        Flavor::Basic => (BASIC_SYSTEM, BASIC_PROMPT_TEMPLATE, 0.2),
        Flavor::Ats => (ATS_SYSTEM, ATS_PROMPT_TEMPLATE, 0.1),
        Flavor::JdMatch => (JD_MATCH_SYSTEM, JD_MATCH_PROMPT_TEMPLATE, 0.1),
        Flavor::Rewrite => (REWRITE_SYSTEM, REWRITE_PROMPT_TEMPLATE, 0.2),
    };

    let role_text = match input.target_role {
        Some(role) => format!("For the target role: {role}"),
        None => NO_TARGET_ROLE.to_string(),
    };

    let user = render(
        template,
        &[
            ("json_rule", JSON_ONLY_RULE),
            ("resume_text", input.resume_text),
            ("job_description", job_description),
            ("role_text", role_text.as_str()),
        ],
    );

    Prompt {
        flavor,
        system,
        user,
        temperature,
    }
}

/// Single-pass `{name}` substitution. Substituted text is never rescanned, so
/// user content containing placeholder-like tokens passes through untouched.
/// Braces that do not open a known placeholder are copied literally.
fn render(template: &str, vars: &[(&str, &str)]) -> String {
    let extra: usize = vars.iter().map(|(_, v)| v.len()).sum();
    let mut out = String::with_capacity(template.len() + extra);
    let mut rest = template;

    while let Some(start) = rest.find('{') {
        out.push_str(&rest[..start]);
        let tail = &rest[start..];
        let hit = vars.iter().find(|(key, _)| {
            tail[1..].starts_with(key) && tail[1 + key.len()..].starts_with('}')
        });
        match hit {
            Some((key, value)) => {
                out.push_str(value);
                rest = &tail[key.len() + 2..];
            }
            None => {
                out.push('{');
                rest = &tail[1..];
            }
        }
    }
    out.push_str(rest);
    out
}
