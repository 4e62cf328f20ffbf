// Resume evaluation: prompt building, the completion round trip, and
// validation of the model's JSON into typed results.
// All completion calls go through llm_client; no direct provider calls here.

use std::fmt;

pub mod handlers;
pub mod models;
pub mod pipeline;
pub mod prompt_builder;
pub mod prompts;
pub mod validator;

/// The four evaluation flavors, one per endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flavor {
    Basic,
    Ats,
    JdMatch,
    Rewrite,
}

impl Flavor {
    #[cfg(test)]
    pub const ALL: [Flavor; 4] = [Flavor::Basic, Flavor::Ats, Flavor::JdMatch, Flavor::Rewrite];

    pub fn as_str(self) -> &'static str {
        match self {
            Flavor::Basic => "basic",
            Flavor::Ats => "ats",
            Flavor::JdMatch => "jd_match",
            Flavor::Rewrite => "rewrite",
        }
    }
}

impl fmt::Display for Flavor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
