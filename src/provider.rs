//! Model-name to provider mapping.

use serde::{Deserialize, Serialize};

use crate::diagnostics::Diagnostics;

/// The model-serving API family a model identifier belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Provider {
    OpenAi,
    Anthropic,
    Google,
    Groq,
    DeepSeek,
}

/// Family keywords checked in priority order; first match wins.
const FAMILY_RULES: &[(&[&str], Provider)] = &[
    (&["gpt"], Provider::OpenAi),
    (&["claude"], Provider::Anthropic),
    (&["gemini", "bison"], Provider::Google),
    (&["llama", "mixtral"], Provider::Groq),
    (&["deepseek"], Provider::DeepSeek),
];

impl Provider {
    /// Resolve a model identifier to its provider by case-insensitive
    /// substring match. Unknown families fall back to [`Provider::OpenAi`]
    /// with a warning; this never fails.
    pub fn for_model(model: &str, diagnostics: &dyn Diagnostics) -> Self {
        let lowered = model.to_lowercase();
        for (keywords, provider) in FAMILY_RULES {
            if keywords.iter().any(|kw| lowered.contains(kw)) {
                return *provider;
            }
        }
        diagnostics.warning(&format!(
            "unknown model `{model}`, defaulting to OpenAI provider"
        ));
        Provider::OpenAi
    }
}
