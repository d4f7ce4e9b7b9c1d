//! GitHub token detection.
//!
//! Lookup order:
//! 1. Explicit value (`--token`)
//! 2. `INPUT_TOKEN` (the action's `token` input)
//! 3. `token` environment variable
//! 4. `GITHUB_TOKEN` environment variable

use std::env;

/// Environment variables consulted for a token, in priority order.
pub const TOKEN_ENV_VARS: &[&str] = &["INPUT_TOKEN", "token", "GITHUB_TOKEN"];

/// Resolve the token used to post comments. Empty values are skipped.
pub fn resolve_token(explicit: Option<&str>) -> Option<String> {
    if let Some(token) = explicit {
        if !token.is_empty() {
            return Some(token.to_string());
        }
    }

    TOKEN_ENV_VARS.iter().find_map(|name| match env::var(name) {
        Ok(token) if !token.is_empty() => Some(token),
        _ => None,
    })
}
