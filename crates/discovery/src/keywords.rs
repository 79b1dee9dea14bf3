//! Keyword heuristic that gates the network lookup.

/// Keywords indicating the prompt asks for action rather than information.
const ACTION_KEYWORDS: &[&str] = &[
    "create",
    "build",
    "deploy",
    "set up",
    "configure",
    "implement",
    "make",
    "generate",
    "scaffold",
    "initialize",
    "provision",
    "migrate",
    "upgrade",
    "install",
    "establish",
];

/// Returns true when the prompt warrants a skill discovery lookup.
///
/// Matching is case-insensitive and substring-based, so a keyword embedded in
/// a longer word still matches.
pub fn should_check(prompt: &str) -> bool {
    let prompt = prompt.to_lowercase();
    ACTION_KEYWORDS.iter().any(|keyword| prompt.contains(keyword))
}
