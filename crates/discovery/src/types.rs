use serde::Deserialize;

/// A single skill definition returned by the discovery service.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SkillDefinition {
    /// Skill name as routed by the service.
    #[serde(default)]
    pub name: String,
    /// Whether this skill matched the query directly rather than being
    /// pulled in as a dependency of another skill.
    #[serde(default)]
    pub is_primary: bool,
    /// Instructional text to surface to the assistant.
    #[serde(default)]
    pub content: Option<String>,
}

/// Response shape consumed from `POST {base}/discover`.
///
/// Every field is defaulted so partial responses still parse; the service is
/// free to add fields without breaking the hook.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DiscoveryResult {
    /// Failure message when the lookup could not be served.
    #[serde(default)]
    pub error: Option<String>,
    /// Skill names in the order they should be applied.
    #[serde(default)]
    pub execution_order: Vec<String>,
    /// Route classification reported by the service.
    #[serde(default)]
    pub route_type: Option<String>,
    /// Route or label that matched the query.
    #[serde(default)]
    pub matched: Option<String>,
    /// Full skill definitions, in execution order.
    #[serde(default)]
    pub skill_definitions: Vec<SkillDefinition>,
    /// Legacy skill-name list; the service sends an empty one alongside errors.
    #[serde(default)]
    pub skills: Vec<String>,
}

impl DiscoveryResult {
    /// Builds the sentinel result used when the service cannot be reached.
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            error: Some(message.into()),
            ..Self::default()
        }
    }
}
