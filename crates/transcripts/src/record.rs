//! Permissive model of the transcript lines this tool inspects.
//!
//! Transcripts are append-only logs that may end in a truncated line and may
//! carry record shapes from newer host versions. Every field here is
//! optional or defaulted: a line is only rejected when its JSON does not
//! parse or a present field has an unusable shape, and rejection is always
//! recoverable (the line is skipped, not the file).

use serde::Deserialize;
use serde_json::Value;

/// One parsed transcript line.
#[derive(Debug, Default, Deserialize)]
pub struct TranscriptRecord {
    /// Record discriminator; only `assistant` and `user` records are inspected.
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    /// Message payload carrying content entries.
    #[serde(default)]
    pub message: Option<MessageBody>,
    /// Host-attached result metadata. Kept loose because its schema varies
    /// by tool; see [`TranscriptRecord::result_duration_ms`].
    #[serde(rename = "toolUseResult", default)]
    pub tool_use_result: Option<Value>,
}

/// Message body of an assistant or user record.
#[derive(Debug, Default, Deserialize)]
pub struct MessageBody {
    /// Message content, plain text or structured entries.
    #[serde(default)]
    pub content: MessageContent,
}

/// Message content is either plain text or a list of structured entries.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum MessageContent {
    /// Plain-text message.
    Text(String),
    /// Structured entries: tool invocations, tool results, text blocks.
    Entries(Vec<ContentEntry>),
}

impl Default for MessageContent {
    fn default() -> Self {
        MessageContent::Entries(Vec::new())
    }
}

impl MessageContent {
    /// Structured entries, or an empty slice for plain-text content.
    pub fn entries(&self) -> &[ContentEntry] {
        match self {
            MessageContent::Text(_) => &[],
            MessageContent::Entries(entries) => entries,
        }
    }
}

/// One entry of a structured content list.
#[derive(Debug, Default, Deserialize)]
pub struct ContentEntry {
    /// Entry discriminator (`tool_use`, `tool_result`, `text`, ...).
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    /// Tool-use identifier on invocation entries.
    #[serde(default)]
    pub id: Option<String>,
    /// Tool name on invocation entries.
    #[serde(default)]
    pub name: Option<String>,
    /// Tool input on invocation entries.
    #[serde(default)]
    pub input: Option<TaskInput>,
    /// Identifier of the invocation a result entry answers.
    #[serde(default)]
    pub tool_use_id: Option<String>,
}

/// Input object of a `Task` tool invocation.
#[derive(Debug, Default, Deserialize)]
pub struct TaskInput {
    /// Sub-agent type label the task was routed to.
    #[serde(default)]
    pub subagent_type: Option<String>,
}

impl ContentEntry {
    /// Returns `(id, agent_type)` when this entry launches a sub-agent task.
    ///
    /// Requires a `tool_use` entry named exactly `Task` with an identifier
    /// and a non-empty `subagent_type`.
    pub fn task_invocation(&self) -> Option<(&str, &str)> {
        if self.kind.as_deref() != Some("tool_use") || self.name.as_deref() != Some("Task") {
            return None;
        }
        let id = self.id.as_deref()?;
        let agent_type = self.input.as_ref()?.subagent_type.as_deref()?;
        if agent_type.is_empty() {
            return None;
        }
        Some((id, agent_type))
    }

    /// Returns the referenced invocation id when this entry is a tool result.
    pub fn result_id(&self) -> Option<&str> {
        if self.kind.as_deref() != Some("tool_result") {
            return None;
        }
        self.tool_use_id.as_deref()
    }
}

impl TranscriptRecord {
    /// Content entries of this record's message, if any.
    pub fn content_entries(&self) -> &[ContentEntry] {
        self.message
            .as_ref()
            .map(|body| body.content.entries())
            .unwrap_or(&[])
    }

    /// Duration reported alongside a tool result, in milliseconds.
    ///
    /// Defaults to 0 when the field is absent or not numeric, so a malformed
    /// result still consumes its pending invocation.
    pub fn result_duration_ms(&self) -> u64 {
        self.tool_use_result
            .as_ref()
            .and_then(|value| value.get("totalDurationMs"))
            .and_then(value_as_ms)
            .unwrap_or(0)
    }
}

fn value_as_ms(value: &Value) -> Option<u64> {
    value
        .as_u64()
        .or_else(|| value.as_f64().map(|v| v as u64))
}
