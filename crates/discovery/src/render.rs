//! Rendering of discovery results into the text block printed for the host.

use crate::types::DiscoveryResult;

/// Renders a discovery result into the context text to print, if any.
///
/// Returns `None` when there is nothing to inject: an empty execution order
/// means no skills matched, which is an ordinary outcome rather than an
/// error. A failed lookup renders a short warning so the user knows skills
/// were skipped.
pub fn render_skill_context(result: &DiscoveryResult) -> Option<String> {
    if let Some(error) = &result.error {
        return Some(format!(
            "\n⚠️ Skill discovery unavailable: {error}\nProceeding without organizational skills.\n"
        ));
    }

    if result.execution_order.is_empty() {
        return None;
    }

    let banner = "=".repeat(60);
    let rule = "-".repeat(40);

    let mut out = String::new();
    out.push_str(&format!("\n{banner}\n"));
    out.push_str("🔧 ORGANIZATIONAL SKILLS LOADED\n");
    out.push_str(&format!("{banner}\n"));
    out.push_str(&format!(
        "\nMatched: {} → {}\n",
        result.route_type.as_deref().unwrap_or("unknown"),
        result.matched.as_deref().unwrap_or("unknown")
    ));
    out.push_str(&format!(
        "Skills to apply (in order): {}\n",
        result.execution_order.join(" → ")
    ));
    out.push_str("\n⚠️ YOU MUST FOLLOW THESE SKILL INSTRUCTIONS ⚠️\n");

    for skill in &result.skill_definitions {
        let marker = if skill.is_primary {
            "📌 PRIMARY"
        } else {
            "📎 DEPENDENCY"
        };
        out.push_str(&format!("\n### {} [{marker}]\n", skill.name));
        out.push_str(skill.content.as_deref().unwrap_or("(content unavailable)"));
        out.push_str(&format!("\n\n{rule}\n"));
    }

    out.push_str(&format!("\n{banner}\n"));
    out.push_str("END OF SKILL CONTEXT - Follow instructions above\n");
    out.push_str(&format!("{banner}\n"));

    Some(out)
}
