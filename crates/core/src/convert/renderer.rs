//! Markdown rendering of agent definitions.

use super::error::ConvertResult;
use super::instructions::InstructionKind;
use ac_protocol::AgentSpec;
use std::fmt;

/// Purpose sentence used when an agent has neither use cases nor a description.
pub const PURPOSE_PLACEHOLDER: &str = "Agent purpose not specified.";

/// The Markdown document produced for one agent definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedDocument {
    content: String,
    instructions: InstructionKind,
}

impl RenderedDocument {
    pub fn as_str(&self) -> &str {
        &self.content
    }

    pub fn into_string(self) -> String {
        self.content
    }

    /// The instruction template family chosen for this document.
    pub fn instructions(&self) -> InstructionKind {
        self.instructions
    }
}

impl fmt::Display for RenderedDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.content)
    }
}

/// Converts an agent definition into a Markdown document with front matter.
///
/// The output is a pure function of `spec`: converting the same definition
/// twice yields byte-identical documents.
///
/// # Errors
///
/// Returns `ConvertError::TemplateNotFound` if the selected instruction
/// template is missing from the embedded assets.
pub fn convert(spec: &AgentSpec) -> ConvertResult<RenderedDocument> {
    let instructions = InstructionKind::for_name(spec.display_name());

    let mut content = String::new();
    render_header(&mut content, spec);
    render_purpose(&mut content, spec);

    content.push_str("## Instructions\n\n");
    content.push_str("When invoked, you must follow these steps:\n\n");
    content.push_str(&instructions.steps()?);

    if spec.has_metadata() {
        render_metadata(&mut content, spec);
    }

    Ok(RenderedDocument {
        content,
        instructions,
    })
}

/// Front matter: `name`, `description` and `tools` always, `color` if set.
fn render_header(out: &mut String, spec: &AgentSpec) {
    let tools = spec
        .tools
        .as_deref()
        .map(|tools| tools.join(", "))
        .unwrap_or_default();

    out.push_str("---\n");
    out.push_str(&format!("name: {}\n", spec.display_name()));
    out.push_str(&format!("description: {}\n", spec.display_description()));
    out.push_str(&format!("tools: {tools}\n"));
    if let Some(color) = &spec.color {
        out.push_str(&format!("color: {color}\n"));
    }
    out.push_str("---\n\n");
}

fn render_purpose(out: &mut String, spec: &AgentSpec) {
    out.push_str("# Purpose\n\n");

    match &spec.use_cases {
        Some(use_cases) => {
            out.push_str(&format!("{}\n\n", spec.display_description()));
            out.push_str("## Use Cases\n\n");
            for use_case in use_cases {
                out.push_str(&format!("- {use_case}\n"));
            }
            out.push('\n');
        }
        None => {
            let purpose = match spec.display_description() {
                "" => PURPOSE_PLACEHOLDER,
                description => description,
            };
            out.push_str(&format!("{purpose}\n\n"));
        }
    }
}

fn render_metadata(out: &mut String, spec: &AgentSpec) {
    out.push_str("\n## Metadata\n\n");

    if let Some(version) = &spec.version {
        out.push_str(&format!("- **Version**: {version}\n"));
    }
    if let Some(author) = &spec.author {
        out.push_str(&format!("- **Author**: {author}\n"));
    }
    if let Some(created) = &spec.created {
        out.push_str(&format!("- **Created**: {created}\n"));
    }
    if let Some(tags) = &spec.tags {
        out.push_str(&format!("- **Tags**: {}\n", tags.join(", ")));
    }
    if let Some(proactive) = &spec.proactive {
        out.push_str(&format!("- **Proactive**: {proactive}\n"));
    }
}
