//! Instruction template selection.
//!
//! The instruction block of a converted agent is picked from the agent's name
//! with an ordered substring rule table. The first rule whose needle occurs in
//! the lower-cased name wins; names matching nothing get the generic task steps.

use super::error::{ConvertError, ConvertResult};
use super::templates::get_template;

/// The instruction template families.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstructionKind {
    Development,
    Testing,
    Security,
    Task,
}

/// Name substring rules, checked in order.
pub const INSTRUCTION_RULES: &[(&str, InstructionKind)] = &[
    ("go", InstructionKind::Development),
    ("test", InstructionKind::Testing),
    ("security", InstructionKind::Security),
];

impl InstructionKind {
    /// Selects the template family for an agent name.
    pub fn for_name(name: &str) -> Self {
        let name = name.to_lowercase();
        INSTRUCTION_RULES
            .iter()
            .find(|(needle, _)| name.contains(*needle))
            .map_or(InstructionKind::Task, |(_, kind)| *kind)
    }

    /// Path of this template inside the embedded `templates/` folder.
    pub fn template_path(self) -> &'static str {
        match self {
            InstructionKind::Development => "instructions/development.md",
            InstructionKind::Testing => "instructions/testing.md",
            InstructionKind::Security => "instructions/security.md",
            InstructionKind::Task => "instructions/task.md",
        }
    }

    /// Loads the numbered steps for this template family.
    pub fn steps(self) -> ConvertResult<String> {
        let path = self.template_path();
        get_template(path).ok_or_else(|| ConvertError::TemplateNotFound(path.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_name_matches_each_rule() {
        assert_eq!(InstructionKind::for_name("go-developer"), InstructionKind::Development);
        assert_eq!(InstructionKind::for_name("unit-tester"), InstructionKind::Testing);
        assert_eq!(InstructionKind::for_name("security-auditor"), InstructionKind::Security);
        assert_eq!(InstructionKind::for_name("doc-writer"), InstructionKind::Task);
    }

    #[test]
    fn test_for_name_is_case_insensitive() {
        assert_eq!(InstructionKind::for_name("GoLang-Expert"), InstructionKind::Development);
        assert_eq!(InstructionKind::for_name("SECURITY"), InstructionKind::Security);
    }

    #[test]
    fn test_for_name_priority_order() {
        // "go" outranks "test" and "security"
        assert_eq!(InstructionKind::for_name("go-test-runner"), InstructionKind::Development);
        assert_eq!(InstructionKind::for_name("security-tester"), InstructionKind::Testing);
        // Plain substring match: "category" contains "go"
        assert_eq!(InstructionKind::for_name("category-manager"), InstructionKind::Development);
    }

    #[test]
    fn test_sec_prefix_is_not_security() {
        assert_eq!(InstructionKind::for_name("sec-auditor"), InstructionKind::Task);
    }

    #[test]
    fn test_every_kind_has_embedded_steps() {
        for kind in [
            InstructionKind::Development,
            InstructionKind::Testing,
            InstructionKind::Security,
            InstructionKind::Task,
        ] {
            let steps = kind.steps().expect("template should be embedded");
            assert!(steps.starts_with("1. **"), "{kind:?} steps should be numbered");
        }
    }
}
