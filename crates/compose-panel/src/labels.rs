use crate::options::LabelOptions;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelKind {
    Title,
    Action,
}

/// Picks the create or update template for `kind` and substitutes `name` for its first `%`.
pub fn normalize(name: &str, creating: bool, kind: LabelKind, labels: &LabelOptions) -> String {
    let template = match (kind, creating) {
        (LabelKind::Title, true) => &labels.create_title,
        (LabelKind::Title, false) => &labels.update_title,
        (LabelKind::Action, true) => &labels.create_action,
        (LabelKind::Action, false) => &labels.update_action,
    };
    template.replacen('%', name, 1)
}

#[cfg(test)]
#[path = "tests/labels_tests.rs"]
mod tests;
