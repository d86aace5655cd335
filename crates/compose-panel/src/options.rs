/// Owner configuration shared by both variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComposeOptions {
    /// Clear the payload when a panel closes.
    pub detach_on_close: bool,
}

impl Default for ComposeOptions {
    fn default() -> Self {
        Self {
            detach_on_close: true,
        }
    }
}

/// Label templates for a consumer. The first `%` is replaced with the consumer's name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelOptions {
    pub create_title: String,
    pub update_title: String,
    pub create_action: String,
    pub update_action: String,
}

impl LabelOptions {
    pub fn create_title(mut self, template: impl Into<String>) -> Self {
        self.create_title = template.into();
        self
    }

    pub fn update_title(mut self, template: impl Into<String>) -> Self {
        self.update_title = template.into();
        self
    }

    pub fn create_action(mut self, template: impl Into<String>) -> Self {
        self.create_action = template.into();
        self
    }

    pub fn update_action(mut self, template: impl Into<String>) -> Self {
        self.update_action = template.into();
        self
    }
}

impl Default for LabelOptions {
    fn default() -> Self {
        Self {
            create_title: "Create %".to_string(),
            update_title: "Edit %".to_string(),
            create_action: "Save".to_string(),
            update_action: "Save changes".to_string(),
        }
    }
}
