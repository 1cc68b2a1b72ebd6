use crate::ports::{ProjectStore, TemplateStore};

/// Application context holding dependencies for command execution.
pub struct AppContext<P: ProjectStore, T: TemplateStore> {
    project: P,
    templates: T,
}

impl<P: ProjectStore, T: TemplateStore> AppContext<P, T> {
    /// Create a new application context.
    pub fn new(project: P, templates: T) -> Self {
        Self { project, templates }
    }

    /// Get a reference to the project store.
    pub fn project(&self) -> &P {
        &self.project
    }

    /// Get a reference to the config template store.
    pub fn templates(&self) -> &T {
        &self.templates
    }
}
