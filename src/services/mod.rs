mod embedded_templates;
mod npm_command;
mod project_filesystem;

pub use embedded_templates::EmbeddedTemplateStore;
pub use npm_command::NpmCommandInstaller;
pub use project_filesystem::FilesystemProjectStore;
