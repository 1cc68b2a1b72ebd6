use minijinja::{Environment, UndefinedBehavior};

use crate::domain::{AppError, AppFlavor};
use crate::ports::{TemplateStore, TemplateVars};

static WEBPACK_JAVASCRIPT: &str = include_str!("../templates/webpack.javascript.config.js");
static WEBPACK_TYPESCRIPT: &str = include_str!("../templates/webpack.typescript.config.js");
static WEBPACK_ANGULAR: &str = include_str!("../templates/webpack.angular.config.js");
static TNS_TSCONFIG: &str = include_str!("../templates/tsconfig.tns.json");

/// Template store backed by files embedded at compile time.
#[derive(Debug, Clone, Default)]
pub struct EmbeddedTemplateStore;

impl EmbeddedTemplateStore {
    pub fn new() -> Self {
        Self
    }

    fn render(&self, name: &str, source: &str, vars: &TemplateVars) -> Result<String, AppError> {
        let mut env = Environment::new();
        env.set_keep_trailing_newline(true);
        env.set_undefined_behavior(UndefinedBehavior::Strict);

        env.render_str(source, vars).map_err(|err| AppError::TemplateRender {
            template: name.to_string(),
            details: err.to_string(),
        })
    }
}

impl TemplateStore for EmbeddedTemplateStore {
    fn webpack_config(&self, flavor: AppFlavor, vars: &TemplateVars) -> Result<String, AppError> {
        let source = match flavor {
            AppFlavor::JavaScript => WEBPACK_JAVASCRIPT,
            AppFlavor::TypeScript => WEBPACK_TYPESCRIPT,
            AppFlavor::Angular => WEBPACK_ANGULAR,
        };
        self.render("webpack.config.js", source, vars)
    }

    fn tns_tsconfig(&self, vars: &TemplateVars) -> Result<String, AppError> {
        self.render("tsconfig.tns.json", TNS_TSCONFIG, vars)
    }
}
