mod icons;

use std::collections::HashMap;
use std::path::Path;

use serde_json::{Map, Value};
use tera::Tera;

use crate::error::{Error, Result};

pub use icons::contact_icons;

const DEFAULT_TEMPLATE: &str = "modern_resume";

/// Renders a canonical record through a named HTML template. Template files
/// live under a directory as `<name>.html`; friendly aliases map onto them.
pub struct TemplateEngine {
    tera: Tera,
    aliases: HashMap<&'static str, &'static str>,
}

impl TemplateEngine {
    pub fn new(template_dir: &Path) -> Result<Self> {
        let glob = template_dir.join("*.html");
        let tera = Tera::new(&glob.to_string_lossy())?;

        let aliases = HashMap::from([
            ("modern", "modern_resume"),
            ("classic", "classic_resume"),
            ("creative", "creative_resume"),
            ("hexagon", "hexagon_harmony_resume"),
            ("origami", "origami_unfold_resume"),
            ("code-leaf", "code_leaf_resume"),
            ("polka", "polka_dotted_resume"),
        ]);

        Ok(Self { tera, aliases })
    }

    /// Resolve a friendly alias to a template file stem; unknown names fall
    /// back to the default template.
    pub fn resolve(&self, name: &str) -> &str {
        self.aliases.get(name).copied().unwrap_or(DEFAULT_TEMPLATE)
    }

    pub fn list_templates(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.aliases.keys().copied().collect();
        names.sort_unstable();
        names
    }

    /// Render the record with the contact icons injected into the context.
    pub fn render(&self, name: &str, record: &Map<String, Value>) -> Result<String> {
        let file = format!("{}.html", self.resolve(name));

        let mut context = tera::Context::from_serialize(Value::Object(record.clone()))?;
        context.insert("icons", &contact_icons());

        self.tera.render(&file, &context).map_err(|e| match e.kind {
            tera::ErrorKind::TemplateNotFound(_) => Error::TemplateNotFound(file.clone()),
            _ => Error::Template(e),
        })
    }
}
