// src/cli/export.rs — Recipe export command
//
// Dumps the whole collection to JSON or YAML, stamped with the export time
// and crate version.

use serde::Serialize;

use crate::infra::config::Config;
use crate::recipes::Recipe;
use crate::store::open_recipe_store;

#[derive(Serialize)]
struct ExportDocument<'a> {
    version: &'static str,
    exported_at: String,
    recipes: &'a [Recipe],
}

pub async fn run_export(config: &Config, format: &str, output: Option<&str>) -> anyhow::Result<()> {
    let store = open_recipe_store(config)?;
    let output_str = render_export(store.list_all(), format)?;

    if let Some(path) = output {
        std::fs::write(path, &output_str)?;
        println!("Exported {} recipe(s) to {}", store.len(), path);
    } else {
        println!("{}", output_str);
    }
    Ok(())
}

pub fn render_export(recipes: &[Recipe], format: &str) -> anyhow::Result<String> {
    let doc = ExportDocument {
        version: env!("CARGO_PKG_VERSION"),
        exported_at: chrono::Utc::now().to_rfc3339(),
        recipes,
    };
    let out = match format {
        "json" => serde_json::to_string_pretty(&doc)?,
        "yaml" | "yml" => serde_yml::to_string(&doc)?,
        other => {
            anyhow::bail!("Unsupported format '{}'. Options: json, yaml", other);
        }
    };
    Ok(out)
}
