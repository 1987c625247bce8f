use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use clap::Parser;
use serde_json::Value;
use tracing_subscriber::EnvFilter;

use resumake::{Config, Error, Normalizer, NormalizerConfig, SuggestionMode, TemplateEngine};

#[derive(Parser, Debug)]
#[command(name = "resumake")]
#[command(version = "0.1.0")]
#[command(about = "Normalize a resume record and render it through an HTML template")]
struct Args {
    /// Input resume JSON file
    input: Option<PathBuf>,

    /// Output HTML file
    output: Option<PathBuf>,

    /// Template name (see --list-templates)
    template: Option<String>,

    /// Emit rewrite suggestions for unquantified achievements
    #[arg(long)]
    suggest: bool,

    /// Template directory
    #[arg(long)]
    templates: Option<PathBuf>,

    /// List available template names and exit
    #[arg(long)]
    list_templates: bool,
}

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("resumake=info".parse()?),
        )
        .init();

    // Load environment variables
    dotenvy::dotenv().ok();

    let args = Args::parse();
    let config = Config::from_env()?;

    let template_dir = args
        .templates
        .clone()
        .unwrap_or_else(|| PathBuf::from(&config.template_dir));
    let engine = TemplateEngine::new(&template_dir)?;

    if args.list_templates {
        for name in engine.list_templates() {
            println!("{name}");
        }
        return Ok(());
    }

    // Positional arguments, or an interactive prompt for the same values.
    let input = match args.input.clone() {
        Some(path) => path,
        None => PathBuf::from(prompt("Input resume JSON file")?),
    };
    let output = match args.output.clone() {
        Some(path) => path,
        None => PathBuf::from(prompt("Output HTML file")?),
    };
    let template = match args.template.clone() {
        Some(name) => name,
        None => {
            let name = prompt(&format!("Template [{}]", config.default_template))?;
            if name.is_empty() {
                config.default_template.clone()
            } else {
                name
            }
        }
    };

    let mut record = read_record(&input)?;

    let mut normalizer_config = NormalizerConfig::from(&config);
    if args.suggest {
        normalizer_config.mode = SuggestionMode::Advise;
    }

    let normalizer = Normalizer::new(normalizer_config);
    let suggestions = normalizer.normalize(&mut record)?;

    for suggestion in &suggestions {
        println!("[{}] {}\n", suggestion.section, suggestion.advice);
    }
    if !suggestions.is_empty() {
        tracing::info!(
            "{} achievement(s) could be strengthened with a metric",
            suggestions.len()
        );
    }

    tracing::info!("Rendering with template: {}", engine.resolve(&template));
    let html = engine.render(&template, &record)?;

    std::fs::write(&output, html)?;
    tracing::info!("Resume HTML generated: {}", output.display());

    Ok(())
}

fn read_record(path: &Path) -> anyhow::Result<serde_json::Map<String, Value>> {
    let raw = std::fs::read_to_string(path)?;
    let value: Value = serde_json::from_str(&raw)?;
    match value {
        Value::Object(map) => Ok(map),
        _ => Err(Error::NotAnObject.into()),
    }
}

fn prompt(label: &str) -> io::Result<String> {
    print!("{label}: ");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim().to_string())
}
