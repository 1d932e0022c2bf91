use crate::support::{load_catalog, parse_property};
use girder_generator::{ProjectDescription, ProjectGenerator, PropertiesContainer};
use serde_json::json;
use std::path::PathBuf;

pub struct Args {
    pub name: String,
    pub group: String,
    pub version: String,
    pub architecture: Option<String>,
    pub catalog: Option<String>,
    pub output: Option<String>,
    pub properties: Vec<String>,
    pub json: bool,
}

pub fn run(args: Args) {
    let project_root = args
        .output
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(&args.name));

    let mut description = ProjectDescription::new(&args.name, &args.group, &args.version);
    if let Some(architecture) = args.architecture {
        description = description.architecture(architecture);
    }

    let mut generator = ProjectGenerator::new();
    if let Some(path) = &args.catalog {
        generator = generator.with_catalog(load_catalog(path));
    }
    let pairs: Vec<(String, String)> = args
        .properties
        .iter()
        .map(|raw| parse_property(raw))
        .collect();
    if !pairs.is_empty() {
        generator.add_customizer(Box::new(move |p: &mut PropertiesContainer| {
            for (key, value) in &pairs {
                p.property(key, value);
            }
        }));
    }

    let report = generator
        .generate(&description, &project_root)
        .unwrap_or_else(|e| {
            eprintln!("error: generation failed: {e}");
            std::process::exit(1);
        });

    if args.json {
        let payload = json!({
            "action": "new",
            "root": project_root.display().to_string(),
            "architecture": report.architecture.as_str(),
            "modules": report.modules,
        });
        println!("{}", serde_json::to_string_pretty(&payload).expect("payload serializes"));
    } else {
        println!(
            "generated '{}' ({}) at {}",
            args.name,
            report.architecture.as_str(),
            project_root.display()
        );
        for module in &report.modules {
            println!("  module {module}");
        }
    }
}
