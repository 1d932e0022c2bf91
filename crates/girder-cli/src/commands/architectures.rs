use crate::support::load_catalog;
use girder_generator::{FLAT_ARCHITECTURE, LAYERED_ARCHITECTURE};
use serde_json::json;

pub fn run(catalog: Option<String>, json_output: bool) {
    // The two built-in layouts always exist; a catalog can only add display
    // metadata and a default on top of them.
    let mut entries = vec![
        (
            FLAT_ARCHITECTURE.to_string(),
            "Single module, one descriptor at the project root".to_string(),
        ),
        (
            LAYERED_ARCHITECTURE.to_string(),
            "api/common/core/web modules under a root aggregator".to_string(),
        ),
    ];
    let mut default_id = None;

    if let Some(path) = &catalog {
        let catalog = load_catalog(path);
        default_id = catalog.default_id().map(str::to_string);
        for meta in catalog.content() {
            if !entries.iter().any(|(id, _)| id == &meta.id) {
                entries.push((
                    meta.id.clone(),
                    meta.description.clone().unwrap_or_else(|| meta.name.clone()),
                ));
            }
        }
    }

    if json_output {
        let payload = json!({
            "action": "architectures",
            "default": default_id,
            "architectures": entries
                .iter()
                .map(|(id, description)| json!({ "id": id, "description": description }))
                .collect::<Vec<_>>(),
        });
        println!("{}", serde_json::to_string_pretty(&payload).expect("payload serializes"));
    } else {
        for (id, description) in &entries {
            let marker = if default_id.as_deref() == Some(id) { " (default)" } else { "" };
            println!("{id}{marker}: {description}");
        }
    }
}
