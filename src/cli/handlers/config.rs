use crate::cli::{args::ConfigAction, global::GlobalArgs};
use base85::Settings;
use base85::core::config::search_paths;

pub fn handle(
    action: ConfigAction,
    global: &GlobalArgs,
    settings: &Settings,
) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        ConfigAction::Show { json } => handle_show(json, settings),
        ConfigAction::Path => handle_path(global),
    }
}

fn handle_show(json: bool, settings: &Settings) -> Result<(), Box<dyn std::error::Error>> {
    if json {
        println!("{}", serde_json::to_string_pretty(settings)?);
    } else {
        print!("{}", toml::to_string(settings)?);
    }
    Ok(())
}

fn handle_path(global: &GlobalArgs) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(path) = &global.config {
        println!("{} (--config)", shellexpand::tilde(path));
        return Ok(());
    }

    println!("built-in defaults");
    for path in search_paths() {
        let status = if path.is_file() { "found" } else { "not found" };
        println!("{} ({})", path.display(), status);
    }
    Ok(())
}
