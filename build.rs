use std::collections::HashMap;
use std::env;
use std::fs;
use std::path::Path;

// Variables que la app lee con option_env!()
const FORWARDED_KEYS: &[&str] = &[
    "ENVIRONMENT",
    "BACKEND_URL_DEVELOPMENT",
    "BACKEND_URL_PRODUCTION",
    "ENABLE_LOGGING",
    "GOOGLE_MAPS_API_KEY",
    "DEFAULT_MAP_CENTER_LAT",
    "DEFAULT_MAP_CENTER_LNG",
    "SEARCH_DEBOUNCE_MS",
];

fn parse_env_file(contents: &str) -> HashMap<String, String> {
    contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter_map(|line| line.split_once('='))
        .map(|(key, value)| {
            let value = value.trim().trim_matches('"').trim_matches('\'');
            (key.trim().to_string(), value.to_string())
        })
        .collect()
}

fn main() {
    let env_file = Path::new(".env");

    let file_values = if env_file.exists() {
        println!("cargo:rerun-if-changed=.env");
        fs::read_to_string(env_file)
            .map(|contents| parse_env_file(&contents))
            .unwrap_or_default()
    } else {
        println!("cargo:warning=No se encontró .env. Copia .env.example a .env para configurar la API key de Google Maps.");
        HashMap::new()
    };

    for key in FORWARDED_KEYS {
        println!("cargo:rerun-if-env-changed={}", key);

        // El entorno del proceso tiene prioridad sobre .env
        if env::var(key).is_ok() {
            continue;
        }
        if let Some(value) = file_values.get(*key) {
            println!("cargo:rustc-env={}={}", key, value);
        }
    }

    let has_maps_key = env::var("GOOGLE_MAPS_API_KEY")
        .ok()
        .or_else(|| file_values.get("GOOGLE_MAPS_API_KEY").cloned())
        .map(|k| !k.trim().is_empty())
        .unwrap_or(false);
    if !has_maps_key {
        println!("cargo:warning=GOOGLE_MAPS_API_KEY no configurada: el mapa mostrará un error de configuración.");
    }

    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=.env.example");
}
