use std::env;
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();
    let dest_path = Path::new(&out_dir).join("levels.rs");

    let mut code = String::new();
    code.push_str("/// Embedded difficulty profile files\n");
    code.push_str("pub static LEVELS: &[(&str, &str)] = &[\n");

    let levels_dir = Path::new("levels");

    if levels_dir.exists() {
        // Sorted so the generated table is stable across filesystems
        let entries: Vec<_> = WalkDir::new(levels_dir)
            .sort_by_file_name()
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.path().extension().map_or(false, |ext| ext == "yaml"))
            .collect();

        for entry in entries {
            let path = entry.path();
            let name = path.file_stem().unwrap().to_string_lossy();

            if let Ok(content) = fs::read_to_string(path) {
                let escaped = content.replace('\\', "\\\\").replace('"', "\\\"").replace('\n', "\\n");
                code.push_str(&format!("    (\"{}\", \"{}\"),\n", name, escaped));
            }
        }
    }

    code.push_str("];\n");

    fs::write(&dest_path, code).unwrap();

    println!("cargo:rerun-if-changed=levels");
}
