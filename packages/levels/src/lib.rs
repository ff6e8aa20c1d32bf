include!(concat!(env!("OUT_DIR"), "/levels.rs"));

/// An embedded difficulty profile: file stem and YAML text
#[derive(Debug, Clone, Copy)]
pub struct LevelFile {
    pub name: &'static str,
    pub content: &'static str,
}

/// Embedded level files, sorted by file name
pub fn level_files() -> impl Iterator<Item = LevelFile> {
    LEVELS.iter().map(|&(name, content)| LevelFile { name, content })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_levels_are_embedded() {
        let names: Vec<&str> = level_files().map(|f| f.name).collect();
        assert_eq!(names, vec!["advanced", "beginner", "intermediate"]);
    }

    #[test]
    fn test_content_keeps_yaml_text() {
        let beginner = level_files().find(|f| f.name == "beginner").unwrap();
        assert!(beginner.content.contains('\n'));
        assert!(beginner.content.contains("level: beginner"));
    }

    #[test]
    fn test_content_matches_files_byte_for_byte() {
        let on_disk = [
            ("advanced", include_str!("../levels/advanced.yaml")),
            ("beginner", include_str!("../levels/beginner.yaml")),
            ("intermediate", include_str!("../levels/intermediate.yaml")),
        ];
        for (name, text) in on_disk {
            let file = level_files().find(|f| f.name == name).unwrap();
            assert_eq!(file.content, text, "{}", name);
        }
    }
}
