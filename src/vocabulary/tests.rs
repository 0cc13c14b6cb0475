use super::*;

fn entry(id: &str, name: &str, category: SkillCategory, aliases: &[&str]) -> SkillEntry {
    SkillEntry {
        id: id.to_string(),
        name: name.to_string(),
        category,
        aliases: aliases.iter().map(|a| a.to_string()).collect(),
    }
}

mod category_tests {
    use super::*;

    #[test]
    fn test_hard_and_soft_are_extractable() {
        assert!(SkillCategory::Hard.is_extractable());
        assert!(SkillCategory::Soft.is_extractable());
        assert!(!SkillCategory::Other.is_extractable());
    }

    #[test]
    fn test_category_serde_lowercase() {
        let json = serde_json::to_string(&SkillCategory::Hard).expect("Should serialize");
        assert_eq!(json, "\"hard\"");

        let parsed: SkillCategory =
            serde_json::from_str("\"soft\"").expect("Should deserialize");
        assert_eq!(parsed, SkillCategory::Soft);
    }

    #[test]
    fn test_category_rejects_unknown_value() {
        let result: Result<SkillCategory, _> = serde_json::from_str("\"wizardry\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_category_display() {
        assert_eq!(SkillCategory::Hard.to_string(), "hard");
        assert_eq!(SkillCategory::Soft.to_string(), "soft");
        assert_eq!(SkillCategory::Other.to_string(), "other");
    }
}

mod entry_tests {
    use super::*;

    #[test]
    fn test_surface_forms_name_first() {
        let e = entry("js", "JavaScript", SkillCategory::Hard, &["js", "ecmascript"]);
        let surfaces: Vec<&str> = e.surface_forms().collect();
        assert_eq!(surfaces, vec!["JavaScript", "js", "ecmascript"]);
    }

    #[test]
    fn test_entry_aliases_default_to_empty() {
        let e: SkillEntry =
            serde_json::from_str(r#"{"id": "rust", "name": "Rust", "category": "hard"}"#)
                .expect("Should deserialize without aliases");
        assert!(e.aliases.is_empty());
    }
}

mod validation_tests {
    use super::*;

    #[test]
    fn test_from_entries_accepts_valid_table() {
        let vocabulary = SkillVocabulary::from_entries(vec![
            entry("python", "Python", SkillCategory::Hard, &[]),
            entry("teamwork", "Teamwork", SkillCategory::Soft, &["collaboration"]),
        ])
        .expect("Should build vocabulary");
        assert_eq!(vocabulary.len(), 2);
    }

    #[test]
    fn test_from_entries_rejects_empty_table() {
        let result = SkillVocabulary::from_entries(vec![]);
        assert!(matches!(result, Err(VocabularyError::Empty)));
    }

    #[test]
    fn test_from_entries_rejects_duplicate_id() {
        let result = SkillVocabulary::from_entries(vec![
            entry("python", "Python", SkillCategory::Hard, &[]),
            entry("python", "Python 3", SkillCategory::Hard, &[]),
        ]);
        assert!(matches!(
            result,
            Err(VocabularyError::DuplicateId { id }) if id == "python"
        ));
    }

    #[test]
    fn test_from_entries_rejects_duplicate_surface_across_entries() {
        let result = SkillVocabulary::from_entries(vec![
            entry("js", "JavaScript", SkillCategory::Hard, &["js"]),
            entry("nodejs", "Node.js", SkillCategory::Hard, &["js"]),
        ]);
        assert!(matches!(
            result,
            Err(VocabularyError::DuplicateSurface { surface, .. }) if surface == "js"
        ));
    }

    #[test]
    fn test_from_entries_surface_collision_is_case_insensitive() {
        let result = SkillVocabulary::from_entries(vec![
            entry("sql", "SQL", SkillCategory::Hard, &[]),
            entry("sql2", "sql", SkillCategory::Hard, &[]),
        ]);
        assert!(matches!(
            result,
            Err(VocabularyError::DuplicateSurface { .. })
        ));
    }

    #[test]
    fn test_from_entries_rejects_blank_name() {
        let result =
            SkillVocabulary::from_entries(vec![entry("blank", "   ", SkillCategory::Hard, &[])]);
        assert!(matches!(
            result,
            Err(VocabularyError::BlankSurface { id }) if id == "blank"
        ));
    }

    #[test]
    fn test_from_entries_rejects_blank_alias() {
        let result = SkillVocabulary::from_entries(vec![entry(
            "python",
            "Python",
            SkillCategory::Hard,
            &[""],
        )]);
        assert!(matches!(result, Err(VocabularyError::BlankSurface { .. })));
    }
}

mod loading_tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_from_json_parses_array() {
        let json = r#"[
            {"id": "python", "name": "Python", "category": "hard"},
            {"id": "english", "name": "English", "category": "other"}
        ]"#;
        let vocabulary = SkillVocabulary::from_json(json).expect("Should parse");
        assert_eq!(vocabulary.len(), 2);
        assert_eq!(vocabulary.entries()[1].category, SkillCategory::Other);
    }

    #[test]
    fn test_from_json_rejects_malformed_input() {
        let result = SkillVocabulary::from_json("{not json");
        assert!(matches!(result, Err(VocabularyError::ParseFailed(_))));
    }

    #[test]
    fn test_from_path_reads_file() {
        let dir = tempfile::TempDir::new().expect("create temp dir");
        let path = dir.path().join("skills.json");
        let mut file = std::fs::File::create(&path).expect("create file");
        file.write_all(br#"[{"id": "rust", "name": "Rust", "category": "hard"}]"#)
            .expect("write file");

        let vocabulary = SkillVocabulary::from_path(&path).expect("Should load");
        assert_eq!(vocabulary.len(), 1);
        assert_eq!(vocabulary.entries()[0].name, "Rust");
    }

    #[test]
    fn test_from_path_missing_file() {
        let result = SkillVocabulary::from_path("/nonexistent/skills.json");
        assert!(matches!(
            result,
            Err(VocabularyError::FileUnreadable { .. })
        ));
    }

    #[test]
    fn test_builtin_loads_and_validates() {
        let vocabulary = SkillVocabulary::builtin().expect("Builtin table should be valid");
        assert!(vocabulary.len() > 100);
    }

    #[test]
    fn test_builtin_contains_expected_entries() {
        let vocabulary = SkillVocabulary::builtin().expect("Should load");

        let javascript = vocabulary
            .entries()
            .iter()
            .find(|e| e.id == "javascript")
            .expect("Builtin table should contain javascript");
        assert_eq!(javascript.name, "JavaScript");
        assert_eq!(javascript.category, SkillCategory::Hard);
        assert!(javascript.aliases.iter().any(|a| a == "js"));

        let teamwork = vocabulary
            .entries()
            .iter()
            .find(|e| e.id == "teamwork")
            .expect("Builtin table should contain teamwork");
        assert_eq!(teamwork.category, SkillCategory::Soft);

        let english = vocabulary
            .entries()
            .iter()
            .find(|e| e.id == "english")
            .expect("Builtin table should contain english");
        assert_eq!(english.category, SkillCategory::Other);
    }

    #[test]
    fn test_accessors() {
        let vocabulary = SkillVocabulary::builtin().expect("Should load");
        assert!(!vocabulary.is_empty());
        assert!(vocabulary.get(0).is_some());
        assert!(vocabulary.get(vocabulary.len()).is_none());

        let shared = vocabulary.into_shared();
        assert!(shared.len() > 0);
    }
}
