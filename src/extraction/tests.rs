use super::*;
use crate::vocabulary::{SkillCategory, SkillEntry, SkillVocabulary};

fn builtin_extractor() -> SkillExtractor {
    let vocabulary = SkillVocabulary::builtin().expect("Should load builtin vocabulary");
    SkillExtractor::new(vocabulary.into_shared()).expect("Should build extractor")
}

fn entry(id: &str, name: &str, category: SkillCategory, aliases: &[&str]) -> SkillEntry {
    SkillEntry {
        id: id.to_string(),
        name: name.to_string(),
        category,
        aliases: aliases.iter().map(|a| a.to_string()).collect(),
    }
}

mod extractor_tests {
    use super::*;

    #[test]
    fn test_extracts_canonical_names() {
        let extractor = builtin_extractor();
        let skills = extractor.extract("Senior Python developer with SQL and teamwork skills");
        assert_eq!(skills.names(), ["Python", "SQL", "Teamwork"]);
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        let extractor = builtin_extractor();
        let skills = extractor.extract("PYTHON and javascript");
        assert_eq!(skills.names(), ["Python", "JavaScript"]);
    }

    #[test]
    fn test_aliases_resolve_to_canonical_name() {
        let extractor = builtin_extractor();
        let skills = extractor.extract("deployed on k8s with gcp and js");
        assert_eq!(
            skills.names(),
            ["Kubernetes", "Google Cloud", "JavaScript"]
        );
    }

    #[test]
    fn test_substring_of_longer_token_does_not_fire() {
        let extractor = builtin_extractor();
        let skills = extractor.extract("I write javascript daily");
        assert!(skills.contains("JavaScript"));
        assert!(!skills.contains("Java"));
    }

    #[test]
    fn test_word_boundary_rejects_embedded_hit() {
        let extractor = builtin_extractor();
        // "invite" contains "vite" but is not a skill mention.
        let skills = extractor.extract("we invite you to apply");
        assert!(!skills.contains("Vite"));
    }

    #[test]
    fn test_trailing_digit_blocks_match() {
        let extractor = builtin_extractor();
        let skills = extractor.extract("upgraded the Java8 services");
        assert!(!skills.contains("Java"));
    }

    #[test]
    fn test_leftmost_longest_wins() {
        let extractor = builtin_extractor();
        let skills = extractor.extract("building react native apps");
        assert!(skills.contains("React Native"));
        assert!(!skills.contains("React"));
    }

    #[test]
    fn test_punctuated_names() {
        let extractor = builtin_extractor();
        let skills = extractor.extract("C++ and C# development with Node.js");
        assert_eq!(skills.names(), ["C++", "C#", "Node.js"]);
    }

    #[test]
    fn test_other_category_is_dropped() {
        let extractor = builtin_extractor();
        let skills = extractor.extract("fluent English speaker who knows Python");
        assert_eq!(skills.names(), ["Python"]);
    }

    #[test]
    fn test_duplicates_keep_first_position() {
        let extractor = builtin_extractor();
        let skills = extractor.extract("Python first, then SQL, then python again");
        assert_eq!(skills.names(), ["Python", "SQL"]);
    }

    #[test]
    fn test_empty_text_yields_empty_set() {
        let extractor = builtin_extractor();
        assert!(extractor.extract("").is_empty());
        assert!(extractor.extract("   \t\n").is_empty());
    }

    #[test]
    fn test_text_without_skills_yields_empty_set() {
        let extractor = builtin_extractor();
        let skills = extractor.extract("enjoys hiking and baking sourdough bread");
        assert!(skills.is_empty());
    }

    #[test]
    fn test_extraction_is_deterministic() {
        let extractor = builtin_extractor();
        let text = "Rust engineer, PostgreSQL, Docker, leadership";
        let first = extractor.extract(text);
        let second = extractor.extract(text);
        assert_eq!(first, second);
    }

    #[test]
    fn test_extraction_fixpoint_on_own_output() {
        let extractor = builtin_extractor();
        let skills = extractor.extract("Kubernetes and Terraform with strong communication");
        let joined = skills.names().join(" ");
        let again = extractor.extract(&joined);
        assert_eq!(again.names(), skills.names());
    }

    #[test]
    fn test_unicode_text_around_matches() {
        let extractor = builtin_extractor();
        let skills = extractor.extract("Développeur Python à Paris");
        assert_eq!(skills.names(), ["Python"]);
    }

    #[test]
    fn test_custom_vocabulary_precedence() {
        let vocabulary = SkillVocabulary::from_entries(vec![
            entry("java", "Java", SkillCategory::Hard, &[]),
            entry("javascript", "JavaScript", SkillCategory::Hard, &[]),
        ])
        .expect("Should build vocabulary")
        .into_shared();
        let extractor = SkillExtractor::new(vocabulary).expect("Should build extractor");

        let skills = extractor.extract("java then javascript then Java8");
        assert_eq!(skills.names(), ["Java", "JavaScript"]);
    }

    #[test]
    fn test_pattern_count_covers_names_and_aliases() {
        let vocabulary = SkillVocabulary::from_entries(vec![entry(
            "js",
            "JavaScript",
            SkillCategory::Hard,
            &["js", "ecmascript"],
        )])
        .expect("Should build vocabulary")
        .into_shared();
        let extractor = SkillExtractor::new(vocabulary).expect("Should build extractor");
        assert_eq!(extractor.pattern_count(), 3);
    }

    #[test]
    fn test_vocabulary_accessor() {
        let extractor = builtin_extractor();
        assert!(extractor.vocabulary().len() > 100);
    }
}

mod skill_set_tests {
    use super::*;

    #[test]
    fn test_from_names_preserves_first_seen_order() {
        let set = ExtractedSkillSet::from_names(["Python", "SQL", "Python", "Docker"]);
        assert_eq!(set.names(), ["Python", "SQL", "Docker"]);
    }

    #[test]
    fn test_intersect_orders_by_reference() {
        let subject = ExtractedSkillSet::from_names(["Docker", "Python", "SQL"]);
        let reference = ExtractedSkillSet::from_names(["SQL", "Rust", "Python"]);
        assert_eq!(subject.intersect(&reference), ["SQL", "Python"]);
    }

    #[test]
    fn test_intersect_with_empty_reference() {
        let subject = ExtractedSkillSet::from_names(["Python"]);
        let reference = ExtractedSkillSet::default();
        assert!(subject.intersect(&reference).is_empty());
    }

    #[test]
    fn test_missing_from_orders_by_reference() {
        let subject = ExtractedSkillSet::from_names(["Python"]);
        let reference = ExtractedSkillSet::from_names(["Rust", "Python", "Docker"]);
        assert_eq!(subject.missing_from(&reference), ["Rust", "Docker"]);
    }

    #[test]
    fn test_contains_is_exact() {
        let set = ExtractedSkillSet::from_names(["Python"]);
        assert!(set.contains("Python"));
        assert!(!set.contains("python"));
    }

    #[test]
    fn test_serializes_as_plain_array() {
        let set = ExtractedSkillSet::from_names(["Python", "SQL"]);
        let json = serde_json::to_string(&set).expect("Should serialize");
        assert_eq!(json, r#"["Python","SQL"]"#);

        let parsed: ExtractedSkillSet =
            serde_json::from_str(&json).expect("Should deserialize");
        assert_eq!(parsed, set);
    }

    #[test]
    fn test_iteration_and_into_names() {
        let set = ExtractedSkillSet::from_names(["Python", "SQL"]);
        let collected: Vec<&String> = set.iter().collect();
        assert_eq!(collected.len(), 2);
        assert_eq!(set.into_names(), vec!["Python", "SQL"]);
    }
}
