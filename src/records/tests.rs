use super::*;

use uuid::Uuid;

fn candidate(cv_text: &str) -> CandidateRecord {
    CandidateRecord::new(Uuid::new_v4(), cv_text)
}

mod types_tests {
    use super::*;

    #[test]
    fn test_candidate_builder() {
        let id = Uuid::new_v4();
        let record = CandidateRecord::new(id, "Ten years of Python")
            .with_skills(["Python", "SQL"])
            .with_experience(vec![ExperienceEntry::new(
                "Backend Engineer",
                "Acme",
                "Built services",
            )])
            .with_education(vec![EducationEntry::new("BSc", "MIT", "Computer science")]);

        assert_eq!(record.id, id);
        assert_eq!(record.skills, vec!["Python", "SQL"]);
        assert_eq!(record.experience.len(), 1);
        assert_eq!(record.education.len(), 1);
    }

    #[test]
    fn test_job_builder() {
        let id = Uuid::new_v4();
        let record = JobRecord::new(id, "Data Engineer", "Own the pipelines")
            .with_location("Berlin")
            .with_requirements(["Python", "Spark"]);

        assert_eq!(record.id, id);
        assert_eq!(record.location, "Berlin");
        assert_eq!(record.requirements, vec!["Python", "Spark"]);
    }

    #[test]
    fn test_candidate_optional_fields_default_empty() {
        let json = format!(
            "{{\"id\": \"{}\", \"cv_text\": \"plain text\"}}",
            Uuid::new_v4()
        );
        let record: CandidateRecord = serde_json::from_str(&json).expect("Should parse");
        assert!(record.skills.is_empty());
        assert!(record.experience.is_empty());
        assert!(record.education.is_empty());
    }

    #[test]
    fn test_record_serde_roundtrip() {
        let original = candidate("text").with_skills(["Rust"]);
        let json = serde_json::to_string(&original).expect("Should serialize");
        let parsed: CandidateRecord = serde_json::from_str(&json).expect("Should deserialize");
        assert_eq!(parsed, original);
    }
}

mod policy_tests {
    use super::*;

    #[test]
    fn test_default_candidate_assembly_order() {
        let record = candidate("CV body")
            .with_skills(["Python", "SQL"])
            .with_experience(vec![ExperienceEntry::new("Engineer", "Acme", "Did things")])
            .with_education(vec![EducationEntry::new("MSc", "ETH", "Systems")]);

        let document = DocumentPolicy::default().candidate_document(&record);
        assert_eq!(
            document,
            "CV body Python SQL Engineer Acme Did things MSc ETH Systems"
        );
    }

    #[test]
    fn test_default_job_assembly_order() {
        let record = JobRecord::new(Uuid::new_v4(), "Data Engineer", "Own the pipelines")
            .with_location("Berlin")
            .with_requirements(["Python", "Spark"]);

        let document = DocumentPolicy::default().job_document(&record);
        assert_eq!(document, "Data Engineer Own the pipelines Berlin Python Spark");
    }

    #[test]
    fn test_blank_parts_are_dropped() {
        let record = candidate("")
            .with_skills(["Python"])
            .with_experience(vec![ExperienceEntry::new("Engineer", "", "   ")]);

        let document = DocumentPolicy::default().candidate_document(&record);
        assert_eq!(document, "Python Engineer");
    }

    #[test]
    fn test_empty_record_assembles_to_empty_string() {
        let record = candidate("   ");
        assert_eq!(DocumentPolicy::default().candidate_document(&record), "");

        let job = JobRecord::new(Uuid::new_v4(), "", "");
        assert_eq!(DocumentPolicy::default().job_document(&job), "");
    }

    #[test]
    fn test_custom_field_selection() {
        let record = candidate("CV body").with_skills(["Python"]);
        let policy = DocumentPolicy {
            candidate_fields: vec![CandidateField::Skills],
            job_fields: vec![JobField::Title],
        };

        assert_eq!(policy.candidate_document(&record), "Python");

        let job = JobRecord::new(Uuid::new_v4(), "Data Engineer", "ignored")
            .with_location("ignored too");
        assert_eq!(policy.job_document(&job), "Data Engineer");
    }

    #[test]
    fn test_custom_field_order_is_respected() {
        let record = candidate("CV body").with_skills(["Python"]);
        let policy = DocumentPolicy {
            candidate_fields: vec![CandidateField::Skills, CandidateField::CvText],
            job_fields: DocumentPolicy::default().job_fields,
        };

        assert_eq!(policy.candidate_document(&record), "Python CV body");
    }

    #[test]
    fn test_policy_serde_roundtrip() {
        let original = DocumentPolicy::default();
        let json = serde_json::to_string(&original).expect("Should serialize");
        assert!(json.contains("cv_text"));
        let parsed: DocumentPolicy = serde_json::from_str(&json).expect("Should deserialize");
        assert_eq!(parsed, original);
    }
}

mod directory_tests {
    use super::*;

    #[tokio::test]
    async fn test_insert_and_fetch() {
        let directory = InMemoryDirectory::new();
        let record = candidate("text");
        let id = record.id;
        directory.insert_candidate(record.clone());

        let fetched = directory.candidate(id).await.expect("Should fetch");
        assert_eq!(fetched, Some(record));
    }

    #[tokio::test]
    async fn test_missing_entity_is_none() {
        let directory = InMemoryDirectory::new();
        assert_eq!(directory.candidate(Uuid::new_v4()).await.unwrap(), None);
        assert_eq!(directory.job(Uuid::new_v4()).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_unrestricted_listing_returns_all() {
        let directory = InMemoryDirectory::new();
        directory.insert_job(JobRecord::new(Uuid::new_v4(), "A", "a"));
        directory.insert_job(JobRecord::new(Uuid::new_v4(), "B", "b"));

        let jobs = directory.jobs(None).await.expect("Should list");
        assert_eq!(jobs.len(), 2);
        assert_eq!(directory.job_count(), 2);
    }

    #[tokio::test]
    async fn test_restricted_listing_follows_requested_order() {
        let directory = InMemoryDirectory::new();
        let first = JobRecord::new(Uuid::new_v4(), "First", "a");
        let second = JobRecord::new(Uuid::new_v4(), "Second", "b");
        directory.insert_job(first.clone());
        directory.insert_job(second.clone());

        let jobs = directory
            .jobs(Some(&[second.id, first.id]))
            .await
            .expect("Should list");
        assert_eq!(jobs, vec![second, first]);
    }

    #[tokio::test]
    async fn test_unknown_ids_are_omitted() {
        let directory = InMemoryDirectory::new();
        let known = candidate("text");
        directory.insert_candidate(known.clone());

        let records = directory
            .candidates(Some(&[Uuid::new_v4(), known.id]))
            .await
            .expect("Should list");
        assert_eq!(records, vec![known]);
    }

    #[tokio::test]
    async fn test_reinsert_replaces_row() {
        let directory = InMemoryDirectory::new();
        let record = candidate("old text");
        let id = record.id;
        directory.insert_candidate(record);

        let mut replacement = candidate("new text");
        replacement.id = id;
        directory.insert_candidate(replacement);

        let fetched = directory.candidate(id).await.unwrap().unwrap();
        assert_eq!(fetched.cv_text, "new text");
        assert_eq!(directory.candidate_count(), 1);
    }
}
