use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One work history entry on a candidate profile.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExperienceEntry {
    pub title: String,
    pub company: String,
    pub description: String,
}

impl ExperienceEntry {
    pub fn new(
        title: impl Into<String>,
        company: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            company: company.into(),
            description: description.into(),
        }
    }
}

/// One education entry on a candidate profile.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EducationEntry {
    pub degree: String,
    pub institution: String,
    pub description: String,
}

impl EducationEntry {
    pub fn new(
        degree: impl Into<String>,
        institution: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            degree: degree.into(),
            institution: institution.into(),
            description: description.into(),
        }
    }
}

/// Candidate profile row as supplied by the directory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateRecord {
    pub id: Uuid,
    /// Plain text extracted from the uploaded CV.
    pub cv_text: String,
    /// Skills the candidate declared on their profile.
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub experience: Vec<ExperienceEntry>,
    #[serde(default)]
    pub education: Vec<EducationEntry>,
}

impl CandidateRecord {
    pub fn new(id: Uuid, cv_text: impl Into<String>) -> Self {
        Self {
            id,
            cv_text: cv_text.into(),
            skills: Vec::new(),
            experience: Vec::new(),
            education: Vec::new(),
        }
    }

    pub fn with_skills<I, S>(mut self, skills: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.skills = skills.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_experience(mut self, experience: Vec<ExperienceEntry>) -> Self {
        self.experience = experience;
        self
    }

    pub fn with_education(mut self, education: Vec<EducationEntry>) -> Self {
        self.education = education;
        self
    }
}

/// Job posting row as supplied by the directory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobRecord {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub location: String,
    /// Required skills or qualifications, one free-text item each.
    #[serde(default)]
    pub requirements: Vec<String>,
}

impl JobRecord {
    pub fn new(id: Uuid, title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            description: description.into(),
            location: String::new(),
            requirements: Vec::new(),
        }
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }

    pub fn with_requirements<I, S>(mut self, requirements: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.requirements = requirements.into_iter().map(Into::into).collect();
        self
    }
}
