use serde::{Deserialize, Serialize};

/// Full user profile as stored by the auth service. Every field except the
/// email is optional because profile sections are filled in incrementally.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub email: String,

    // Personal
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dob: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferred_languages: Option<String>,

    // Education
    #[serde(skip_serializing_if = "Option::is_none")]
    pub education_level: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub institution_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub major: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub graduation_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gpa: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub achievements: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coursework: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub academic_certifications: Option<String>,

    // Aspirations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub career_interests: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub industry_sectors: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub short_term_goals: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub long_term_goals: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dream_job: Option<String>,

    // Skills
    #[serde(skip_serializing_if = "Option::is_none")]
    pub programming_languages: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub software_skills: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tech_certifications: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skill_levels: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub soft_skills: Option<String>,

    // Experience
    #[serde(skip_serializing_if = "Option::is_none")]
    pub work_experience: Option<String>,

    // Networking
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub other_social: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
}

/// Token returned by a successful login.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthSession {
    pub token: String,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub user: Option<serde_json::Value>,
}

/// Independently updatable slices of a profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProfileSection {
    PersonalInfo,
    Education,
    Aspirations,
    Skills,
    Experience,
    Networking,
}

impl ProfileSection {
    /// Path segment used by the auth service.
    pub fn path_segment(self) -> &'static str {
        match self {
            ProfileSection::PersonalInfo => "personal-info",
            ProfileSection::Education => "education",
            ProfileSection::Aspirations => "aspirations",
            ProfileSection::Skills => "skills",
            ProfileSection::Experience => "experience",
            ProfileSection::Networking => "networking",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_deserializes_camel_case_with_missing_fields() {
        let json = r#"{"email":"a@b.c","fullName":"Ada","gpa":3.9,"dreamJob":"Compiler engineer"}"#;
        let p: UserProfile = serde_json::from_str(json).unwrap();
        assert_eq!(p.email, "a@b.c");
        assert_eq!(p.full_name.as_deref(), Some("Ada"));
        assert_eq!(p.gpa, Some(3.9));
        assert_eq!(p.dream_job.as_deref(), Some("Compiler engineer"));
        assert!(p.linkedin.is_none());
    }

    #[test]
    fn test_profile_omits_unset_fields_on_the_wire() {
        let p = UserProfile {
            email: "a@b.c".to_string(),
            github: Some("ada".to_string()),
            ..Default::default()
        };
        let v = serde_json::to_value(&p).unwrap();
        assert_eq!(v, serde_json::json!({"email": "a@b.c", "github": "ada"}));
    }

    #[test]
    fn test_profile_section_serde_matches_path_segment() {
        for section in [
            ProfileSection::PersonalInfo,
            ProfileSection::Education,
            ProfileSection::Aspirations,
            ProfileSection::Skills,
            ProfileSection::Experience,
            ProfileSection::Networking,
        ] {
            let json = serde_json::to_string(&section).unwrap();
            assert_eq!(json, format!("\"{}\"", section.path_segment()));
        }
    }
}
