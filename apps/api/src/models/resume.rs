#![allow(dead_code)]

//! Resume wire models.
//!
//! The two union fields (`description`, `skills`) are resolved into tagged
//! enums exactly once, at the deserialization boundary. The content builder
//! dispatches exhaustively on the enums and never probes JSON shapes at
//! render time. Any shape outside the sanctioned variants is rejected with
//! [`ContentError::UnsupportedVariant`].

use serde::de::{self, Deserializer};
use serde::Deserialize;
use serde_json::Value;

use crate::errors::ContentError;

// ────────────────────────────────────────────────────────────────────────────
// Record
// ────────────────────────────────────────────────────────────────────────────

/// A full resume record, immutable for the duration of one build.
///
/// `name` and `experience` default to empty so that their absence reaches the
/// builder, which rejects them as malformed records (the builder owns the
/// mandatory-field check, not serde). Every other field is optional.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ResumeData {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub contact: Contact,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub experience: Vec<JobExperience>,
    #[serde(default)]
    pub education: Option<Vec<Education>>,
    #[serde(default)]
    pub skills: Option<Skills>,
    #[serde(default)]
    pub certifications: Option<Vec<Certification>>,
}

/// Contact details. All fields optional; the whole object may be absent.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Contact {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub linkedin: Option<String>,
    #[serde(default)]
    pub github: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct JobExperience {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub company: String,
    /// Date range of employment, e.g. "2020-2022". Rendered verbatim.
    #[serde(default)]
    pub date: String,
    pub description: JobDescription,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Education {
    #[serde(default)]
    pub degree: String,
    #[serde(default)]
    pub institution: String,
    #[serde(default)]
    pub year: String,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Certification {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub organization: String,
    #[serde(default)]
    pub date: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Union fields
// ────────────────────────────────────────────────────────────────────────────

/// Job description: either an ordered list of bullet items or one paragraph.
#[derive(Debug, Clone, PartialEq)]
pub enum JobDescription {
    Bullets(Vec<String>),
    Text(String),
}

impl JobDescription {
    /// Resolves a raw JSON value into one of the two sanctioned shapes.
    pub fn from_value(value: Value) -> Result<Self, ContentError> {
        match value {
            Value::Array(items) => Ok(JobDescription::Bullets(string_items(
                items,
                "description list items",
            )?)),
            Value::String(text) => Ok(JobDescription::Text(text)),
            other => Err(ContentError::UnsupportedVariant(format!(
                "description must be a string or a list of strings, got {}",
                json_type(&other)
            ))),
        }
    }
}

impl<'de> Deserialize<'de> for JobDescription {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        JobDescription::from_value(value).map_err(de::Error::custom)
    }
}

/// Skills: either a flat list or a category → skills mapping.
///
/// Categories keep their insertion order (rendering order); `serde_json` is
/// built with `preserve_order` so the order survives the `Value` round-trip.
#[derive(Debug, Clone, PartialEq)]
pub enum Skills {
    Flat(Vec<String>),
    Categorized(Vec<(String, Vec<String>)>),
}

impl Skills {
    /// Resolves a raw JSON value into one of the two sanctioned shapes.
    pub fn from_value(value: Value) -> Result<Self, ContentError> {
        match value {
            Value::Array(items) => Ok(Skills::Flat(string_items(items, "skills list items")?)),
            Value::Object(map) => {
                let mut categories = Vec::with_capacity(map.len());
                for (category, entry) in map {
                    match entry {
                        Value::Array(items) => {
                            let skills = string_items(items, "skill category items")?;
                            categories.push((category, skills));
                        }
                        other => {
                            return Err(ContentError::UnsupportedVariant(format!(
                                "skill category '{category}' must map to a list of strings, got {}",
                                json_type(&other)
                            )))
                        }
                    }
                }
                Ok(Skills::Categorized(categories))
            }
            other => Err(ContentError::UnsupportedVariant(format!(
                "skills must be a list of strings or a category mapping, got {}",
                json_type(&other)
            ))),
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            Skills::Flat(skills) => skills.is_empty(),
            Skills::Categorized(categories) => categories.is_empty(),
        }
    }
}

impl<'de> Deserialize<'de> for Skills {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Skills::from_value(value).map_err(de::Error::custom)
    }
}

fn string_items(items: Vec<Value>, what: &str) -> Result<Vec<String>, ContentError> {
    items
        .into_iter()
        .map(|item| match item {
            Value::String(s) => Ok(s),
            other => Err(ContentError::UnsupportedVariant(format!(
                "{what} must be strings, got {}",
                json_type(&other)
            ))),
        })
        .collect()
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_description_accepts_list_of_strings() {
        let job: JobExperience = serde_json::from_str(
            r#"{"title":"Engineer","company":"Acme","date":"2020-2022","description":["Did X","Did Y"]}"#,
        )
        .unwrap();
        assert_eq!(
            job.description,
            JobDescription::Bullets(vec!["Did X".to_string(), "Did Y".to_string()])
        );
    }

    #[test]
    fn test_description_accepts_single_string() {
        let job: JobExperience = serde_json::from_str(
            r#"{"title":"Engineer","company":"Acme","date":"2020","description":"Built things"}"#,
        )
        .unwrap();
        assert_eq!(
            job.description,
            JobDescription::Text("Built things".to_string())
        );
    }

    #[test]
    fn test_description_rejects_number() {
        let result: Result<JobExperience, _> =
            serde_json::from_str(r#"{"title":"x","company":"y","date":"z","description":42}"#);
        let err = result.unwrap_err().to_string();
        assert!(
            err.contains("unsupported variant"),
            "error should name the unsupported shape, got: {err}"
        );
    }

    #[test]
    fn test_description_rejects_non_string_list_items() {
        let result = JobDescription::from_value(serde_json::json!(["ok", 1]));
        assert!(matches!(
            result,
            Err(ContentError::UnsupportedVariant(_))
        ));
    }

    #[test]
    fn test_skills_accepts_flat_list() {
        let skills: Skills = serde_json::from_str(r#"["Python","Go"]"#).unwrap();
        assert_eq!(
            skills,
            Skills::Flat(vec!["Python".to_string(), "Go".to_string()])
        );
    }

    #[test]
    fn test_skills_category_map_preserves_insertion_order() {
        let skills: Skills = serde_json::from_str(
            r#"{"Zebra":["a"],"Alpha":["b"],"Middle":["c"]}"#,
        )
        .unwrap();
        let Skills::Categorized(categories) = skills else {
            panic!("expected categorized skills");
        };
        let names: Vec<&str> = categories.iter().map(|(name, _)| name.as_str()).collect();
        assert_eq!(names, vec!["Zebra", "Alpha", "Middle"]);
    }

    #[test]
    fn test_skills_rejects_scalar() {
        let result = Skills::from_value(serde_json::json!(42));
        assert!(matches!(
            result,
            Err(ContentError::UnsupportedVariant(_))
        ));
    }

    #[test]
    fn test_skills_rejects_non_list_category_value() {
        let result = Skills::from_value(serde_json::json!({"Languages": "Python"}));
        assert!(matches!(
            result,
            Err(ContentError::UnsupportedVariant(_))
        ));
    }

    #[test]
    fn test_minimal_record_parses_with_defaults() {
        let record: ResumeData = serde_json::from_str(
            r#"{"name":"Jane Doe","experience":[{"title":"Engineer","company":"Acme","date":"2020","description":"x"}]}"#,
        )
        .unwrap();
        assert_eq!(record.name, "Jane Doe");
        assert_eq!(record.contact, Contact::default());
        assert!(record.title.is_none());
        assert!(record.skills.is_none());
        assert!(record.education.is_none());
    }

    #[test]
    fn test_full_record_parses() {
        let record: ResumeData = serde_json::from_str(
            r#"{
                "name": "Jane Doe",
                "title": "Staff Engineer",
                "contact": {"email": "jane@example.com", "phone": "555-0100"},
                "summary": "Seasoned engineer.",
                "experience": [
                    {"title": "Engineer", "company": "Acme", "date": "2020-2022",
                     "description": ["Did X", "Did Y"]}
                ],
                "education": [
                    {"degree": "BSc", "institution": "State U", "year": "2016"}
                ],
                "skills": {"Languages": ["Python", "Go"]},
                "certifications": [
                    {"name": "Cert", "organization": "Org", "date": "2021"}
                ]
            }"#,
        )
        .unwrap();
        assert_eq!(record.experience.len(), 1);
        assert_eq!(
            record.skills,
            Some(Skills::Categorized(vec![(
                "Languages".to_string(),
                vec!["Python".to_string(), "Go".to_string()]
            )]))
        );
        assert_eq!(record.certifications.as_ref().map(Vec::len), Some(1));
    }
}
