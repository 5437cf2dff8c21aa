//! Subject model.
//!
//! A subject is what gets taught in a slot. Subjects may be restricted to a
//! department; a subject whose name contains the lab keyword is a lab and
//! needs a contiguous multi-hour block.

use serde::{Deserialize, Serialize};

use crate::error::GenerateError;

/// A normalized subject.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subject {
    /// Subject name (identity key).
    pub name: String,
    /// Canonical upper-case department tag. `None` = any section may take it.
    pub department: Option<String>,
}

impl Subject {
    /// Creates an unrestricted subject.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            department: None,
        }
    }

    /// Restricts the subject to a department (canonicalized to upper case).
    pub fn with_department(mut self, department: impl AsRef<str>) -> Self {
        self.department = canonical_department(department.as_ref());
        self
    }

    /// Whether the name contains `keyword`, ignoring case.
    pub fn is_lab(&self, keyword: &str) -> bool {
        if keyword.is_empty() {
            return false;
        }
        self.name
            .to_lowercase()
            .contains(&keyword.to_lowercase())
    }

    /// Whether this subject carries no department restriction.
    #[inline]
    pub fn is_unrestricted(&self) -> bool {
        self.department.is_none()
    }
}

/// A subject as supplied by callers: a bare name or a catalog record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SubjectInput {
    /// Bare name, no department restriction.
    Name(String),
    /// Catalog record.
    Record(SubjectRecord),
}

/// Catalog shape of a subject.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubjectRecord {
    /// Preferred name field.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject_name: Option<String>,
    /// Fallback name field.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Department tag, any case.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
}

impl SubjectInput {
    /// Normalizes into a [`Subject`].
    ///
    /// `index` is the entry's position in the input list and is reported
    /// in [`GenerateError::InvalidSubject`] when no name can be resolved.
    pub fn normalize(&self, index: usize) -> Result<Subject, GenerateError> {
        match self {
            SubjectInput::Name(name) if !name.trim().is_empty() => Ok(Subject::new(name.clone())),
            SubjectInput::Name(_) => Err(GenerateError::InvalidSubject { index }),
            SubjectInput::Record(record) => {
                let name = non_empty(record.subject_name.as_deref())
                    .or_else(|| non_empty(record.name.as_deref()))
                    .ok_or(GenerateError::InvalidSubject { index })?;
                Ok(Subject {
                    name: name.to_string(),
                    department: record.department.as_deref().and_then(canonical_department),
                })
            }
        }
    }
}

impl From<&str> for SubjectInput {
    fn from(name: &str) -> Self {
        SubjectInput::Name(name.to_string())
    }
}

impl From<String> for SubjectInput {
    fn from(name: String) -> Self {
        SubjectInput::Name(name)
    }
}

impl From<Subject> for SubjectInput {
    fn from(subject: Subject) -> Self {
        SubjectInput::Record(SubjectRecord {
            subject_name: Some(subject.name),
            name: None,
            department: subject.department,
        })
    }
}

/// Normalizes a whole input list, failing on the first unnamed entry.
pub fn normalize_subjects(inputs: &[SubjectInput]) -> Result<Vec<Subject>, GenerateError> {
    if inputs.is_empty() {
        return Err(GenerateError::EmptyInput);
    }
    inputs
        .iter()
        .enumerate()
        .map(|(i, input)| input.normalize(i))
        .collect()
}

fn non_empty(s: Option<&str>) -> Option<&str> {
    s.filter(|s| !s.trim().is_empty())
}

/// Upper-cases a department tag; blank tags mean "unrestricted".
pub(crate) fn canonical_department(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_uppercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subject_builder() {
        let s = Subject::new("DBMS").with_department("cse");
        assert_eq!(s.name, "DBMS");
        assert_eq!(s.department.as_deref(), Some("CSE"));
        assert!(!s.is_unrestricted());

        let blank = Subject::new("Maths").with_department("  ");
        assert!(blank.is_unrestricted());
    }

    #[test]
    fn test_is_lab() {
        assert!(Subject::new("DS Lab").is_lab("lab"));
        assert!(Subject::new("LAB: Networks").is_lab("lab"));
        assert!(Subject::new("Chemistry lab").is_lab("Lab"));
        assert!(!Subject::new("Java").is_lab("lab"));
        assert!(!Subject::new("DS Lab").is_lab(""));
    }

    #[test]
    fn test_normalize_bare_name() {
        let s = SubjectInput::from("Java").normalize(0).unwrap();
        assert_eq!(s, Subject::new("Java"));
    }

    #[test]
    fn test_normalize_record_prefers_subject_name() {
        let input = SubjectInput::Record(SubjectRecord {
            subject_name: Some("Circuits".into()),
            name: Some("ignored".into()),
            department: Some("ece".into()),
        });
        let s = input.normalize(0).unwrap();
        assert_eq!(s.name, "Circuits");
        assert_eq!(s.department.as_deref(), Some("ECE"));
    }

    #[test]
    fn test_normalize_record_falls_back_to_name() {
        let input = SubjectInput::Record(SubjectRecord {
            subject_name: Some(String::new()),
            name: Some("Thermo".into()),
            department: Some(String::new()),
        });
        let s = input.normalize(0).unwrap();
        assert_eq!(s.name, "Thermo");
        assert!(s.is_unrestricted());
    }

    #[test]
    fn test_normalize_unnamed_record() {
        let input = SubjectInput::Record(SubjectRecord {
            department: Some("CSE".into()),
            ..Default::default()
        });
        assert_eq!(
            input.normalize(3),
            Err(GenerateError::InvalidSubject { index: 3 })
        );
        assert_eq!(
            SubjectInput::from("").normalize(1),
            Err(GenerateError::InvalidSubject { index: 1 })
        );
    }

    #[test]
    fn test_normalize_blank_bare_name() {
        for blank in ["", "   ", "\t"] {
            assert_eq!(
                SubjectInput::from(blank).normalize(2),
                Err(GenerateError::InvalidSubject { index: 2 })
            );
        }
        let padded = SubjectInput::from(" Java ").normalize(0).unwrap();
        assert_eq!(padded.name, " Java ");
    }

    #[test]
    fn test_department_tag_trimmed_and_uppercased() {
        let input = SubjectInput::Record(SubjectRecord {
            subject_name: Some("DBMS".into()),
            department: Some("  cse ".into()),
            ..Default::default()
        });
        let s = input.normalize(0).unwrap();
        assert_eq!(s.department.as_deref(), Some("CSE"));
        assert_eq!(canonical_department(" \t"), None);
    }

    #[test]
    fn test_normalize_subjects_list() {
        assert_eq!(normalize_subjects(&[]), Err(GenerateError::EmptyInput));

        let inputs = vec![
            SubjectInput::from("Java"),
            SubjectInput::Record(SubjectRecord::default()),
        ];
        assert_eq!(
            normalize_subjects(&inputs),
            Err(GenerateError::InvalidSubject { index: 1 })
        );
    }

    #[test]
    fn test_deserialize_mixed_inputs() {
        let json = r#"["Java", {"subjectName": "DBMS", "department": "cse"}, {"name": "DS Lab"}]"#;
        let inputs: Vec<SubjectInput> = serde_json::from_str(json).unwrap();
        let subjects = normalize_subjects(&inputs).unwrap();

        assert_eq!(subjects[0], Subject::new("Java"));
        assert_eq!(subjects[1], Subject::new("DBMS").with_department("CSE"));
        assert_eq!(subjects[2], Subject::new("DS Lab"));
    }
}
