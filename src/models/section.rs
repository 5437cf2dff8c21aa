//! Class section model.
//!
//! A section is a group of students that attends lessons together. Its
//! department is inferred from the name and decides which subjects it may
//! be given.

use serde::{Deserialize, Serialize};

use super::{DepartmentRules, Subject};

/// A class section.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "SectionRepr")]
pub struct Section {
    /// Section name (identity key), e.g. `"CSE-A"`.
    pub name: String,
}

impl Section {
    /// Creates a section.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// Department inferred from the name. `None` = unrestricted.
    pub fn department<'r>(&self, rules: &'r DepartmentRules) -> Option<&'r str> {
        rules.infer(&self.name)
    }

    /// Subjects this section may take, in input order.
    ///
    /// Unrestricted subjects are always permitted. Department-tagged
    /// subjects are permitted when the tag equals the section's department,
    /// or when the section itself is unrestricted.
    pub fn permitted_subjects<'s>(
        &self,
        subjects: &'s [Subject],
        rules: &DepartmentRules,
    ) -> Vec<&'s Subject> {
        let dept = self.department(rules);
        subjects.iter().filter(|s| permits(dept, s)).collect()
    }
}

/// Department filter between a section department and a subject.
pub fn permits(section_dept: Option<&str>, subject: &Subject) -> bool {
    match (section_dept, subject.department.as_deref()) {
        (None, _) | (_, None) => true,
        (Some(sec), Some(subj)) => sec == subj,
    }
}

impl From<&str> for Section {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum SectionRepr {
    Name(String),
    Record {
        #[serde(alias = "sectionName")]
        name: String,
    },
}

impl From<SectionRepr> for Section {
    fn from(repr: SectionRepr) -> Self {
        match repr {
            SectionRepr::Name(name) | SectionRepr::Record { name } => Self { name },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Vec<Subject> {
        vec![
            Subject::new("Maths"),
            Subject::new("DBMS").with_department("CSE"),
            Subject::new("Circuits").with_department("ECE"),
        ]
    }

    #[test]
    fn test_section_department() {
        let rules = DepartmentRules::default();
        assert_eq!(Section::new("CSE-A").department(&rules), Some("CSE"));
        assert_eq!(Section::new("Evening").department(&rules), None);
    }

    #[test]
    fn test_permitted_subjects_filtered() {
        let rules = DepartmentRules::default();
        let subjects = catalog();

        let cse: Vec<&str> = Section::new("CSE-A")
            .permitted_subjects(&subjects, &rules)
            .iter()
            .map(|s| s.name.as_str())
            .collect();
        assert_eq!(cse, vec!["Maths", "DBMS"]);

        let ece: Vec<&str> = Section::new("ECE-B")
            .permitted_subjects(&subjects, &rules)
            .iter()
            .map(|s| s.name.as_str())
            .collect();
        assert_eq!(ece, vec!["Maths", "Circuits"]);
    }

    #[test]
    fn test_unrestricted_section_takes_everything() {
        let rules = DepartmentRules::default();
        let subjects = catalog();
        let all = Section::new("Section-1").permitted_subjects(&subjects, &rules);
        assert_eq!(all.len(), 3);
    }

    #[test]
    fn test_section_with_no_permitted_subjects() {
        let rules = DepartmentRules::default();
        let subjects = vec![Subject::new("Circuits").with_department("ECE")];
        assert!(Section::new("MECH-A")
            .permitted_subjects(&subjects, &rules)
            .is_empty());
    }

    #[test]
    fn test_section_deserialize_variants() {
        let json = r#"["CSE-A", {"sectionName": "ECE-A"}, {"name": "MECH-B"}]"#;
        let sections: Vec<Section> = serde_json::from_str(json).unwrap();
        let names: Vec<&str> = sections.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["CSE-A", "ECE-A", "MECH-B"]);
    }
}
