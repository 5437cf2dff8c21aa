//! Department inference from section names.
//!
//! Sections carry no explicit department; it is read off the name using an
//! ordered list of substring rules. Rules are evaluated top to bottom against
//! the upper-cased name and the first match wins, so `"CSE-AIML"` resolves to
//! `CSE` under the default rules.

use serde::{Deserialize, Serialize};

/// One inference rule: if the upper-cased section name contains `pattern`,
/// the section belongs to `department`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepartmentRule {
    /// Upper-case substring to look for.
    pub pattern: String,
    /// Canonical department tag.
    pub department: String,
}

impl DepartmentRule {
    /// Creates a rule. Both sides are upper-cased.
    pub fn new(pattern: impl AsRef<str>, department: impl AsRef<str>) -> Self {
        Self {
            pattern: pattern.as_ref().to_uppercase(),
            department: department.as_ref().to_uppercase(),
        }
    }

    /// Whether the rule matches an already upper-cased name.
    #[inline]
    fn matches(&self, upper_name: &str) -> bool {
        !self.pattern.is_empty() && upper_name.contains(&self.pattern)
    }
}

/// Ordered rule list, first match wins.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<DepartmentRule>", into = "Vec<DepartmentRule>")]
pub struct DepartmentRules {
    rules: Vec<DepartmentRule>,
}

impl From<Vec<DepartmentRule>> for DepartmentRules {
    fn from(rules: Vec<DepartmentRule>) -> Self {
        Self {
            rules: rules
                .into_iter()
                .map(|r| DepartmentRule::new(r.pattern, r.department))
                .collect(),
        }
    }
}

impl From<DepartmentRules> for Vec<DepartmentRule> {
    fn from(rules: DepartmentRules) -> Self {
        rules.rules
    }
}

impl DepartmentRules {
    /// An empty rule list: every section is unrestricted.
    pub fn empty() -> Self {
        Self { rules: Vec::new() }
    }

    /// Appends a rule at the lowest precedence.
    pub fn with_rule(mut self, pattern: impl AsRef<str>, department: impl AsRef<str>) -> Self {
        self.rules.push(DepartmentRule::new(pattern, department));
        self
    }

    /// Rules in evaluation order.
    pub fn rules(&self) -> &[DepartmentRule] {
        &self.rules
    }

    /// Infers the department of a section name. `None` = unrestricted.
    pub fn infer(&self, section_name: &str) -> Option<&str> {
        if section_name.is_empty() {
            return None;
        }
        let upper = section_name.to_uppercase();
        self.rules
            .iter()
            .find(|r| r.matches(&upper))
            .map(|r| r.department.as_str())
    }
}

impl Default for DepartmentRules {
    fn default() -> Self {
        Self::empty()
            .with_rule("CSE", "CSE")
            .with_rule("AIML", "AIML")
            .with_rule("AI ML", "AIML")
            .with_rule("AI-ML", "AIML")
            .with_rule("ECE", "ECE")
            .with_rule("EEE", "EEE")
            .with_rule("MECH", "MECH")
            .with_rule("CIVIL", "CIVIL")
    }
}
