use serde::{Deserialize, Serialize};

/// Closed set of skill groupings. Anything outside it fails deserialization
/// at the persistence boundary.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillCategory {
    Frontend,
    Backend,
    Devops,
    Database,
    Other,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    /// Client-generated opaque id; uniqueness is not server-enforced.
    pub id: String,
    pub name: String,
    /// Proficiency, 1 to 5.
    pub level: u8,
    pub category: SkillCategory,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_tags_are_lowercase() {
        let skill = Skill {
            id: "1700000000000-ab12".into(),
            name: "Rust".into(),
            level: 4,
            category: SkillCategory::Backend,
        };
        let json = serde_json::to_value(&skill).unwrap();
        assert_eq!(json["category"], "backend");
    }

    #[test]
    fn unknown_category_fails_to_parse() {
        let raw = r#"{"id": "1", "name": "X", "level": 3, "category": "cooking"}"#;
        assert!(serde_json::from_str::<Skill>(raw).is_err());
    }
}
