//! Free-text search across designated fields.

use roster_model::{Record, Schema};

use crate::error::Result;

/// Case-insensitive substring search, OR-ed across its fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextSearch {
    fields: Vec<String>,
}

impl TextSearch {
    pub fn new<I, S>(schema: &Schema, fields: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut names = Vec::new();
        for field in fields {
            let field = field.into();
            schema.require(&field)?;
            if !names.contains(&field) {
                names.push(field);
            }
        }
        Ok(Self { fields: names })
    }

    /// Search over every field the schema marks searchable.
    pub fn from_schema(schema: &Schema) -> Self {
        Self {
            fields: schema
                .searchable_fields()
                .map(|field| field.name.clone())
                .collect(),
        }
    }

    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    /// Normalize raw input; `None` means the search is inactive.
    pub fn prepare(query: &str) -> Option<String> {
        let trimmed = query.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_lowercase())
        }
    }

    pub fn matches<R: Record>(&self, record: &R, query: &str) -> bool {
        match Self::prepare(query) {
            Some(needle) => self.matches_prepared(record, &needle),
            None => true,
        }
    }

    /// Match against an already prepared (trimmed, lowercase) needle.
    pub fn matches_prepared<R: Record>(&self, record: &R, needle: &str) -> bool {
        self.fields.iter().any(|field| {
            record
                .field(field)
                .is_some_and(|value| value.contains_folded(needle))
        })
    }
}

#[cfg(test)]
mod tests {
    use roster_model::{FieldDef, RecordId, Row};

    use super::*;

    fn schema() -> Schema {
        Schema::new(vec![
            FieldDef::text("name").searchable(),
            FieldDef::text("email").searchable(),
            FieldDef::text("role"),
        ])
        .unwrap()
    }

    fn user() -> Row {
        Row::new(RecordId::new("u1").unwrap())
            .with("name", "Nguyen Van An")
            .with("email", "an.nguyen@school.edu")
            .with("role", "teacher")
    }

    #[test]
    fn blank_query_matches_everything() {
        let search = TextSearch::from_schema(&schema());
        assert!(search.matches(&user(), ""));
        assert!(search.matches(&user(), "   "));
    }

    #[test]
    fn any_field_may_match() {
        let search = TextSearch::from_schema(&schema());
        assert!(search.matches(&user(), "VAN"));
        assert!(search.matches(&user(), " school.edu "));
        assert!(!search.matches(&user(), "teacher"));
    }

    #[test]
    fn unknown_search_field_fails() {
        assert!(TextSearch::new(&schema(), ["phone"]).is_err());
        let search = TextSearch::new(&schema(), ["role", "role"]).unwrap();
        assert_eq!(search.fields(), &["role".to_string()]);
    }
}
