//! Wire shapes returned by the REST interface.

use serde::Deserialize;

use mkb_core::traits::AssignmentRecord;

/// Embedded `poles` resource.
#[derive(Debug, Clone, Deserialize)]
pub struct EmbeddedPole {
    /// Pole name.
    pub name: String,
}

/// One row of `select=role_level,poles!inner(name)`.
#[derive(Debug, Clone, Deserialize)]
pub struct RestAssignmentRow {
    /// Raw role level; null when unset.
    #[serde(default)]
    pub role_level: Option<i32>,
    /// The joined pole.
    pub poles: EmbeddedPole,
}

impl From<RestAssignmentRow> for AssignmentRecord {
    fn from(row: RestAssignmentRow) -> Self {
        Self {
            pole_name: row.poles.name,
            role_level: row.role_level,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_embedded_pole() {
        let rows: Vec<RestAssignmentRow> = serde_json::from_str(
            r#"[{"role_level":3,"poles":{"name":"Stock"}},{"role_level":null,"poles":{"name":"Pricing"}}]"#,
        )
        .unwrap();
        let records: Vec<AssignmentRecord> = rows.into_iter().map(Into::into).collect();
        assert_eq!(records[0].pole_name, "Stock");
        assert_eq!(records[0].role_level, Some(3));
        assert_eq!(records[1].role_level, None);
    }
}
