use super::MenuRecord;
use crate::domain::error::{AppError, Result};

/// The columns of a cleaned [`MenuRecord`] the batch job reads
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuItem {
    pub name: String,
    pub category: String,
    /// Target filename inside the output directory
    pub image: String,
}

impl MenuItem {
    /// Search query for this item: `"<name> <category>"`
    pub fn search_query(&self) -> String {
        format!("{} {}", self.name, self.category)
    }
}

impl TryFrom<&MenuRecord> for MenuItem {
    type Error = AppError;

    fn try_from(record: &MenuRecord) -> Result<Self> {
        let column = |key: &str| {
            record.get(key).map(str::to_string).ok_or_else(|| {
                AppError::ParseError(format!(
                    "Row {} is missing required column '{}'",
                    record.index + 1,
                    key
                ))
            })
        };

        Ok(Self {
            name: column("name")?,
            category: column("category")?,
            image: column("image")?,
        })
    }
}
