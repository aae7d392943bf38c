// ============================================================
// MENU RECORD
// ============================================================
// One dataset row, keyed by column header, in header order

/// A single column of a menu row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuField {
    /// Column header
    pub name: String,

    /// Raw cell value
    pub value: String,
}

impl MenuField {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    fn trimmed(&self) -> Self {
        Self::new(self.name.trim(), self.value.trim())
    }
}

/// A single row of the menu dataset
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuRecord {
    /// Row index (0-based, header excluded)
    pub index: usize,

    /// Fields in header order
    pub fields: Vec<MenuField>,
}

impl MenuRecord {
    pub fn new(index: usize, fields: Vec<MenuField>) -> Self {
        Self { index, fields }
    }

    /// Value of the first column named `key`
    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|f| f.name == key)
            .map(|f| f.value.as_str())
    }

    /// Column names in header order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|f| f.name.as_str())
    }

    /// Copy of this record with surrounding whitespace stripped from every key and value
    pub fn clean(&self) -> Self {
        Self {
            index: self.index,
            fields: self.fields.iter().map(MenuField::trimmed).collect(),
        }
    }
}
