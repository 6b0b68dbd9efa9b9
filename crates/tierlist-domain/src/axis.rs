use serde::{Deserialize, Serialize};

/// Color given to rows and columns added after creation.
pub const NEW_ENTRY_COLOR: &str = "#94a3b8";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    Row,
    Col,
}

/// A row or column header. Position in the axis is its tier order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AxisEntry {
    pub label: String,
    pub color: String,
}

impl AxisEntry {
    pub fn new(label: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            color: color.into(),
        }
    }
}

pub const DEFAULT_ROWS: [(&str, &str); 4] = [
    ("Bas", "#ef4444"),
    ("Moyen", "#f59e0b"),
    ("Haut", "#22c55e"),
    ("S-tier", "#6366f1"),
];

pub const DEFAULT_COLS: [(&str, &str); 3] = [
    ("Gauche", "#14b8a6"),
    ("Centre", "#06b6d4"),
    ("Droite", "#a855f7"),
];

impl Axis {
    fn defaults(self) -> &'static [(&'static str, &'static str)] {
        match self {
            Axis::Row => &DEFAULT_ROWS,
            Axis::Col => &DEFAULT_COLS,
        }
    }

    pub fn default_entries(self) -> Vec<AxisEntry> {
        self.defaults()
            .iter()
            .map(|(label, color)| AxisEntry::new(*label, *color))
            .collect()
    }

    /// Default color for the entry at `index`, cycling through the defaults.
    pub fn default_color(self, index: usize) -> &'static str {
        let defaults = self.defaults();
        defaults[index % defaults.len()].1
    }

    /// Label for a freshly appended entry at zero-based `index`.
    pub fn new_entry_label(self, index: usize) -> String {
        match self {
            Axis::Row => format!("Ligne {}", index + 1),
            Axis::Col => format!("Colonne {}", index + 1),
        }
    }
}
