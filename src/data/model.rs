use super::format::FormatError;

// ---------------------------------------------------------------------------
// RawUpload – one uploaded file, consumed per pipeline invocation
// ---------------------------------------------------------------------------

/// An uploaded file: opaque bytes plus a content-type tag taken from the
/// file extension. Retained so threshold changes can re-run the pipeline
/// without re-reading the file.
#[derive(Debug, Clone)]
pub struct RawUpload {
    content_type: String,
    bytes: Vec<u8>,
}

impl RawUpload {
    pub fn new(content_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        RawUpload {
            content_type: content_type.into(),
            bytes,
        }
    }

    pub fn content_type(&self) -> &str {
        &self.content_type
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }
}

// ---------------------------------------------------------------------------
// Column / Table – named numeric columns of equal length
// ---------------------------------------------------------------------------

/// One named numeric column with an optional semantic unit.
#[derive(Debug, Clone)]
pub struct Column {
    pub name: String,
    pub unit: Option<String>,
    pub values: Vec<f64>,
}

impl Column {
    pub fn new(name: impl Into<String>, values: Vec<f64>) -> Self {
        Column {
            name: name.into(),
            unit: None,
            values,
        }
    }

    pub fn with_unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = Some(unit.into());
        self
    }

    /// Axis label in `Name (unit)` form, or just the name.
    pub fn label(&self) -> String {
        match &self.unit {
            Some(u) => format!("{} ({u})", self.name),
            None => self.name.clone(),
        }
    }
}

/// An ordered set of equal-length, uniquely named numeric columns.
#[derive(Debug, Clone, Default)]
pub struct Table {
    columns: Vec<Column>,
}

impl Table {
    /// Build a table, enforcing unique names and equal column lengths.
    pub fn from_columns(columns: Vec<Column>) -> Result<Self, FormatError> {
        let mut table = Table::default();
        for col in columns {
            table.push_column(col)?;
        }
        Ok(table)
    }

    /// Append a column, preserving the table invariants.
    pub fn push_column(&mut self, column: Column) -> Result<(), FormatError> {
        if self.columns.iter().any(|c| c.name == column.name) {
            return Err(FormatError::DuplicateColumn(column.name));
        }
        if let Some(first) = self.columns.first() {
            if first.values.len() != column.values.len() {
                return Err(FormatError::Ragged {
                    column: column.name,
                    expected: first.values.len(),
                    got: column.values.len(),
                });
            }
        }
        self.columns.push(column);
        Ok(())
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.columns.first().map_or(0, |c| c.values.len())
    }

    /// Whether the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// Like [`Table::column`] but a missing column is an error.
    pub fn require(&self, name: &str) -> Result<&Column, FormatError> {
        self.column(name)
            .ok_or_else(|| FormatError::MissingColumn(name.to_string()))
    }

    /// Attach semantic units from a `(column, unit)` list; unknown names are
    /// ignored so one unit list can serve several format revisions.
    pub fn apply_units(&mut self, units: &[(&str, &str)]) {
        for col in &mut self.columns {
            if let Some((_, unit)) = units.iter().find(|(name, _)| *name == col.name) {
                col.unit = Some((*unit).to_string());
            }
        }
    }

    /// Multiply every value of a column by `factor`, optionally re-labelling
    /// its unit (unit conversions change both numbers and unit tag).
    pub fn scale_column(
        &mut self,
        name: &str,
        factor: f64,
        unit: Option<&str>,
    ) -> Result<(), FormatError> {
        let col = self
            .columns
            .iter_mut()
            .find(|c| c.name == name)
            .ok_or_else(|| FormatError::MissingColumn(name.to_string()))?;
        for v in &mut col.values {
            *v *= factor;
        }
        if let Some(u) = unit {
            col.unit = Some(u.to_string());
        }
        Ok(())
    }

    /// Derive a table keeping only rows where `column >= threshold`.
    /// Row count can only shrink; column set and order are unchanged.
    pub fn filter_min(&self, column: &str, threshold: f64) -> Result<Table, FormatError> {
        let key = self.require(column)?;
        let keep: Vec<usize> = key
            .values
            .iter()
            .enumerate()
            .filter(|(_, &v)| v >= threshold)
            .map(|(i, _)| i)
            .collect();

        let columns = self
            .columns
            .iter()
            .map(|c| Column {
                name: c.name.clone(),
                unit: c.unit.clone(),
                values: keep.iter().map(|&i| c.values[i]).collect(),
            })
            .collect();
        Ok(Table { columns })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_column_table() -> Table {
        Table::from_columns(vec![
            Column::new("Time", vec![0.0, 100.0, 200.0, 300.0]),
            Column::new("Temp", vec![290.0, 300.0, 310.0, 305.0]),
        ])
        .unwrap()
    }

    #[test]
    fn duplicate_column_names_rejected() {
        let result = Table::from_columns(vec![
            Column::new("Time", vec![0.0]),
            Column::new("Time", vec![1.0]),
        ]);
        assert!(matches!(result, Err(FormatError::DuplicateColumn(_))));
    }

    #[test]
    fn ragged_columns_rejected() {
        let result = Table::from_columns(vec![
            Column::new("Time", vec![0.0, 1.0]),
            Column::new("Temp", vec![1.0]),
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn filter_min_keeps_rows_at_or_above_threshold() {
        let table = two_column_table();
        let filtered = table.filter_min("Time", 100.0).unwrap();

        assert_eq!(filtered.len(), 3);
        let time = filtered.column("Time").unwrap();
        assert!(time.values.iter().all(|&t| t >= 100.0));
        // No qualifying row from the source is dropped.
        let source_qualifying = table
            .column("Time")
            .unwrap()
            .values
            .iter()
            .filter(|&&t| t >= 100.0)
            .count();
        assert_eq!(filtered.len(), source_qualifying);
    }

    #[test]
    fn filter_min_never_grows() {
        let table = two_column_table();
        assert!(table.filter_min("Time", -1.0).unwrap().len() <= table.len());
        assert_eq!(table.filter_min("Time", 1e9).unwrap().len(), 0);
    }

    #[test]
    fn scale_column_updates_values_and_unit() {
        let mut table = two_column_table();
        table.scale_column("Temp", 2.0, Some("K")).unwrap();
        let temp = table.column("Temp").unwrap();
        assert_eq!(temp.values[0], 580.0);
        assert_eq!(temp.unit.as_deref(), Some("K"));
        assert_eq!(temp.label(), "Temp (K)");
    }
}
