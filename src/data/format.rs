use thiserror::Error;

// ---------------------------------------------------------------------------
// TableFormat – layout descriptor for a fixed simulation-tool text format
// ---------------------------------------------------------------------------

/// Describes how one of the fixed LAMMPS text formats is laid out, so that
/// skip counts and column orders live in data rather than in parser code.
/// A new tool-output version becomes a new descriptor, not a code change.
#[derive(Debug, Clone, Copy)]
pub struct TableFormat {
    /// Short name used in error messages and log lines.
    pub name: &'static str,
    /// Fixed number of boilerplate lines to drop from the top of the file.
    pub skip_header: usize,
    /// Fixed number of boilerplate lines to drop from the bottom.
    pub skip_footer: usize,
    /// Whether the first remaining line names the columns.
    pub header_row: bool,
    /// Lines starting with this prefix are ignored entirely.
    pub comment_prefix: Option<&'static str>,
    /// Fixed column names for formats without a header row.
    pub columns: &'static [&'static str],
    /// Semantic units attached to columns after parsing (column → unit).
    pub units: &'static [(&'static str, &'static str)],
}

/// Thermodynamic log: 37 boilerplate lines above the header row, 48 below
/// the last data row, columns named by the header row itself.
pub const LOG_FORMAT: TableFormat = TableFormat {
    name: "log",
    skip_header: 37,
    skip_footer: 48,
    header_row: true,
    comment_prefix: None,
    columns: &[],
    units: &[
        ("Time", "fs"),
        ("Temp", "K"),
        ("Density", "g/cm³"),
        ("KinEng", "kcal/mol"),
        ("PotEng", "kcal/mol"),
        ("TotEng", "kcal/mol"),
        ("Volume", "Å³"),
    ],
};

/// Mean-squared-displacement series from `fix msd`: `#` comments, no header
/// row, five columns in fixed order.
pub const MSD_FORMAT: TableFormat = TableFormat {
    name: "msd",
    skip_header: 0,
    skip_footer: 0,
    header_row: false,
    comment_prefix: Some("#"),
    columns: &["TimeStep", "<x^2>", "<y^2>", "<z^2>", "<R^2>"],
    units: &[
        ("TimeStep", "fs"),
        ("<x^2>", "Å²"),
        ("<y^2>", "Å²"),
        ("<z^2>", "Å²"),
        ("<R^2>", "Å²"),
    ],
};

/// Radial distribution function from `compute rdf`: four preamble lines,
/// then ten columns (row index, distance, and four RDF/CN pairs).
pub const RDF_FORMAT: TableFormat = TableFormat {
    name: "rdf",
    skip_header: 4,
    skip_footer: 0,
    header_row: false,
    comment_prefix: None,
    columns: &[
        "Row", "Distance", "HH RDF", "HH CN", "HO RDF", "HO CN", "OH RDF", "OH CN", "OO RDF",
        "OO CN",
    ],
    units: &[("Distance", "Å")],
};

// ---------------------------------------------------------------------------
// FormatError – everything that can go wrong turning bytes into a Table
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum FormatError {
    #[error("file is not valid UTF-8")]
    Utf8(#[from] std::str::Utf8Error),

    #[error("{format}: file has {got} lines, needs more than {skipped} boilerplate lines")]
    TooShort { format: &'static str, skipped: usize, got: usize },

    #[error("{format}: missing header row")]
    MissingHeader { format: &'static str },

    #[error("{format} line {line}: expected {expected} columns, found {got}")]
    ColumnCount { format: &'static str, line: usize, expected: usize, got: usize },

    #[error("{format} line {line}, column '{column}': '{token}' is not a number")]
    Number { format: &'static str, line: usize, column: String, token: String },

    #[error("duplicate column name '{0}'")]
    DuplicateColumn(String),

    #[error("column '{column}' has {got} rows, table has {expected}")]
    Ragged { column: String, expected: usize, got: usize },

    #[error("no column named '{0}'")]
    MissingColumn(String),
}
