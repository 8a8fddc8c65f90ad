use super::format::{FormatError, TableFormat};
use super::model::{Column, Table};

// ---------------------------------------------------------------------------
// Whitespace-delimited table parser, driven by a TableFormat descriptor
// ---------------------------------------------------------------------------

/// Parse raw file bytes into a [`Table`] according to `format`.
///
/// The byte payload must be UTF-8 text. Header/footer boilerplate is dropped
/// by fixed line counts, comment and blank lines are skipped, and every
/// remaining line must carry one whitespace-delimited number per column.
pub fn parse_table(bytes: &[u8], format: &TableFormat) -> Result<Table, FormatError> {
    let text = std::str::from_utf8(bytes)?;
    let lines: Vec<&str> = text.lines().collect();

    let skipped = format.skip_header + format.skip_footer;
    if lines.len() <= skipped {
        return Err(FormatError::TooShort {
            format: format.name,
            skipped,
            got: lines.len(),
        });
    }
    let body = &lines[format.skip_header..lines.len() - format.skip_footer];

    // Line numbers reported in errors are 1-based positions in the file.
    let mut rows = body
        .iter()
        .enumerate()
        .map(|(i, line)| (format.skip_header + i + 1, *line))
        .filter(|(_, line)| !line.trim().is_empty())
        .filter(|(_, line)| {
            format
                .comment_prefix
                .is_none_or(|p| !line.trim_start().starts_with(p))
        });

    let names: Vec<String> = if format.header_row {
        let (_, header) = rows
            .next()
            .ok_or(FormatError::MissingHeader { format: format.name })?;
        header.split_whitespace().map(str::to_string).collect()
    } else {
        format.columns.iter().map(|s| s.to_string()).collect()
    };

    let mut values: Vec<Vec<f64>> = vec![Vec::new(); names.len()];
    for (line_no, line) in rows {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        if tokens.len() != names.len() {
            return Err(FormatError::ColumnCount {
                format: format.name,
                line: line_no,
                expected: names.len(),
                got: tokens.len(),
            });
        }
        for (col, token) in tokens.iter().enumerate() {
            let v: f64 = token.parse().map_err(|_| FormatError::Number {
                format: format.name,
                line: line_no,
                column: names[col].clone(),
                token: token.to_string(),
            })?;
            values[col].push(v);
        }
    }

    let columns: Vec<Column> = names
        .into_iter()
        .zip(values)
        .map(|(name, vals)| Column::new(name, vals))
        .collect();

    let mut table = Table::from_columns(columns)?;
    table.apply_units(format.units);
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::format::{LOG_FORMAT, MSD_FORMAT, RDF_FORMAT};

    /// A minimal log file: 37 junk lines, header row, data, 48 junk lines.
    fn fake_log(data_rows: &[&str]) -> String {
        let mut text = String::new();
        for i in 0..37 {
            text.push_str(&format!("LAMMPS setup line {i}\n"));
        }
        text.push_str("Step Time Temp Density KinEng PotEng TotEng Volume\n");
        for row in data_rows {
            text.push_str(row);
            text.push('\n');
        }
        for i in 0..48 {
            text.push_str(&format!("Loop time summary {i}\n"));
        }
        text
    }

    #[test]
    fn log_header_row_names_columns() {
        let text = fake_log(&[
            "0 0.0 300.0 0.997 100.0 -500.0 -400.0 15000.0",
            "100 100.0 301.0 0.998 101.0 -501.0 -400.0 15010.0",
        ]);
        let table = parse_table(text.as_bytes(), &LOG_FORMAT).unwrap();

        assert_eq!(table.len(), 2);
        let names: Vec<&str> = table.columns().iter().map(|c| c.name.as_str()).collect();
        assert_eq!(
            names,
            ["Step", "Time", "Temp", "Density", "KinEng", "PotEng", "TotEng", "Volume"]
        );
        assert_eq!(table.column("Temp").unwrap().unit.as_deref(), Some("K"));
        assert_eq!(table.column("Temp").unwrap().values[1], 301.0);
    }

    #[test]
    fn log_too_short_is_an_error() {
        let err = parse_table(b"only\nfour\nshort\nlines\n", &LOG_FORMAT).unwrap_err();
        assert!(matches!(err, FormatError::TooShort { .. }));
    }

    #[test]
    fn msd_comments_skipped_and_fixed_names_assigned() {
        let text = "# fix msd output\n# TimeStep c_msd[1] ...\n\
                    0 0.0 0.0 0.0 0.0\n\
                    1000 1.0 2.0 3.0 6.0\n";
        let table = parse_table(text.as_bytes(), &MSD_FORMAT).unwrap();

        assert_eq!(table.len(), 2);
        assert_eq!(table.column("<R^2>").unwrap().values[1], 6.0);
        assert_eq!(table.column("TimeStep").unwrap().unit.as_deref(), Some("fs"));
    }

    #[test]
    fn rdf_skips_four_preamble_lines() {
        let text = "# RDF output\n# computed by compute rdf\n100 50\n# bins\n\
                    1 0.05 0.0 0.0 0.1 0.0 0.1 0.0 0.0 0.0\n\
                    2 0.15 0.2 0.1 0.3 0.1 0.3 0.1 0.5 0.2\n";
        let table = parse_table(text.as_bytes(), &RDF_FORMAT).unwrap();

        assert_eq!(table.len(), 2);
        assert_eq!(table.columns().len(), 10);
        assert_eq!(table.column("OO RDF").unwrap().values[1], 0.5);
    }

    #[test]
    fn wrong_column_count_reports_line() {
        let text = "# comment\n0 0.0 0.0 0.0\n";
        let err = parse_table(text.as_bytes(), &MSD_FORMAT).unwrap_err();
        match err {
            FormatError::ColumnCount { line, expected, got, .. } => {
                assert_eq!(line, 2);
                assert_eq!(expected, 5);
                assert_eq!(got, 4);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn non_numeric_token_reports_column() {
        let text = "0 0.0 abc 0.0 0.0\n";
        let err = parse_table(text.as_bytes(), &MSD_FORMAT).unwrap_err();
        match err {
            FormatError::Number { column, token, .. } => {
                assert_eq!(column, "<y^2>");
                assert_eq!(token, "abc");
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
