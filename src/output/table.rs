//! Table output formatting

use tabled::{
    Table, Tabled,
    builder::Builder,
    settings::{Alignment, Modify, Style, object::Rows},
};

/// Format data as a table
pub fn format_table<T: Tabled>(data: &[T]) -> String {
    if data.is_empty() {
        return "No results found.".to_string();
    }

    let mut table = Table::new(data);
    table
        .with(Style::rounded())
        .with(Modify::new(Rows::first()).with(Alignment::center()));

    table.to_string()
}

/// Format label/value pairs as a two-column table without a header
pub fn format_pairs(pairs: &[(&str, String)]) -> String {
    let mut builder = Builder::default();
    for (label, value) in pairs {
        builder.push_record([label.to_string(), value.clone()]);
    }

    let mut table = builder.build();
    table.with(Style::rounded());
    table.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Tabled)]
    struct TestRow {
        #[tabled(rename = "ID")]
        id: String,
        #[tabled(rename = "BELT")]
        belt: String,
    }

    #[test]
    fn test_format_table_empty() {
        let items: Vec<TestRow> = vec![];
        assert_eq!(format_table(&items), "No results found.");
    }

    #[test]
    fn test_format_table_rows() {
        let items = vec![
            TestRow {
                id: "1".to_string(),
                belt: "White Belt".to_string(),
            },
            TestRow {
                id: "2".to_string(),
                belt: "Yellow Belt".to_string(),
            },
        ];

        let result = format_table(&items);

        assert!(result.contains("ID"));
        assert!(result.contains("BELT"));
        assert!(result.contains("Yellow Belt"));
        // Rounded style uses ╭ for top-left corner
        assert!(result.contains("╭"));
        assert!(result.contains("╰"));
    }

    #[test]
    fn test_format_pairs() {
        let result = format_pairs(&[("Present", "3".to_string()), ("Rate", "75%".to_string())]);
        assert!(result.contains("Present"));
        assert!(result.contains("75%"));
    }
}
