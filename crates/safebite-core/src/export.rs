//! CSV export for the dashboard tables

use crate::Result;

/// Build CSV text from a header row and string rows.
///
/// Fields containing commas, quotes, or newlines are wrapped in double
/// quotes with embedded quotes doubled.
pub fn csv_string(headers: &[&str], rows: &[Vec<String>]) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());

    writer.write_record(headers)?;
    for row in rows {
        writer.write_record(row)?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| crate::Error::Export(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| crate::Error::Export(e.to_string()))
}

/// Percent-encoded `data:` URL carrying CSV text, usable as a download
/// anchor's `href`
#[must_use]
pub fn csv_data_url(csv: &str) -> String {
    format!("data:text/csv;charset=utf-8,{}", urlencoding::encode(csv))
}

#[cfg(test)]
#[allow(clippy::missing_panics_doc)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_plain_rows() {
        let csv = csv_string(
            &["name", "status"],
            &[
                vec!["Fridge A".to_string(), "active".to_string()],
                vec!["Cold Room".to_string(), "maintenance".to_string()],
            ],
        )
        .unwrap();

        assert_eq!(csv, "name,status\nFridge A,active\nCold Room,maintenance\n");
    }

    #[test]
    fn test_commas_and_quotes_are_escaped() {
        let csv = csv_string(
            &["item", "note"],
            &[vec![
                "milk, whole".to_string(),
                "flagged \"at risk\"".to_string(),
            ]],
        )
        .unwrap();

        assert_eq!(csv, "item,note\n\"milk, whole\",\"flagged \"\"at risk\"\"\"\n");
    }

    #[test]
    fn test_embedded_newline_is_quoted() {
        let csv = csv_string(&["note"], &[vec!["line one\nline two".to_string()]]).unwrap();
        assert_eq!(csv, "note\n\"line one\nline two\"\n");
    }

    #[test]
    fn test_headers_only() {
        let csv = csv_string(&["a", "b"], &[]).unwrap();
        assert_eq!(csv, "a,b\n");
    }

    #[test]
    fn test_data_url_is_percent_encoded() {
        let url = csv_data_url("a,b\n1,2\n");

        assert!(url.starts_with("data:text/csv;charset=utf-8,"));
        assert!(url.contains("a%2Cb"));
        assert!(url.contains("%0A"));
        assert!(!url.contains('\n'));
    }
}
