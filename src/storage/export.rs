//! CSV export and JSON import
//!
//! Export always covers the full canonical sequence, never the filtered
//! view. Import parses the same array-of-objects schema as the store file;
//! the merge itself is the session's job.

use std::fs;
use std::path::Path;

use crate::core::models::Student;
use crate::storage::DataError;

/// Fixed CSV header, matching the grid columns.
pub const CSV_HEADER: &str = "Фамилия,Имя,Отчество,Курс,Группа,Дата рождения,Email";

/// Write all records as CSV: the header line, then one comma-joined line per
/// record with the birth date as `dd.mm.yyyy`.
///
/// Fields are not quoted or escaped, so an embedded comma shifts columns.
/// This matches the historical export format and is kept as-is.
pub fn export_csv(path: &Path, students: &[Student]) -> Result<(), DataError> {
    let mut out = String::new();
    out.push_str(CSV_HEADER);
    out.push('\n');

    for s in students {
        out.push_str(&format!(
            "{},{},{},{},{},{},{}\n",
            s.last_name,
            s.first_name,
            s.middle_name,
            s.course,
            s.group,
            s.birth_date.format("%d.%m.%Y"),
            s.email,
        ));
    }

    fs::write(path, out).map_err(DataError::FileWrite)?;
    tracing::info!(count = students.len(), path = %path.display(), "csv exported");
    Ok(())
}

/// Parse an import file into records.
///
/// A document that is not a JSON array of student objects (including a bare
/// `null`) is a [`DataError::Parse`]; an empty array is the distinct
/// [`DataError::EmptyImport`] notice. Records are taken as-is and are NOT
/// passed through the validator.
pub fn import_json(path: &Path) -> Result<Vec<Student>, DataError> {
    let content = fs::read_to_string(path).map_err(DataError::FileRead)?;
    let students: Vec<Student> = serde_json::from_str(&content).map_err(DataError::Parse)?;
    if students.is_empty() {
        return Err(DataError::EmptyImport);
    }
    tracing::info!(count = students.len(), path = %path.display(), "import parsed");
    Ok(students)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use tempfile::tempdir;

    fn student(last_name: &str) -> Student {
        Student {
            last_name: last_name.to_string(),
            first_name: "Иван".to_string(),
            middle_name: "Иванович".to_string(),
            course: 2,
            group: "ПИ-21".to_string(),
            birth_date: NaiveDate::from_ymd_opt(1995, 5, 5).unwrap(),
            email: "abc@gmail.com".to_string(),
        }
    }

    #[test]
    fn test_empty_export_writes_only_the_header() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("students.csv");

        export_csv(&path, &[]).unwrap();
        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content, format!("{CSV_HEADER}\n"));
    }

    #[test]
    fn test_row_format_and_date_formatting() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("students.csv");

        export_csv(&path, &[student("Иванов")]).unwrap();
        let content = std::fs::read_to_string(&path).unwrap();
        let mut lines = content.lines();
        assert_eq!(lines.next(), Some(CSV_HEADER));
        assert_eq!(
            lines.next(),
            Some("Иванов,Иван,Иванович,2,ПИ-21,05.05.1995,abc@gmail.com")
        );
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn test_embedded_commas_are_not_escaped() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("students.csv");

        let mut s = student("Иванов");
        s.group = "A,1".to_string();
        export_csv(&path, &[s]).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let row = content.lines().nth(1).unwrap();
        // The comma goes through raw and shifts the column count.
        assert_eq!(row.split(',').count(), 8);
    }

    #[test]
    fn test_import_of_empty_array_is_the_no_data_notice() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("import.json");
        std::fs::write(&path, "[]").unwrap();

        assert!(matches!(import_json(&path), Err(DataError::EmptyImport)));
    }

    #[test]
    fn test_import_of_null_or_garbage_is_a_parse_error() {
        let dir = tempdir().unwrap();

        let path = dir.path().join("null.json");
        std::fs::write(&path, "null").unwrap();
        assert!(matches!(import_json(&path), Err(DataError::Parse(_))));

        let path = dir.path().join("garbage.json");
        std::fs::write(&path, "{\"LastName\": 1}").unwrap();
        assert!(matches!(import_json(&path), Err(DataError::Parse(_))));
    }

    #[test]
    fn test_import_of_missing_file_is_a_read_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nowhere.json");
        assert!(matches!(import_json(&path), Err(DataError::FileRead(_))));
    }

    #[test]
    fn test_import_parses_the_store_schema() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("import.json");
        std::fs::write(
            &path,
            r#"[{
                "LastName": "Петров",
                "FirstName": "Пётр",
                "MiddleName": "Петрович",
                "Course": 3,
                "Group": "B1",
                "BirthDate": "2000-01-01",
                "Email": "p@mail.ru"
            }]"#,
        )
        .unwrap();

        let students = import_json(&path).unwrap();
        assert_eq!(students.len(), 1);
        assert_eq!(students[0].last_name, "Петров");
        assert_eq!(
            students[0].birth_date,
            NaiveDate::from_ymd_opt(2000, 1, 1).unwrap()
        );
    }
}
