use crate::domain::model::{ExportFormat, SubscriberRecord};
use crate::utils::error::{Result, SubscriberError};
use serde::Serialize;
use serde_json::ser::PrettyFormatter;

/// CSV with the fixed header row and CRLF terminators on every platform.
pub fn render_csv(records: &[SubscriberRecord]) -> Result<Vec<u8>> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .terminator(csv::Terminator::CRLF)
        .from_writer(Vec::new());

    // 手動寫表頭，空清單時也有欄位名稱
    writer.write_record(SubscriberRecord::FIELDS)?;
    for record in records {
        writer.write_record(record.csv_row())?;
    }

    writer
        .into_inner()
        .map_err(|e| SubscriberError::Io(e.into_error()))
}

/// A single JSON array indented with four spaces.
pub fn render_json(records: &[SubscriberRecord]) -> Result<Vec<u8>> {
    let mut buffer = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buffer, formatter);
    records.serialize(&mut serializer)?;
    Ok(buffer)
}

pub fn render(format: ExportFormat, records: &[SubscriberRecord]) -> Result<Vec<u8>> {
    match format {
        ExportFormat::Csv => render_csv(records),
        ExportFormat::Json => render_json(records),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn records() -> Vec<SubscriberRecord> {
        vec![
            SubscriberRecord {
                id: Some(json!("s1")),
                email: Some(json!("a@x.com")),
                created_at: Some(json!("2024-01-02T03:04:05Z")),
                mode: Some(json!("email")),
                phone_number: None,
            },
            SubscriberRecord {
                id: Some(json!("s2")),
                email: None,
                created_at: None,
                mode: Some(json!("sms")),
                phone_number: Some(json!("+1, 555")),
            },
        ]
    }

    #[test]
    fn test_csv_layout() {
        let csv = String::from_utf8(render_csv(&records()).unwrap()).unwrap();

        assert_eq!(
            csv,
            "id,email,created_at,mode,phone_number\r\n\
             s1,a@x.com,2024-01-02T03:04:05Z,email,\r\n\
             s2,,,sms,\"+1, 555\"\r\n"
        );
    }

    #[test]
    fn test_csv_header_only_for_empty_list() {
        let csv = String::from_utf8(render_csv(&[]).unwrap()).unwrap();
        assert_eq!(csv, "id,email,created_at,mode,phone_number\r\n");
    }

    #[test]
    fn test_csv_writes_non_string_values_as_text() {
        let record = SubscriberRecord {
            id: Some(json!("s3")),
            email: None,
            created_at: Some(serde_json::Value::Null),
            mode: Some(json!("sms")),
            phone_number: Some(json!(15550100)),
        };

        let csv = String::from_utf8(render_csv(&[record]).unwrap()).unwrap();

        assert_eq!(
            csv,
            "id,email,created_at,mode,phone_number\r\ns3,,,sms,15550100\r\n"
        );
    }

    #[test]
    fn test_csv_parses_back_to_rows() {
        let bytes = render_csv(&records()).unwrap();
        let mut reader = csv::Reader::from_reader(bytes.as_slice());

        let headers = reader.headers().unwrap().clone();
        assert_eq!(headers.iter().collect::<Vec<_>>(), SubscriberRecord::FIELDS);

        let rows: Vec<Vec<String>> = reader
            .records()
            .map(|row| row.unwrap().iter().map(str::to_string).collect())
            .collect();
        let expected: Vec<Vec<String>> = records()
            .iter()
            .map(|record| record.csv_row().to_vec())
            .collect();
        assert_eq!(rows, expected);
    }

    #[test]
    fn test_json_uses_four_space_indent_and_field_order() {
        let json = String::from_utf8(render_json(&records()[..1]).unwrap()).unwrap();

        assert_eq!(
            json,
            "[\n    {\n        \"id\": \"s1\",\n        \"email\": \"a@x.com\",\n        \
             \"created_at\": \"2024-01-02T03:04:05Z\",\n        \"mode\": \"email\",\n        \
             \"phone_number\": null\n    }\n]"
        );
    }

    #[test]
    fn test_json_parses_back_to_records() {
        let bytes = render(ExportFormat::Json, &records()).unwrap();
        let parsed: Vec<SubscriberRecord> = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(parsed, records());
    }
}
