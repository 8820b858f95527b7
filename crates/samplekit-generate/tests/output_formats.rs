use std::path::PathBuf;

use chrono::NaiveDate;
use serde_json::Value;

use samplekit_generate::output::{write_values, write_values_to_path};
use samplekit_generate::{CategoryPair, GeneratedValue, OutputFormat, Person, SamplingEngine};

fn sample_values() -> Vec<GeneratedValue> {
    vec![
        GeneratedValue::Pair(CategoryPair {
            category: "Volvo".to_string(),
            item: "V70".to_string(),
        }),
        GeneratedValue::Pair(CategoryPair {
            category: "Land Rover".to_string(),
            item: "Range Rover, Sport".to_string(),
        }),
    ]
}

fn render(values: &[GeneratedValue], format: OutputFormat) -> (String, u64) {
    let mut buffer = Vec::new();
    let written = write_values(&mut buffer, values, format).expect("write values");
    (String::from_utf8(buffer).expect("utf8 output"), written)
}

fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("samplekit-{}-{name}", std::process::id()))
}

#[test]
fn text_output_writes_one_line_per_value() {
    let (output, written) = render(&sample_values(), OutputFormat::Text);
    assert_eq!(output, "Volvo V70\nLand Rover Range Rover, Sport\n");
    assert_eq!(written, output.len() as u64);
}

#[test]
fn csv_output_uses_kind_header_and_quotes_commas() {
    let (output, written) = render(&sample_values(), OutputFormat::Csv);
    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(lines[0], "category,item");
    assert_eq!(lines[1], "Volvo,V70");
    assert_eq!(lines[2], "Land Rover,\"Range Rover, Sport\"");
    assert_eq!(written, output.len() as u64);
}

#[test]
fn csv_output_for_people_has_name_columns() {
    let values = vec![GeneratedValue::Person(Person {
        first_name: "Astrid".to_string(),
        last_name: "Lindgren".to_string(),
    })];
    let (output, _) = render(&values, OutputFormat::Csv);
    assert_eq!(output, "first_name,last_name\nAstrid,Lindgren\n");
}

#[test]
fn json_output_is_one_document_per_line() {
    let noon = NaiveDate::from_ymd_opt(1985, 6, 1)
        .and_then(|date| date.and_hms_opt(12, 30, 0))
        .expect("valid timestamp");
    let values = vec![
        GeneratedValue::Int(7),
        GeneratedValue::Text("ABC123".to_string()),
        GeneratedValue::Timestamp(noon),
    ];
    let (output, _) = render(&values, OutputFormat::Json);
    let documents: Vec<Value> = output
        .lines()
        .map(|line| serde_json::from_str(line).expect("json line"))
        .collect();
    assert_eq!(documents[0], Value::from(7));
    assert_eq!(documents[1], Value::from("ABC123"));
    assert_eq!(documents[2], Value::from("1985-06-01T12:30:00"));
}

#[test]
fn empty_batches_write_nothing() {
    for format in [OutputFormat::Text, OutputFormat::Json, OutputFormat::Csv] {
        let (output, written) = render(&[], format);
        assert!(output.is_empty(), "{format}");
        assert_eq!(written, 0);
    }
}

#[test]
fn output_format_parses_names() {
    assert_eq!("csv".parse::<OutputFormat>().ok(), Some(OutputFormat::Csv));
    assert_eq!("json".parse::<OutputFormat>().ok(), Some(OutputFormat::Json));
    assert_eq!(OutputFormat::default(), OutputFormat::Text);
    assert!("xml".parse::<OutputFormat>().is_err());
}

#[test]
fn engine_batches_write_to_path() {
    let mut engine = SamplingEngine::seeded(21);
    let colors: Vec<GeneratedValue> = engine
        .colors(5)
        .expect("colors")
        .into_iter()
        .map(GeneratedValue::Text)
        .collect();

    let path = temp_path("colors.csv");
    let written = write_values_to_path(&path, &colors, OutputFormat::Csv).expect("write file");
    let content = std::fs::read_to_string(&path).expect("read back");
    std::fs::remove_file(&path).ok();

    assert_eq!(written, content.len() as u64);
    assert_eq!(content.lines().count(), 6);
    assert_eq!(content.lines().next(), Some("value"));
}
