//! Property-based tests for the line partition.

use ifc_filter::filter::{is_info_line, split_lines, OutputPaths};
use proptest::prelude::*;
use std::io::Cursor;

fn ifc_line() -> impl Strategy<Value = String> {
    prop_oneof![
        "#[0-9]{1,4}=IFC(WALL|DOOR|SLAB|CARTESIANPOINT)\\([^\r\n]{0,20}\\);",
        "#[0-9]{1,4}=IFC(PROPERTYSINGLEVALUE|PROPERTYSET)\\([^\r\n]{0,20}\\);",
        "[^\r\n]{0,30}",
    ]
}

fn terminator() -> impl Strategy<Value = &'static str> {
    prop_oneof![Just("\n"), Just("\r"), Just("\r\n")]
}

/// Source lines paired with the terminator that follows each of them.
fn source_lines() -> impl Strategy<Value = Vec<(String, &'static str)>> {
    prop::collection::vec((ifc_line(), terminator()), 0..40).prop_map(|mut lines| {
        // "\r" followed by an empty line ending in "\n" reads back as one "\r\n".
        for i in 1..lines.len() {
            if lines[i - 1].1 == "\r" && lines[i].0.is_empty() && lines[i].1 == "\n" {
                lines[i].1 = "\r\n";
            }
        }
        lines
    })
}

fn content_byte() -> impl Strategy<Value = u8> {
    any::<u8>().prop_filter("no terminator", |b| *b != b'\r' && *b != b'\n')
}

/// Arbitrary bytes without terminators, marker lines mixed in.
fn raw_line() -> impl Strategy<Value = Vec<u8>> {
    prop_oneof![
        prop::collection::vec(content_byte(), 0..30),
        prop::collection::vec(content_byte(), 0..10).prop_map(|mut bytes| {
            bytes.extend_from_slice(b"IFCPROPERTYSET(");
            bytes
        }),
    ]
}

fn split(input: Vec<u8>) -> (Vec<u8>, Vec<u8>) {
    let paths = OutputPaths::derive("model.ifc").unwrap();
    let mut filtered = Vec::new();
    let mut info = Vec::new();
    split_lines(Cursor::new(input), &mut filtered, &mut info, &paths).unwrap();
    (filtered, info)
}

fn run(lines: &[(String, &'static str)]) -> (Vec<String>, Vec<String>) {
    let input: String = lines
        .iter()
        .map(|(line, end)| format!("{line}{end}"))
        .collect();
    let (filtered, info) = split(input.into_bytes());

    let collect = |bytes: Vec<u8>| -> Vec<String> {
        let text = String::from_utf8(bytes).unwrap();
        assert!(text.is_empty() || text.ends_with('\n'));
        assert!(!text.contains('\r'));
        text.lines().map(str::to_string).collect()
    };
    (collect(filtered), collect(info))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn prop_every_line_lands_in_exactly_one_output(lines in source_lines()) {
        let (filtered, info) = run(&lines);

        prop_assert_eq!(filtered.len() + info.len(), lines.len());

        let mut merged: Vec<String> = filtered.iter().chain(info.iter()).cloned().collect();
        let mut expected: Vec<String> = lines.iter().map(|(line, _)| line.clone()).collect();
        merged.sort();
        expected.sort();
        prop_assert_eq!(merged, expected);
    }

    #[test]
    fn prop_outputs_keep_source_order(lines in source_lines()) {
        let (filtered, info) = run(&lines);

        let expected_info: Vec<String> = lines
            .iter()
            .filter(|(line, _)| is_info_line(line))
            .map(|(line, _)| line.clone())
            .collect();
        let expected_filtered: Vec<String> = lines
            .iter()
            .filter(|(line, _)| !is_info_line(line))
            .map(|(line, _)| line.clone())
            .collect();

        prop_assert_eq!(info, expected_info);
        prop_assert_eq!(filtered, expected_filtered);
    }

    #[test]
    fn prop_raw_bytes_are_copied_unchanged(lines in prop::collection::vec(raw_line(), 0..20)) {
        let mut input = Vec::new();
        let mut expected_filtered = Vec::new();
        let mut expected_info = Vec::new();
        for line in &lines {
            input.extend_from_slice(line);
            input.push(b'\n');
            let target = if is_info_line(line) {
                &mut expected_info
            } else {
                &mut expected_filtered
            };
            target.extend_from_slice(line);
            target.push(b'\n');
        }

        let (filtered, info) = split(input);

        prop_assert_eq!(filtered, expected_filtered);
        prop_assert_eq!(info, expected_info);
    }

    #[test]
    fn prop_info_iff_marker_present(line in ifc_line()) {
        let has_marker = line.contains("IFCPROPERTYSINGLEVALUE") || line.contains("IFCPROPERTYSET");
        prop_assert_eq!(is_info_line(&line), has_marker);
    }
}
