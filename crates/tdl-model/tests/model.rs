//! Tests for tdl-model types.

use serde_json::json;
use tdl_model::{
    CellValue, ColumnType, InferenceOptions, ModelError, Table, build_column, build_table,
    classify,
};

fn defaults() -> InferenceOptions {
    InferenceOptions::default()
}

#[test]
fn inference_scenarios() {
    assert_eq!(classify(&["1", "2", "3"], &defaults()), ColumnType::Int);
    assert_eq!(classify(&["1.5", "2.0"], &defaults()), ColumnType::Float);
    assert_eq!(classify(&["a", "b"], &defaults()), ColumnType::String);
    assert_eq!(classify(&["NaN", "NaN", "NaN"], &defaults()), ColumnType::Empty);
}

#[test]
fn duplicate_names_fail_regardless_of_contents() {
    let cases: [(&[&str], &[&str]); 3] = [
        (&["1", "2"], &["3", "4"]),
        (&["x"], &["1.5", "2.5", "3.5"]),
        (&["NaN"], &["a"]),
    ];
    for (left, right) in cases {
        let a = build_column("a", left).unwrap();
        let b = build_column("a", right).unwrap();
        let err = build_table(vec![a, b]).unwrap_err();
        assert!(matches!(err, ModelError::DuplicateColumnName { .. }));
    }
}

#[test]
fn duplicate_header_names_fail_before_cells_are_parsed() {
    let overflowing =
        Table::from_canonical_lines(&["a,a", "1,99999999999999999999"], &defaults()).unwrap_err();
    assert!(matches!(overflowing, ModelError::DuplicateColumnName { name } if name == "a"));

    let header_only = Table::from_canonical_lines(&["a,a"], &defaults()).unwrap_err();
    assert!(matches!(header_only, ModelError::DuplicateColumnName { name } if name == "a"));
}

#[test]
fn median_matches_sorted_middle() {
    let odd = build_column("odd", &["7", "3", "5", "1", "9"]).unwrap();
    assert_eq!(odd.median(), Some(5.0));

    let even = build_column("even", &["1.0", "4.0", "2.0", "3.0"]).unwrap();
    assert_eq!(even.median(), Some(2.5));
}

#[test]
fn statistics_are_fixed_at_construction() {
    let column = build_column("n", &["2", "4", "4", "6"]).unwrap();
    let stats = column.statistics().clone();
    assert_eq!(stats.mode, CellValue::Int(4));
    assert_eq!(stats.mean, Some(4.0));
    assert_eq!(stats.median, Some(4.0));
    assert_eq!(column.statistics(), &stats);
}

#[test]
fn table_lookups_from_canonical_lines() {
    let lines = [
        "sample,weight,count,notes",
        "s1,1.25,3,",
        "s2,2.75,5,",
        "s3,2.0,3,",
    ];
    let table = Table::from_canonical_lines(&lines, &defaults()).unwrap();

    assert_eq!(table.width(), 4);
    assert_eq!(table.row_count(), 3);
    assert_eq!(
        table.numeric_columns(),
        &["weight".to_string(), "count".to_string()]
    );

    let weight = table.column_by_name("weight").unwrap();
    assert_eq!(weight.value_type(), ColumnType::Float);
    assert_eq!(weight.mean(), Some(2.0));

    let count = table.column_by_name("count").unwrap();
    assert_eq!(count.mode(), &CellValue::Int(3));

    let notes = table.column_by_name("notes").unwrap();
    assert_eq!(notes.value_type(), ColumnType::Empty);
    assert_eq!(notes.mean(), None);
}

#[test]
fn numeric_column_serializes_with_statistics() {
    let table = Table::from_canonical_lines(&["n", "1", "3"], &defaults()).unwrap();
    let value = serde_json::to_value(&table).unwrap();
    assert_eq!(
        value,
        json!({
            "columns": [{
                "name": "n",
                "values": [1, 3],
                "value_type": "int",
                "mode": 1,
                "mean": 2.0,
                "median": 2.0
            }]
        })
    );
}

#[test]
fn empty_column_serializes_null_values() {
    let column = build_column("blank", &["", ""]).unwrap();
    let value = serde_json::to_value(&column).unwrap();
    assert_eq!(value["values"], json!([null, null]));
    assert_eq!(value["value_type"], json!("empty"));
    assert_eq!(value["mode"], json!(null));
}

#[test]
fn text_table_json_shape() {
    let table = Table::from_canonical_lines(&["s", "a", "b", "b"], &defaults()).unwrap();
    insta::assert_json_snapshot!(table, @r#"
    {
      "columns": [
        {
          "name": "s",
          "values": [
            "a",
            "b",
            "b"
          ],
          "value_type": "string",
          "mode": "b",
          "mean": null,
          "median": null
        }
      ]
    }
    "#);
}

#[test]
fn tables_are_shareable_across_threads() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Table>();

    let table = Table::from_canonical_lines(&["a,b", "1,x", "2,y"], &defaults()).unwrap();
    let table = std::sync::Arc::new(table);
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let table = std::sync::Arc::clone(&table);
            std::thread::spawn(move || table.numeric_columns().to_vec())
        })
        .collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap(), vec!["a".to_string()]);
    }
}
