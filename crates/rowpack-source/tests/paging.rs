use proptest::prelude::*;

use rowpack_model::{CellValue, Column, Filter, Sort, TableMetadata};
use rowpack_source::{MemorySource, RowSource};

fn source_with(values: &[i64]) -> MemorySource {
    let metadata = TableMetadata::new(vec![Column::integer("ID"), Column::text("TEXT")]);
    let rows = values
        .iter()
        .map(|value| {
            vec![
                CellValue::Integer(*value),
                CellValue::text(format!("value {value}")),
            ]
        })
        .collect();
    MemorySource::new(metadata, rows).expect("valid rows")
}

/// Fetch every row in pages of `page_size`, advancing the offset by the
/// number of rows actually returned.
fn fetch_paged(
    source: &MemorySource,
    filter: Option<&Filter>,
    sort: Option<&Sort>,
    page_size: usize,
) -> Vec<Vec<CellValue>> {
    let mut rows = Vec::new();
    let mut offset = 0;
    loop {
        let page = source
            .fetch(filter, sort, offset, Some(page_size))
            .expect("fetch page");
        offset += page.len();
        let done = !page.has_more;
        rows.extend(page.rows);
        if done {
            break;
        }
    }
    rows
}

proptest! {
    #[test]
    fn paged_fetch_equals_unbounded_fetch(
        values in proptest::collection::vec(-1000i64..1000, 0..200),
        page_size in 1usize..50,
    ) {
        let source = source_with(&values);
        let unbounded = source.fetch(None, None, 0, None).expect("fetch all");
        prop_assert!(!unbounded.has_more);
        prop_assert_eq!(fetch_paged(&source, None, None, page_size), unbounded.rows);
    }

    #[test]
    fn paged_fetch_is_stable_under_filter_and_sort(
        values in proptest::collection::vec(-100i64..100, 0..150),
        page_size in 1usize..40,
    ) {
        let source = source_with(&values);
        let filter = Filter::greater_or_equal("ID", CellValue::Integer(0));
        let sort = Sort::by(["ID"]);

        let unbounded = source
            .fetch(Some(&filter), Some(&sort), 0, None)
            .expect("fetch all");
        let paged = fetch_paged(&source, Some(&filter), Some(&sort), page_size);
        prop_assert_eq!(paged, unbounded.rows);
    }
}

#[test]
fn paged_offsets_neither_skip_nor_duplicate() {
    let values: Vec<i64> = (0..37).collect();
    let source = source_with(&values);

    let rows = fetch_paged(&source, None, None, 10);
    let ids: Vec<i64> = rows
        .iter()
        .map(|row| match row[0] {
            CellValue::Integer(id) => id,
            ref other => panic!("unexpected cell {other:?}"),
        })
        .collect();
    assert_eq!(ids, values);
}
