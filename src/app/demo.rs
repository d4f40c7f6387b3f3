//! Static sample data of the demo page.

use crate::domain::{Column, Field, Row};

#[must_use]
pub fn sample_rows() -> Vec<Row> {
    [(1, "Alice", 25), (2, "Bob", 30), (3, "Charlie", 20)]
        .into_iter()
        .map(|(id, name, age)| {
            Row::new()
                .with("id", id)
                .with("name", name)
                .with("age", age)
        })
        .collect()
}

#[must_use]
pub fn sample_columns() -> Vec<Column> {
    vec![
        Column::new("id", "ID").sortable().filterable(),
        Column::new("name", "Name").sortable().filterable(),
        Column::new("age", "Age").sortable(),
    ]
}

#[must_use]
pub fn sample_fields() -> Vec<Field> {
    vec![
        Field::text("name", "Name").with_placeholder("Enter your name"),
        Field::textarea("feedback", "Feedback").with_placeholder("Enter your feedback"),
        Field::select("rating", "Rating", ["1", "2", "3", "4", "5"]),
    ]
}
