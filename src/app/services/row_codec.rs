//! Spreadsheet row codec for goods registry files
//!
//! Decodes one tabular row into a [`GoodsRecord`] and encodes a record back
//! into its textual cell values for the error report. The column layout is
//! fixed: article, name, count, price, producer, category name.
//!
//! Text fields are captured through each cell's generic textual
//! representation, so a numeric cell round-trips as its canonical rendering
//! rather than its original sheet formatting. That transform is accepted as
//! lossy.

use calamine::Data;

use crate::app::models::GoodsRecord;
use crate::constants::columns;
use crate::{Error, Result};

/// Decode the six fixed columns of a registry row into a goods record.
///
/// Any missing cell or numeric parse failure is a decode error; the caller
/// logs it and drops the row. Decode failures are never tracked in the
/// error collector.
pub fn decode_row(row: &[Data]) -> Result<GoodsRecord> {
    let article = text_cell(row, columns::ARTICLE)?;
    let name = text_cell(row, columns::NAME)?;
    let count = count_cell(row, columns::COUNT)?;
    let price = numeric_cell(row, columns::PRICE)?;
    let producer = text_cell(row, columns::PRODUCER)?;
    let category_name = text_cell(row, columns::CATEGORY_NAME)?;

    Ok(GoodsRecord::new(
        article,
        name,
        count,
        price,
        producer,
        category_name,
    ))
}

/// Encode a record back into its six textual cell values in column order.
///
/// The error report writer appends the seventh error-description cell after
/// these.
pub fn encode_row(record: &GoodsRecord) -> Vec<String> {
    vec![
        record.article.clone(),
        record.name.clone(),
        record.count.to_string(),
        record.price.to_string(),
        record.producer.clone(),
        record.category_name.clone(),
    ]
}

fn cell(row: &[Data], column: usize) -> Result<&Data> {
    match row.get(column) {
        Some(value) if !matches!(value, Data::Empty) => Ok(value),
        _ => Err(Error::row_decode(column, "missing cell")),
    }
}

/// Generic textual representation of a cell; string cells verbatim,
/// everything else through its canonical rendering
fn cell_text(value: &Data) -> String {
    match value {
        Data::String(text) => text.clone(),
        other => other.to_string(),
    }
}

fn text_cell(row: &[Data], column: usize) -> Result<String> {
    Ok(cell_text(cell(row, column)?))
}

fn numeric_cell(row: &[Data], column: usize) -> Result<f64> {
    let raw = text_cell(row, column)?;
    raw.trim().parse::<f64>().map_err(|e| {
        Error::row_decode(column, format!("'{}' is not a number: {}", raw, e))
    })
}

/// Count is decoded as a decimal and truncated toward zero; the quantity
/// is non-negative, so a negative decode is malformed.
fn count_cell(row: &[Data], column: usize) -> Result<u64> {
    let quantity = numeric_cell(row, column)?.trunc();
    if quantity < 0.0 {
        return Err(Error::row_decode(
            column,
            format!("count must be non-negative, got {}", quantity),
        ));
    }
    Ok(quantity as u64)
}
