use crate::error::{ReportError, ReportResult};
use crate::types::SalesRecord;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::debug;

/// Headers every sales CSV must carry
pub const REQUIRED_COLUMNS: [&str; 9] = [
    "ORDER ID",
    "ITEM NUMBER",
    "PRODUCT LINE",
    "PRODUCT CODE",
    "ITEM QUANTITY",
    "ITEM PRICE",
    "STATUS",
    "CUSTOMER NAME",
    "ORDER DATE",
];

/// Parse a sales CSV file into records.
///
/// The whole file is read before anything is returned, so a malformed row
/// anywhere fails the call and no partial record set escapes.
///
/// # Example
/// ```no_run
/// use order_reports::parser::parse_sales_csv;
/// use std::path::Path;
///
/// let records = parse_sales_csv(Path::new("sales_data.csv"))?;
/// println!("Records: {}", records.len());
/// # Ok::<(), order_reports::error::ReportError>(())
/// ```
pub fn parse_sales_csv(path: &Path) -> ReportResult<Vec<SalesRecord>> {
    let file = File::open(path)?;
    let records = parse_sales_reader(file)?;
    debug!(path = %path.display(), records = records.len(), "parsed sales csv");
    Ok(records)
}

/// Parse sales CSV content from any reader
pub fn parse_sales_reader<R: Read>(reader: R) -> ReportResult<Vec<SalesRecord>> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = reader.headers()?.clone();
    let missing: Vec<&str> = REQUIRED_COLUMNS
        .iter()
        .copied()
        .filter(|required| !headers.iter().any(|h| h == *required))
        .collect();
    if !missing.is_empty() {
        return Err(ReportError::Parse(format!(
            "Missing required column(s): {}",
            missing.join(", ")
        )));
    }

    let mut records = Vec::new();
    for (idx, row) in reader.deserialize::<SalesRecord>().enumerate() {
        let record = row?;
        // record 1 is the first row after the header
        check_finite(idx + 1, "ITEM QUANTITY", record.item_quantity)?;
        check_finite(idx + 1, "ITEM PRICE", record.item_price)?;
        records.push(record);
    }

    Ok(records)
}

/// `f64` deserialisation accepts NaN and infinities; reports cannot
fn check_finite(record: usize, column: &str, value: f64) -> ReportResult<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ReportError::Parse(format!(
            "record {}: {} must be a finite number, got {}",
            record, column, value
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ItemNumber;

    const HEADER: &str = "ORDER ID,ORDER DATE,ITEM NUMBER,PRODUCT LINE,PRODUCT CODE,ITEM QUANTITY,ITEM PRICE,STATUS,CUSTOMER NAME";

    fn parse(body: &str) -> ReportResult<Vec<SalesRecord>> {
        parse_sales_reader(format!("{HEADER}\n{body}").as_bytes())
    }

    #[test]
    fn test_parse_basic_rows() {
        let records = parse(
            "1001,2024-01-05,2,Classic Cars,S10_1949,3,95.50,Shipped,Land of Toys Inc.\n\
             1001,2024-01-05,1,Motorcycles,S10_1678,2,10.00,Shipped,Land of Toys Inc.\n",
        )
        .unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].order_id, "1001");
        assert_eq!(records[0].item_number, ItemNumber::Number(2.0));
        assert_eq!(records[0].product_code, "S10_1949");
        assert_eq!(records[0].item_quantity, 3.0);
        assert_eq!(records[0].item_price, 95.5);
        assert_eq!(records[0].order_date, "2024-01-05");
        assert_eq!(records[1].customer_name, "Land of Toys Inc.");
    }

    #[test]
    fn test_parse_header_order_is_free_and_extra_columns_ignored() {
        let csv = "CUSTOMER NAME,NOTES,ITEM PRICE,ITEM QUANTITY,PRODUCT CODE,PRODUCT LINE,ITEM NUMBER,ORDER DATE,STATUS,ORDER ID\n\
                   Acme,rush,4.25,4,P-1,Planes,7,2024-02-01,On Hold,A7\n";
        let records = parse_sales_reader(csv.as_bytes()).unwrap();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].order_id, "A7");
        assert_eq!(records[0].status, "On Hold");
        assert_eq!(records[0].item_price, 4.25);
    }

    #[test]
    fn test_parse_trims_whitespace() {
        let records = parse(" 5 , 2024-03-01 , 1 , Ships , S1 , 2 , 3.5 , Shipped , Bob \n").unwrap();
        assert_eq!(records[0].order_id, "5");
        assert_eq!(records[0].item_quantity, 2.0);
        assert_eq!(records[0].customer_name, "Bob");
    }

    #[test]
    fn test_parse_header_only_yields_no_records() {
        let records = parse("").unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn test_parse_missing_item_price_column() {
        let csv = "ORDER ID,ORDER DATE,ITEM NUMBER,PRODUCT LINE,PRODUCT CODE,ITEM QUANTITY,STATUS,CUSTOMER NAME\n\
                   1,2024-01-01,1,Cars,C1,2,Shipped,Ann\n";
        let err = parse_sales_reader(csv.as_bytes()).unwrap_err();

        match err {
            ReportError::Parse(msg) => assert!(msg.contains("ITEM PRICE"), "got: {msg}"),
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_header_names_are_case_sensitive() {
        let csv = "order id,ORDER DATE,ITEM NUMBER,PRODUCT LINE,PRODUCT CODE,ITEM QUANTITY,ITEM PRICE,STATUS,CUSTOMER NAME\n";
        let err = parse_sales_reader(csv.as_bytes()).unwrap_err();
        assert!(err.to_string().contains("ORDER ID"));
    }

    #[test]
    fn test_parse_reports_every_missing_column() {
        let err = parse_sales_reader("ORDER ID,STATUS\n".as_bytes()).unwrap_err();
        let msg = err.to_string();
        for column in ["ITEM NUMBER", "ITEM QUANTITY", "ITEM PRICE", "CUSTOMER NAME"] {
            assert!(msg.contains(column), "{column} missing from: {msg}");
        }
        assert!(!msg.contains("STATUS"));
    }

    #[test]
    fn test_parse_non_numeric_price() {
        let err = parse("1,2024-01-01,1,Cars,C1,2,cheap,Shipped,Ann\n").unwrap_err();
        assert!(matches!(err, ReportError::Parse(_)), "got {err:?}");
    }

    #[test]
    fn test_parse_item_number_variants() {
        let records = parse(
            "1,2024-01-01,1.0,Cars,C1,1,1.00,Shipped,Ann\n\
             1,2024-01-01,-1,Cars,C2,1,1.00,Shipped,Ann\n\
             1,2024-01-01,A1,Cars,C3,1,1.00,Shipped,Ann\n\
             1,2024-01-01,10000000000,Cars,C4,1,1.00,Shipped,Ann\n",
        )
        .unwrap();

        let numbers: Vec<ItemNumber> = records.into_iter().map(|r| r.item_number).collect();
        assert_eq!(
            numbers,
            vec![
                ItemNumber::Number(1.0),
                ItemNumber::Number(-1.0),
                ItemNumber::Text("A1".to_string()),
                ItemNumber::Number(10_000_000_000.0),
            ]
        );
    }

    #[test]
    fn test_parse_rejects_non_finite_amounts() {
        for (quantity, price, column) in [
            ("1", "NaN", "ITEM PRICE"),
            ("1", "inf", "ITEM PRICE"),
            ("-inf", "2.00", "ITEM QUANTITY"),
            ("NaN", "2.00", "ITEM QUANTITY"),
        ] {
            let err = parse(&format!(
                "1,2024-01-01,1,Cars,C1,2,1.00,Shipped,Ann\n\
                 1,2024-01-01,2,Cars,C2,{quantity},{price},Shipped,Ann\n"
            ))
            .unwrap_err();

            match err {
                ReportError::Parse(msg) => {
                    assert!(msg.contains(column), "got: {msg}");
                    assert!(msg.contains("record 2"), "got: {msg}");
                }
                other => panic!("expected parse error, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_parse_empty_input_is_missing_all_columns() {
        let err = parse_sales_reader("".as_bytes()).unwrap_err();
        assert!(matches!(err, ReportError::Parse(_)));
    }
}
