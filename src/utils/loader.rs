// CSV loaders for the warehouse network and warehouse stock

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord, Trim};
use log::{info, warn};

use crate::error::{Error, Result};
use crate::models::{Quantity, StockTable, Time};
use crate::utils::warehouse_network::AdjacencyGraph;

// A row whose first column is one of these is a header row
const COLUMN_HEADERS: [&str; 2] = ["warehouse1", "warehouse"];

/// Load `warehouse1,warehouse2,time` rows into a network
pub fn load_connections<R: Read>(reader: R) -> Result<AdjacencyGraph> {
    read_connections(reader, "connections")
}

/// Load `warehouse,product,quantity` rows into a stock table
pub fn load_stocks<R: Read>(reader: R) -> Result<StockTable> {
    read_stocks(reader, "stocks")
}

pub fn load_connections_from_path<P: AsRef<Path>>(path: P) -> Result<AdjacencyGraph> {
    let path = path.as_ref();
    let file = File::open(path)?;
    read_connections(file, &path.display().to_string())
}

pub fn load_stocks_from_path<P: AsRef<Path>>(path: P) -> Result<StockTable> {
    let path = path.as_ref();
    let file = File::open(path)?;
    read_stocks(file, &path.display().to_string())
}

fn read_connections<R: Read>(reader: R, source: &str) -> Result<AdjacencyGraph> {
    let mut graph = AdjacencyGraph::new();
    let rows = read_rows(reader, source, |line, record| {
        let weight: Time = parse_field(source, line, record, 2, "travel time")?;
        graph
            .add_edge(&record[0], &record[1], weight)
            .map_err(|e| malformed(source, line, e.to_string()))
    })?;

    info!(
        "Loaded {} connections between {} warehouses from {}",
        rows,
        graph.location_count(),
        source
    );
    Ok(graph)
}

fn read_stocks<R: Read>(reader: R, source: &str) -> Result<StockTable> {
    let mut stock = StockTable::new();
    let rows = read_rows(reader, source, |line, record| {
        let quantity: Quantity = parse_field(source, line, record, 2, "quantity")?;
        stock.set_quantity(&record[0], &record[1], quantity);
        Ok(())
    })?;

    info!(
        "Loaded {} stock records for {} warehouses from {}",
        rows,
        stock.location_count(),
        source
    );
    Ok(stock)
}

/// Feeds every three-column data row to `handle`, skipping header rows.
/// Returns the number of data rows.
fn read_rows<R, F>(reader: R, source: &str, mut handle: F) -> Result<usize>
where
    R: Read,
    F: FnMut(u64, &StringRecord) -> Result<()>,
{
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(reader);

    let mut rows = 0;
    for result in reader.records() {
        let record = result?;
        let line = record.position().map_or(0, |p| p.line());

        if record.len() != 3 {
            return Err(malformed(
                source,
                line,
                format!("expected 3 fields, found {}", record.len()),
            ));
        }
        if COLUMN_HEADERS.contains(&&record[0]) {
            if line > 1 {
                warn!("{}: skipping header row at line {}", source, line);
            }
            continue;
        }

        handle(line, &record)?;
        rows += 1;
    }

    Ok(rows)
}

fn parse_field<T: std::str::FromStr>(
    source: &str,
    line: u64,
    record: &StringRecord,
    index: usize,
    name: &str,
) -> Result<T> {
    record[index]
        .parse()
        .map_err(|_| malformed(source, line, format!("invalid {} '{}'", name, &record[index])))
}

fn malformed(source: &str, line: u64, reason: String) -> Error {
    Error::MalformedRecord {
        file: source.to_string(),
        line,
        reason,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_connections() {
        let data = "warehouse1,warehouse2,time\nA, E, 1\nA,B,3\nB,C,4.5\n";
        let graph = load_connections(data.as_bytes()).unwrap();

        assert_eq!(graph.edge_count(), 3);
        assert_eq!(graph.weight("E", "A"), Some(1.0));
        assert_eq!(graph.weight("C", "B"), Some(4.5));
        assert!(!graph.contains("warehouse1"));
    }

    #[test]
    fn test_load_stocks() {
        let data = "warehouse,product,quantity\nW1,570E77,40\nW2,E1D9F2,100\nW1,570E77,45\n";
        let stock = load_stocks(data.as_bytes()).unwrap();

        assert_eq!(stock.quantity("W1", "570E77"), 45);
        assert_eq!(stock.quantity("W2", "E1D9F2"), 100);
        assert_eq!(stock.location_count(), 2);
    }

    #[test]
    fn test_headers_are_optional() {
        let stock = load_stocks("W1,p1,4\n".as_bytes()).unwrap();
        assert_eq!(stock.quantity("W1", "p1"), 4);
    }

    #[test]
    fn test_wrong_field_count() {
        let err = load_connections("A,B,1\nA,C\n".as_bytes()).unwrap_err();
        match err {
            Error::MalformedRecord { line, reason, .. } => {
                assert_eq!(line, 2);
                assert!(reason.contains("expected 3 fields"));
            }
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn test_non_numeric_values() {
        assert!(matches!(
            load_connections("A,B,far\n".as_bytes()),
            Err(Error::MalformedRecord { line: 1, .. })
        ));
        assert!(matches!(
            load_stocks("W1,p1,-3\n".as_bytes()),
            Err(Error::MalformedRecord { line: 1, .. })
        ));
    }

    #[test]
    fn test_negative_travel_time() {
        let err = load_connections("A,B,-2\n".as_bytes()).unwrap_err();
        assert!(err.to_string().contains("non-negative"));
    }

    #[test]
    fn test_missing_file() {
        assert!(matches!(
            load_stocks_from_path("does/not/exist.csv"),
            Err(Error::Io(_))
        ));
    }
}
