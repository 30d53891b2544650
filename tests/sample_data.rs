// Integration tests against the bundled CSV files in data/
use std::path::PathBuf;

use warehouse_delivery::utils::loader::{load_connections_from_path, load_stocks_from_path};
use warehouse_delivery::{
    AdjacencyGraph, Delivery, DeliveryResponse, GatheringTraversal, OrderRequest, StockTable,
};

fn data_path(file: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data").join(file)
}

fn load_sample() -> (AdjacencyGraph, StockTable) {
    let graph = load_connections_from_path(data_path("connections.csv")).unwrap();
    let stock = load_stocks_from_path(data_path("stocks.csv")).unwrap();
    (graph, stock)
}

fn deliver(graph: &AdjacencyGraph, stock: &StockTable, request: OrderRequest) -> Delivery {
    let (origin, order) = request.into_order().unwrap();
    GatheringTraversal::new(graph, stock, &order).run(&origin)
}

#[test]
fn test_sample_files_load() {
    let (graph, stock) = load_sample();
    assert_eq!(graph.location_count(), 6);
    assert_eq!(graph.edge_count(), 7);
    assert_eq!(stock.location_count(), 6);
    assert_eq!(stock.total_quantity("570E77"), 600);
}

#[test]
fn test_sample_order() {
    let (graph, stock) = load_sample();
    let request = OrderRequest::new(
        "W1",
        vec!["570E77".to_string(), "E1D9F2".to_string()],
        vec![120, 500],
    );

    let delivery = deliver(&graph, &stock, request);
    assert_eq!(delivery, Delivery::Delivered(30.0));
    assert_eq!(
        DeliveryResponse::from(delivery).to_json().unwrap(),
        r#"{"delivery_time":30}"#
    );
}

#[test]
fn test_sample_order_insufficient() {
    let (graph, stock) = load_sample();
    let request = OrderRequest::new(
        "W1",
        vec!["570E77".to_string(), "E1D9F2".to_string()],
        vec![1000, 2000],
    );

    assert_eq!(deliver(&graph, &stock, request), Delivery::Infeasible);
}

#[test]
fn test_sample_unknown_warehouse() {
    let (graph, stock) = load_sample();
    let request = OrderRequest::new("W42", vec!["570E77".to_string()], vec![1]);
    assert_eq!(deliver(&graph, &stock, request), Delivery::NoSuchOrigin);
}

#[test]
fn test_sample_nearby_stock() {
    let (graph, stock) = load_sample();

    // W2 alone covers this
    let request = OrderRequest::new("W1", vec!["E1D9F2".to_string()], vec![100]);
    assert_eq!(deliver(&graph, &stock, request), Delivery::Delivered(10.0));

    // Starting at W6 the nearest E1D9F2 is W6 itself, then W4 at 5
    let request = OrderRequest::new("W6", vec!["E1D9F2".to_string()], vec![150]);
    assert_eq!(deliver(&graph, &stock, request), Delivery::Delivered(5.0));
}
