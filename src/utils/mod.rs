pub mod loader;
pub mod request;
pub mod response;
pub mod warehouse_network;
