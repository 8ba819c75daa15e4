// Adapters layer: concrete implementations for external systems (prediction service, terminal).

pub mod http;
pub mod terminal;
