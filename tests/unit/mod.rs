/// Unit tests for the pure streak engine through the public API
mod engine_properties;
