/// Shared test support: hub wire-model fixtures and mock port implementations
pub mod fixtures;
pub mod mocks;
