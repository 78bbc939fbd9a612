pub mod favorites;
pub mod header;
pub mod links;
pub mod model;
pub mod usecases;
pub mod windowing;
