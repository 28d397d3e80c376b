// src/lib.rs

pub mod badges;
pub mod status;
pub mod services;
pub mod context;

pub use sustainer_common::error::Error;
pub use sustainer_common::models;
pub use sustainer_common::traits;
