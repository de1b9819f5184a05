pub mod contrast_service;

pub use contrast_service::{ContrastService, Inspection, PickReport, RatioReport, SwatchReport};
