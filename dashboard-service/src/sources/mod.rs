pub mod synthetic;

pub use synthetic::{generate_dataset, Dataset};
