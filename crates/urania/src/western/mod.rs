pub mod distribution;
pub mod signs;

pub use distribution::{element_distribution, modality_distribution, sign_range_table};
pub use signs::{Element, Modality, SignPlacement, ZodiacSign};
