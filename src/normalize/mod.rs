pub mod cohesion;
pub mod complexity;
pub mod coupling;
pub mod duplication;
pub mod math;
pub mod naming;
pub mod navigability;
pub mod size;

pub use cohesion::{normalize_d6_class, normalize_d6_module};
pub use complexity::{normalize_d1, normalize_d2};
pub use coupling::normalize_d5;
pub use duplication::normalize_d7;
pub use naming::{normalize_d4_fallback, normalize_d4_static, normalize_d4_with_llm, NamingSignals};
pub use navigability::normalize_d8;
pub use size::normalize_d3;
