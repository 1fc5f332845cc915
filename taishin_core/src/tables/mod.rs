//! # Reference Tables
//!
//! Static data consumed by the calculations. Everything here is read-only and
//! fixed at build time, so it can be shared freely between concurrent runs.
//!
//! - [`wall_specs`] - Wall base strength and joint reduction factors
//! - [`capacity_coefficients`] - Required-capacity coefficients per storey and roof
//! - [`reinforcement_costs`] - Cost and Iw-improvement reference per method
//! - [`deterioration_items`] - Deterioration survey checklist
//! - [`simple_questions`] - Ten-question screening bank
//!
//! Ground factors live on [`crate::building::GroundType::factor`].

pub mod capacity_coefficients;
pub mod deterioration_items;
pub mod reinforcement_costs;
pub mod simple_questions;
pub mod wall_specs;

pub use capacity_coefficients::required_capacity_coefficient;
pub use deterioration_items::default_deterioration_items;
pub use reinforcement_costs::{CostReference, ReinforcementType};
pub use simple_questions::{question, questions, QuestionOption, SimpleQuestion};
pub use wall_specs::{JointSpec, WallSpecType};
