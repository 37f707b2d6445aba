pub mod data;
pub mod engine;
pub mod moment;

pub use data::{BodyPlacement, Chart};
pub use engine::{house_for, ChartEngine};
pub use moment::{julian_day_of, BirthMoment, MAX_UTC_OFFSET_HOURS};
