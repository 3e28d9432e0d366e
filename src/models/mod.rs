//! Timetable domain models.
//!
//! Provides the value types shared by the conflict resolver: activities,
//! weekly schedules, clock windows and instruction-derived constraints.
//!
//! # Domain Mappings
//!
//! | optisched | Student planner | Clinic | Team calendar |
//! |-----------|-----------------|--------|---------------|
//! | Activity | Class / Study block | Appointment | Meeting |
//! | Schedule | Weekly timetable | Weekly roster | Week view |
//! | TimeWindow | Period | Slot | Time box |

mod activity;
mod constraint;
mod schedule;
mod window;

pub use activity::{parse_clock, Activity};
pub use constraint::{CompiledConstraints, FORBIDDEN_DAY_PREFIX, PREFERRED_TIME};
pub use schedule::{DayPlan, Schedule};
pub use window::TimeWindow;
