pub mod chart;
pub mod engine;
pub mod frequency;
pub mod numerics;
pub mod pipeline;
pub mod projection;
pub mod reduce;

pub use crate::domain::model::{
    CalendarDate, CoreNumbers, ProfileInput, ProfileOutput, Sector, SectorCounts,
};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
