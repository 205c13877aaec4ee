//! Reporting façade and the JSON payloads it produces.

pub mod facade;
pub mod payload;

pub use facade::ReportingFacade;
pub use payload::{
    CumulativeHumanPayload, DashboardPayload, HumanPayload, KpiPayload, ReportPayload,
    WindowPayload,
};
