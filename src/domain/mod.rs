pub mod charts;
pub mod coords;
pub mod forecast;
pub mod report;
pub mod weather;
