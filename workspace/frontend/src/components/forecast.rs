pub mod chart;
pub mod results;
pub mod state;
pub mod stats;
pub mod ticker;
pub mod view;

pub use view::Forecast;
