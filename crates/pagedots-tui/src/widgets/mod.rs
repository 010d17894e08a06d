mod help;
mod indicator;
mod page;
mod status_bar;

pub use help::HelpWidget;
pub use indicator::IndicatorWidget;
pub use page::PageWidget;
pub use status_bar::StatusBarWidget;
