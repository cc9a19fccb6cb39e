pub mod actions;
pub mod app;
pub mod cars_table;
pub mod schedule_table;
pub mod series_list;
pub mod widgets;
