pub mod car_list;
pub mod catalog;
pub mod collation;
pub mod data_model;
pub mod i18n;
pub mod request_generation;
pub mod schedule_grid;
pub mod selection;
pub mod table_state;
