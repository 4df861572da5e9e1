pub mod activity_table;
pub mod charts;
pub mod kpi_card;
pub mod layout;
