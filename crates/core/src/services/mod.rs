pub mod kpi_service;
pub mod metrics;
pub mod selection_service;
pub mod series_service;
pub mod table_service;
