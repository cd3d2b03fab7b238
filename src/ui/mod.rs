/// UI layer: sidebar filters, metric tiles, charts, and the data grid.
pub mod charts;
pub mod dashboard;
pub mod panels;
pub mod table;
