//! Presentation helpers: money formatting, headline metrics, tables and exports

mod format;
mod table;
mod export;

pub use format::{format_billions, format_millions};
pub use table::{
    net_profit_with_amortization, KeyMetrics, ProjectionTable, TableRow, AMORTIZED_HEADER,
    NET_PROFIT_HEADER, REVENUE_HEADER, YEAR_HEADER,
};
pub use export::{write_series_csv, write_series_csv_path, ProjectionReport};
