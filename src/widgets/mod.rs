//! Reusable widgets for the stakescope TUI.
//!
//! Each widget takes its data by reference and exposes builder-style knobs:
//!
//! - [`FieldCard`] - labeled field rows (items + is_loading)
//! - [`PieChart`] - slice chart with formatters and style knobs
//! - [`TxnTable`] - paginated transaction history (resp + is_loading)

mod field_card;
mod pie_chart;
mod txn_table;

pub use field_card::FieldCard;
pub use pie_chart::PieChart;
pub use txn_table::TxnTable;
