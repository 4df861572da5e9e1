//! Presentation helpers shared by the dashboard frontend and the CLI preview.

pub mod format;

pub use format::{
    format_currency, format_currency_in, format_number, format_percentage, format_short_date,
    format_signed_percentage,
};
