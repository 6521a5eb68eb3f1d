//! CLI command handlers

pub mod commands;

pub use commands::{
    create_orders_dir, generate, generate_reports, orders_dir_for, process_sales_data,
    resolve_input,
};
