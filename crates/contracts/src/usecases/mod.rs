pub mod common;
pub mod u508_generate_sales_data;
