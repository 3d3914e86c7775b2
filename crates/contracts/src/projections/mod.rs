pub mod p910_sales_orders;
pub mod p911_monthly_targets;
