pub mod order_status;
pub mod role;
pub mod stock_movement;
