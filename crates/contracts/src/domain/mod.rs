pub mod a001_brand;
pub mod a002_cooperation;
pub mod a003_product;
pub mod a004_warehouse;
pub mod a005_marketplace;
pub mod a006_shipping_service;
pub mod a007_customer;
pub mod a008_stock_transaction;
pub mod a009_order;
pub mod a010_printing;
pub mod a011_packing;
pub mod a012_shipping;
pub mod a013_sweeping;
pub mod common;
