pub mod coupon_reader;
pub mod summary_writer;
