pub mod dispatch;
pub mod review;
pub mod status;
