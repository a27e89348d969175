//! Delivery Lambda handler and the telephony hook's dispatch pipeline

pub mod handler;
pub mod otp;
pub mod pinpoint;
pub mod response;
pub mod templates;

// Re-export the main handler for convenience
pub use handler::handler;
