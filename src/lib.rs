//! Career onboarding — wizard orchestration core.

pub mod error;
pub mod service;
pub mod session;
pub mod wizard;
