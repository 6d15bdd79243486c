mod subscription_service;
mod subscription_service_impl;

pub use subscription_service::*;
pub use subscription_service_impl::*;
