mod dto;
mod feed_service;
mod feed_service_impl;
mod feed_service_poller;

pub use dto::{FeedServiceConfig, FeedSnapshot};
pub use feed_service::*;
pub use feed_service_impl::*;
pub use feed_service_poller::*;
