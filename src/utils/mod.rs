pub mod logging;
pub mod post_time;
pub mod responses;
