pub mod api_utils;
pub mod http;
pub mod icons;
pub mod in_flight;
