pub mod components;
pub mod dispatch;
pub mod html;
pub mod routes;
pub mod shared;
pub mod templates;
