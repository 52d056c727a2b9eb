pub mod ask;
pub mod categories;
pub mod config;
pub mod dispatch;
pub mod list;
pub mod popular;
pub mod schema;
pub mod shared;
pub mod show;
pub mod vote;
