mod accessor;
#[cfg(test)]
pub mod memory;
mod pool;
mod postgres;

pub use accessor::{RecordAccessor, RecordWindow};
pub use pool::create_pool;
pub use postgres::PgStore;
