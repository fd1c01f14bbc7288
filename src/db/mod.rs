pub mod organization;
pub mod pool;
pub mod session;

pub use pool::create_pool;
pub use session::with_session;
