// HTTP routes
pub mod health;
pub mod research;
pub mod similar;

pub use self::health::*;
pub use self::research::*;
pub use self::similar::*;
