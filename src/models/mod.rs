pub mod advisory;
pub mod alert;
pub mod crop;
pub mod district;
pub mod season;
pub mod weather;

pub use advisory::*;
pub use alert::*;
pub use crop::*;
pub use district::*;
pub use season::*;
pub use weather::*;
