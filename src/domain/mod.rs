pub mod forecast;
pub mod reading;

pub use forecast::*;
pub use reading::*;
