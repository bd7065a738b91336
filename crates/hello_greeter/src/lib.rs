pub mod date_text;
pub mod greet;
pub mod greeting;

pub use date_text::{DATE_FORMAT, render_date};
pub use greet::{greet, greet_now, greet_with};
pub use greeting::Greeting;
