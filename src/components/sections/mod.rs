pub mod about;
pub mod hero;
pub mod rules;
pub mod schedule;

pub use about::About;
pub use hero::Hero;
pub use rules::{RuleItem, Rules};
pub use schedule::Schedule;
