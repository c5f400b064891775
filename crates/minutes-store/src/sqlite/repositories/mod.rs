//! Table repositories. Stateless, every method takes `&Connection`.

pub mod meeting;
