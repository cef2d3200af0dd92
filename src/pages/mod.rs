//! Page components for the portfolio.

mod panels;
mod portfolio;

pub use portfolio::Portfolio;
