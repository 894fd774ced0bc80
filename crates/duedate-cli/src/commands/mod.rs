pub mod calc;
pub mod check;
pub mod clock;
pub mod holidays;
