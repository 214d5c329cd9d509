pub mod check;
pub mod company;
pub mod program;
