pub mod deposit;
pub mod transfer;
pub mod withdraw;
