pub mod abs;
pub mod exp;
pub mod log;

pub use abs::abs_op;
pub use exp::exp_op;
pub use log::log_op;
