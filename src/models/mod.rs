pub mod comparison;
pub mod season;
pub mod series;
pub mod table;

pub use comparison::*;
pub use season::*;
pub use series::*;
pub use table::*;
