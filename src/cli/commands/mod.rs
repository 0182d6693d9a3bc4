pub mod evaluate;
pub mod run;

pub use evaluate::*;
pub use run::*;
