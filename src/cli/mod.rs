pub mod call;
pub mod plan;
pub mod run;

pub use call::call;
pub use plan::plan;
pub use run::run;
