// Database layer: connection pool, procedure calls, generic CRUD template

pub mod crud;
pub mod pool;
pub mod procedure;

pub use crud::{Entity, Latest, Procedures, Repository};
pub use pool::DbPool;
pub use procedure::{ProcArg, ProcedureCall};
