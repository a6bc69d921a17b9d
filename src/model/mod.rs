pub mod category;
pub mod record;
pub mod task;

pub use category::{Category, CategoryPatch, NewCategory};
pub use record::Record;
pub use task::{NewTask, Priority, Task, TaskPatch};
