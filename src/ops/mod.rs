pub mod edit_buffer;
pub mod task_ops;
pub mod task_row;
