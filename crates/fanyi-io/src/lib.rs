pub mod stdin;
pub mod stdout;
