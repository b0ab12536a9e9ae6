pub mod app;
pub mod typeclass;
pub mod datatype;
pub mod kind;
pub mod decorator;
