pub mod create;
pub mod delete;
pub mod form;
pub mod get;
pub mod list;
pub mod update;
