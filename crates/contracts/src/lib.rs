//! Wire types shared between the console views and the employee records API.

pub mod domain;
pub mod shared;
pub mod usecases;
