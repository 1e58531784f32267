//! Shared types between the compte frontend and the REST API it talks to.

pub mod domain;
