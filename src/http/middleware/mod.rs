//! Request middleware applied ahead of route dispatch.

pub mod cors;
