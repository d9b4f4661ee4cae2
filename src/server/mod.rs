//! HTTP surface hosting the translation client

pub mod api;
