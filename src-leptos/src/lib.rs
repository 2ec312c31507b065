//! Vayu - Leptos Frontend Library

pub mod api;
pub mod app;
pub mod components;
pub mod formatters;
pub mod interop;
pub mod pages;
pub mod storage;
