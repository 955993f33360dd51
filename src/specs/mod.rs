// src/specs/mod.rs
//! Page-specific scraping specs.
//!
//! Each spec encodes where the ground truth lives in one upstream page's
//! HTML and how to extract it: tolerant case-insensitive tag-block walking
//! via `core::html`, light shaping into row structs. Networking enters only
//! through `core::net`, and every spec splits a pure `parse_doc` away from
//! its `fetch` so the parsing is testable offline against synthetic
//! fixtures.
//!
//! Specs know how to read the pages. They do not normalize rows (that is
//! `normalize`), reshape payloads (`nbapi`), or serve HTTP (`server`).
//! The markup layout of each page is treated as a fixed external contract;
//! a structural change upstream is a breaking change here, not something
//! these specs recover from.
pub mod schedule;
pub mod standings;
