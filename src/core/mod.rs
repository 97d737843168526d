//! core
//!
//! Hashing and key rewriting primitives.
//!
//! # Modules
//!
//! - [`token`] - Unpadded URL-safe Base64 tokens
//! - [`hasher`] - Seeded 64-bit key hashing
//! - [`rewrite`] - Vertex key, edge key, and reference grammar
//! - [`config`] - Configuration schema and loading
//!
//! # Design Principles
//!
//! - Everything here is a pure function of its input and a fixed seed
//! - Independent runs produce identical tokens on any platform

pub mod config;
pub mod hasher;
pub mod rewrite;
pub mod token;
