//! Typed post models and collection parsing
//!
//! # Overview
//!
//! The model module defines the typed outputs of the client ([`Post`],
//! [`PostList`], the [`Model`] sum over them) and the [`CollectionParser`]
//! collaborator that maps a decoded envelope onto those types.

mod parser;
mod posts;

pub use parser::{CollectionParser, PayloadCollectionParser};
pub use posts::{Model, ModelKind, Post, PostList};
