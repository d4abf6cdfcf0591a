pub mod article;
pub mod comment;
pub mod create;
pub mod iterative;
pub mod not_found;
pub mod web;
