//! Extracurricular activity sign-ups for Mergington High School.
//!
//! The roster lives in an in-memory [`database::ActivityStore`] handed to
//! the axum router built by [`web::app_router`].

pub mod config;
pub mod database;
pub mod error;
pub mod models;
pub mod services;
pub mod web;
