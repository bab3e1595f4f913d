//! Client-side form state.
//!
//! DESIGN
//! ======
//! Transitions live on plain data so they can be tested without a runtime.
//! The async orchestration around them is in [`crate::form`].

pub mod auth;
