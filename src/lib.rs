//! State layer for a collaborative whiteboard dashboard prototype.
//!
//! The dashboard shell of a Miro-style product: an organization dashboard,
//! spaces holding sections of boards, a recently-opened list, and a mock
//! canvas pane of generated widgets. This crate owns everything that changes
//! when the user navigates — which surface is visible, what the sidebar
//! lists, what the content pane shows — plus the immutable reference data
//! those decisions resolve against. All data is built in memory; there is no
//! persistence and no network layer.
//!
//! A presentation layer drives the [`nav::Navigator`] operations in response
//! to input events and reads back the derived [`views`] to decide what to
//! draw. It never mutates state directly. No logger is installed here;
//! embedders bind one behind the `log` facade.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`nav`] | Navigation controller: operations, errors, derived-view access |
//! | [`state`] | The mutable [`state::NavigationState`] and its enums |
//! | [`views`] | Sidebar/content pane derivation over catalog + state |
//! | [`recents`] | Bounded most-recently-opened board list |
//! | [`model`] | Board / Section / Space reference types |
//! | [`catalog`] | Reference-data provider and listing queries |
//! | [`demo`] | Built-in demo organization |
//! | [`widgets`] | Mock canvas widget generator |
//! | [`chrome`] | Sidebar sizing and collapse state |

pub mod catalog;
pub mod chrome;
pub mod demo;
pub mod model;
pub mod nav;
pub mod recents;
pub mod state;
pub mod views;
pub mod widgets;

pub use catalog::Catalog;
pub use demo::demo_catalog;
pub use nav::{NavError, Navigator};
pub use state::NavigationState;
