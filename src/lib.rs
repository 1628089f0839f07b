// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! Interactive circle visualization widget engine.
//!
//! Rondel maintains a circle (center + radius) under user control and
//! keeps derived quantities (diameter, circumference, and the
//! circumference/diameter ratio) live-updated while the rendered radius
//! glides toward the requested one through a tick-driven animation.
//!
//! # Key entry points
//!
//! - [`widget::CircleWidget`] - the interaction controller; feed it
//!   [`widget::RondelCommand`] values and tick callbacks
//! - [`animation::RadiusAnimator`] - the radius transition engine
//! - [`options::Options`] - runtime configuration (animation, viewport,
//!   controls, colors)
//! - [`runtime::EventLoop`] - a cooperative timer loop for hosts
//!   without their own scheduler
//!
//! # Architecture
//!
//! The widget is single-threaded and event-loop driven. Rendering and
//! tick scheduling are seams ([`render::RenderSurface`],
//! [`animation::TickScheduler`]): the host owns the real window, timer
//! and input widgets, translates raw events into commands, and pushes
//! the widget's control-panel mirror back into its UI after every
//! dispatch.

pub mod animation;
pub mod error;
pub mod geometry;
pub mod options;
pub mod render;
pub mod runtime;
pub mod viewport;
pub mod widget;
