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
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Function signature hygiene
#![deny(clippy::too_many_arguments)]
#![deny(clippy::fn_params_excessive_bools)]
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

//! Engine-agnostic orbit camera rig for inspecting a single 3D subject.
//!
//! The rig consumes one [`input::InputSample`] per frame (pointer delta,
//! scroll, orbit/pan buttons) and produces a [`camera::CameraPose`]. Orbit
//! angles, pan offset, and log-space zoom are smoothed toward their targets
//! every tick; the host applies the pose to whatever camera it renders with.
//!
//! # Key entry points
//!
//! - [`camera::OrbitRig`] - the rig itself
//! - [`bounds::BoundsProvider`] - how the rig learns where the subject is
//! - [`input::InputState`] - folds window events into per-tick samples
//! - [`annotation`] - numbered annotations laid out in screen space
//! - [`options::Options`] - TOML-backed configuration
//!
//! # Example
//!
//! ```
//! use glam::Vec3;
//! use orbit_rig::bounds::Aabb;
//! use orbit_rig::camera::OrbitRig;
//! use orbit_rig::input::InputSample;
//! use orbit_rig::options::RigOptions;
//!
//! let subject = Aabb::new(Vec3::ZERO, Vec3::ONE);
//! let mut rig = OrbitRig::new(&subject, RigOptions::default())?;
//! let pose = rig.tick(&InputSample::orbit(10.0, 0.0), &subject, 0.016).pose();
//! assert!(pose.position.is_finite());
//! # Ok::<(), orbit_rig::error::RigError>(())
//! ```

pub mod annotation;
pub mod bounds;
pub mod camera;
pub mod error;
pub mod input;
pub mod options;
