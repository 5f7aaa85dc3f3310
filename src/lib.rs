//! Bloch sphere plots for single-qubit states.
//!
//! A ket `a|0> + b|1>` is mapped to its Bloch vector through the density matrix `|ψ><ψ|` and drawn
//! on a translucent unit sphere, either on its own or as the end of a trajectory of states.
//!
//! ## Running
//!
//! The example state `(|0> + i|1>)/√2` can be shown with:
//!
//! ```bash
//! cargo run
//! ```
//!
//! A single ket or a file of kets can be plotted using:
//!
//! ```bash
//! cargo run -- vector "[0.6, 0.8i]"
//! cargo run -- trajectory <FILENAME>
//! ```
//!
//! Add `--ascii` to print the plot instead of opening a window. For all options see:
//! ```bash
//! cargo run -- --help
//! ```

pub mod ascii;
pub mod bloch;
pub mod camera;
pub mod config;
pub mod error;
pub mod figure;
pub mod ket;
pub mod phase;
pub mod plot;
pub mod text;
pub mod trajectory;
pub mod viewer;

pub use bloch::BlochVector;
pub use error::BlochError;
pub use ket::{Ket, KetState};
pub use plot::{plot_trajectory, plot_vector};
