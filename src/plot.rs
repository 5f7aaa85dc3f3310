//! Entry points that build a figure and present it with the configured backend.

use tracing::debug;

use crate::{
    ascii,
    config::{Backend, RenderConfig},
    error::BlochError,
    figure::Figure,
    ket::Ket,
    trajectory::Trajectory,
    viewer,
};

/// Present an already built figure.
pub fn present(figure: Figure, config: &RenderConfig) -> Result<(), BlochError> {
    debug!(backend = ?config.backend, primitives = figure.primitives.len(), "presenting figure");
    match config.backend {
        Backend::Window => viewer::show(figure, config),
        Backend::Ascii => {
            println!("{}", ascii::render(&figure, config));
            Ok(())
        }
    }
}

/// Plot a single state.
///
/// The ket is not validated: an unnormalized ket is drawn with an arrow off the sphere surface.
pub fn plot_vector(
    ket: &Ket,
    label: Option<&str>,
    title: Option<&str>,
    config: &RenderConfig,
) -> Result<(), BlochError> {
    present(Figure::vector(ket, label, title, config), config)
}

/// Plot the path through `kets`, with the arrow on the last one.
///
/// Fails with [`BlochError::EmptyTrajectory`] when `kets` is empty.
pub fn plot_trajectory(
    kets: &[Ket],
    label: Option<&str>,
    title: Option<&str>,
    config: &RenderConfig,
) -> Result<(), BlochError> {
    let trajectory: Trajectory = kets.to_vec().try_into()?;
    present(Figure::trajectory(&trajectory, label, title, config), config)
}
