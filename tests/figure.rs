use approx::assert_relative_eq;
use bloch_rs::{
    BlochError, BlochVector, Ket, KetState,
    config::{Backend, RenderConfig},
    figure::{Figure, Primitive},
    plot,
    trajectory::Trajectory,
};
use num_complex::Complex;

fn config() -> RenderConfig {
    RenderConfig {
        backend: Backend::Ascii,
        mesh_density: 6,
        ..RenderConfig::default()
    }
}

fn precession(steps: usize) -> Vec<Ket> {
    (0..steps)
        .map(|k| Ket::from_angles(std::f64::consts::FRAC_PI_3, k as f64 * 0.4))
        .collect()
}

#[test]
fn trajectory_draws_every_point_and_anchors_arrow_on_last() {
    let kets = precession(9);
    let trajectory = Trajectory::new(kets.clone()).unwrap();
    let fig = Figure::trajectory(&trajectory, Some("ψ(t)"), None, &config());

    let path = fig.path().unwrap();
    assert_eq!(path.len(), 9);
    for (point, ket) in path.iter().zip(&kets) {
        assert_eq!(*point, BlochVector::from_ket(ket).to_array());
    }

    let last = BlochVector::from_ket(&kets[8]).to_array();
    let (tail, tip) = fig.arrow().unwrap();
    assert_eq!(tail, [0.0; 3]);
    assert_eq!(tip, last);

    let arrows = fig
        .primitives
        .iter()
        .filter(|p| matches!(p, Primitive::Arrow { .. }))
        .count();
    assert_eq!(arrows, 1);
    assert!(fig.texts().any(|(at, text)| text == "ψ(t)" && *at == last));
    assert_eq!(fig.title, "Bloch Sphere (ψ(t))");
}

#[test]
fn single_vector_has_scaffold_and_no_path() {
    let fig = Figure::vector(&KetState::MinusI.to_ket(), None, None, &config());
    assert!(fig.path().is_none());
    let segments = fig
        .primitives
        .iter()
        .filter(|p| matches!(p, Primitive::Segment { .. }))
        .count();
    assert_eq!(segments, 3);
    assert!(fig.primitives.iter().any(|p| matches!(p, Primitive::Surface { .. })));
    assert_eq!(fig.texts().count(), 7);
    assert_eq!(fig.camera.elevation, 30.0);
    assert_eq!(fig.camera.azimuth, 25.0);
    assert_eq!(fig.axes.ticks, vec![-1.0, 0.0, 1.0]);
}

#[test]
fn empty_trajectory_is_rejected() {
    let err = plot::plot_trajectory(&[], None, None, &config()).unwrap_err();
    assert!(matches!(err, BlochError::EmptyTrajectory));
}

#[test]
fn unnormalized_ket_plots_without_error() {
    let ket = Ket::new(Complex::new(1.0, 0.0), Complex::new(1.0, 0.0));
    plot::plot_vector(&ket, None, None, &config()).unwrap();

    let fig = Figure::vector(&ket, None, None, &config());
    let (_, tip) = fig.arrow().unwrap();
    let norm = tip.iter().map(|c| c * c).sum::<f64>().sqrt();
    assert_relative_eq!(norm, 2.0, epsilon = 1e-12);
}

#[test]
fn trajectory_file_round_trip_through_ascii_backend() {
    let src = "// quarter turn about y\n|0>\n[0.9239, 0.3827]\n|+>\n";
    let trajectory = Trajectory::parse_str(src).unwrap();
    let fig = Figure::trajectory(&trajectory, None, Some("quarter turn"), &config());
    assert_eq!(fig.path().unwrap().len(), 3);
    plot::present(fig, &config()).unwrap();
}
