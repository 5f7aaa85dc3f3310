use std::{f64::consts::PI, io, io::Read, path::PathBuf};

use bloch_rs::{
    camera::Camera,
    config::{Backend, RenderConfig},
    error::BlochError,
    figure::Figure,
    ket::Ket,
    plot,
    text::{HasParser, ToDoc},
    trajectory::Trajectory,
};
use tracing_subscriber::EnvFilter;

/// Plot single-qubit states on the Bloch sphere
#[derive(clap::Parser)]
struct Args {
    #[command(subcommand)]
    command: Option<Command>,

    /// Print the plot as text instead of opening a window
    #[arg(long, global = true)]
    ascii: bool,

    /// Camera elevation in degrees
    #[arg(long, global = true, default_value_t = 30.0, allow_negative_numbers = true)]
    elevation: f64,

    /// Camera azimuth in degrees
    #[arg(long, global = true, default_value_t = 25.0, allow_negative_numbers = true)]
    azimuth: f64,

    /// Sphere mesh samples per direction
    #[arg(long, global = true, default_value_t = 100)]
    mesh: usize,

    /// Log debug output
    #[arg(long, global = true)]
    debug: bool,
}

#[derive(clap::Subcommand)]
enum Command {
    /// Plot a single ket, e.g. `|+i>` or `[0.6, 0.8i]`
    Vector {
        #[arg(value_name = "KET")]
        ket: String,

        /// Label drawn at the tip of the arrow
        #[arg(long)]
        label: Option<String>,

        #[arg(long)]
        title: Option<String>,
    },
    /// Plot a trajectory of kets read from a file, or stdin when no file is given
    Trajectory {
        #[arg(value_name = "FILE")]
        file: Option<PathBuf>,

        /// Label drawn at the tip of the arrow
        #[arg(long)]
        label: Option<String>,

        #[arg(long)]
        title: Option<String>,
    },
}

fn read_source(file: Option<&PathBuf>) -> Result<String, BlochError> {
    match file {
        Some(path) => std::fs::read_to_string(path).map_err(|source| BlochError::Io {
            path: path.clone(),
            source,
        }),
        None => {
            let mut s = String::new();
            io::stdin()
                .read_to_string(&mut s)
                .map_err(|source| BlochError::Io {
                    path: PathBuf::from("<stdin>"),
                    source,
                })?;
            Ok(s)
        }
    }
}

/// `(|0> + i|1>)/√2`, the state at θ = π/2, φ = π/2.
fn example_ket() -> Ket {
    Ket::from_angles(PI / 2.0, PI / 2.0)
}

fn run(args: Args) -> Result<(), BlochError> {
    let config = RenderConfig {
        backend: if args.ascii {
            Backend::Ascii
        } else {
            Backend::Window
        },
        camera: Camera::new(args.elevation, args.azimuth),
        mesh_density: args.mesh,
        ..RenderConfig::default()
    };

    match args.command {
        None => plot::plot_vector(&example_ket(), None, None, &config),
        Some(Command::Vector { ket, label, title }) => {
            let ket = Ket::parse_str(&ket, "ket")?;
            tracing::info!(ket = %ket.to_pretty(80), "plotting vector");
            plot::plot_vector(&ket, label.as_deref(), title.as_deref(), &config)
        }
        Some(Command::Trajectory { file, label, title }) => {
            let src = read_source(file.as_ref())?;
            let trajectory = Trajectory::parse_str(&src)?;
            tracing::info!(states = trajectory.len(), "plotting trajectory");
            let figure = Figure::trajectory(&trajectory, label.as_deref(), title.as_deref(), &config);
            plot::present(figure, &config)
        }
    }
}

fn main() -> miette::Result<()> {
    let args: Args = clap::Parser::parse();

    let filter = if args.debug {
        EnvFilter::new("bloch=debug,bloch_rs=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    run(args)?;
    Ok(())
}
