use clap::Parser;
use slime_math::{algebra, vec3, vec4, Fp, Mat4, Quat, Vec3};
use std::time::SystemTime;

mod cli;

fn main() {
    let args = CliArgs::parse();
    let launch_time = SystemTime::now();
    cli::init_logging(
        args.log_timestamp.then_some(launch_time),
        cli::level_filter(args.verbose, args.log_level),
    );
    log::info!("{}", cli::launch_message("slime-demo", launch_time));

    log::debug!("running scenario {:?}", args.scenario);
    if matches!(args.scenario, Scenario::All | Scenario::Matrix) {
        matrix_scenario();
    }
    if matches!(args.scenario, Scenario::All | Scenario::Vector) {
        vector_scenario();
    }
    if matches!(args.scenario, Scenario::All | Scenario::Quaternion) {
        quaternion_scenario();
    }
}

/// Which computations to print.
#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scenario {
    /// Every scenario.
    All,
    /// Sum of two 4x4 matrices.
    Matrix,
    /// Dot and cross products, normalization.
    Vector,
    /// Rotations through quaternions.
    Quaternion,
}

/// slime-demo command line interface arguments.
#[derive(clap::Parser, Debug)]
#[clap(author, version, about = "Prints a few slime-math computations.")]
pub struct CliArgs {
    /// Whether to print verbose information.
    #[clap(short, long, help = "Use verbose output (log level = 4)")]
    pub verbose: bool,

    /// Whether to show the elapsed time in the log.
    #[clap(long, help = "Show the time elapsed since launch for each log message")]
    pub log_timestamp: bool,

    /// Verbosity level for the log.
    #[clap(
        long,
        help = "Setting logging verbosity level (higher for more\ndetails)\n  0 - error\n  1 - \
                warn + error\n  2 - info + warn + error\n  3 - debug + info + warn + error\n  4 - \
                trace + debug + info + warn + error\n\x08",
        default_value_t = 2
    )]
    pub log_level: u8,

    /// Scenario to run.
    #[clap(value_enum, default_value_t = Scenario::All)]
    pub scenario: Scenario,
}

fn matrix_scenario() {
    let mut mat = Mat4::default();
    mat.load_identity();
    mat[0] = 12.0;

    let mut second_mat = Mat4::default();
    second_mat.reset();
    second_mat[0] = 3.0;

    let new_mat = mat + second_mat;
    println!("new_mat:\n{}", new_mat);
    println!("trace: {}", new_mat.trace());
}

fn vector_scenario() {
    let first: Vec3 = vec3(10.0, 0.0, 0.0);
    let second: Vec3 = vec3(92.0, 19.0, 19.0);

    println!("Dot: {}", algebra::dot(&first, &second));
    println!("Cross: {}", algebra::cross(&first, &second));

    let v = vec4::<Fp>(10.0, 20.0, 30.0, 40.0);
    let normalized = v.normalized();
    println!("Normalized: {} (length {})", normalized, normalized.length());
}

fn quaternion_scenario() {
    let axis: Vec3 = vec3(0.0, 0.0, 1.0);
    let quarter_turn = Quat::from_angle_axis(axis, std::f64::consts::FRAC_PI_2 as Fp);
    println!("Quaternion: {}", quarter_turn);
    let x_axis: Vec3 = vec3(1.0, 0.0, 0.0);
    println!("Rotated x: {}", quarter_turn * x_axis);
    println!("Matrix:\n{}", quarter_turn.to_matrix3());

    let half_way = Quat::slerp(&Quat::identity(), &quarter_turn, 0.5);
    let (axis, angle) = half_way.angle_axis();
    println!("Halfway: {} degrees about {}", angle.to_degrees(), axis);
    log::debug!("euler angles of the quarter turn: {}", quarter_turn.euler_angles());
}
