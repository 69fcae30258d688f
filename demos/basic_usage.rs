// ============================================================================
// Basic Usage Example
// ============================================================================

use decimal_number::prelude::*;
use tracing::{info, Level};

fn main() {
    tracing_subscriber::fmt().with_max_level(Level::DEBUG).init();

    info!("=== Decimal Number Example ===");

    // Construction from every source collapses to canonical values
    let from_float = Decimal::from(11111.11f64);
    let from_text = Decimal::from("11111.11");
    let from_int = Decimal::from(64);
    info!(%from_float, %from_text, %from_int, same = from_float == from_text, "constructed");

    // Arithmetic with mixed operands
    let x = Decimal::from(2.2f32);
    info!(
        sum = %(x + 1),
        difference = %(x - "0.2"),
        product = %(x * 10u64),
        quotient = %format!("{:.6}", Decimal::ONE / 3),
        "arithmetic"
    );

    // Division by zero travels as a value
    let infinite = Decimal::ONE / 0;
    info!(%infinite, finite = infinite.is_finite(), "division by zero");

    // Math library
    let third = Decimal::ONE / 3;
    info!(
        floor = %math::floor(third),
        ceil = %math::ceil(third),
        sqrt = %format!("{:.10}", math::sqrt(from_int)),
        power = %math::power(x, 2),
        negated = %(-from_int),
        "math"
    );

    let (sine, cosine) = math::sin_cos(Decimal::PI / 6);
    info!(sine = %format!("{:.6}", sine), cosine = %format!("{:.6}", cosine), "sin_cos(pi/6)");
    info!(
        unwound = %math::unwind_degrees(Decimal::from(-540)),
        radians = %format!("{:.8}", math::degrees_to_radians(Decimal::from(90))),
        "angles"
    );

    // Text round trip
    match "not_a_number".parse::<Decimal>() {
        Ok(value) => info!(%value, "parsed"),
        Err(err) => info!(%err, "rejected numeral"),
    }

    // Vectors
    let mut v = DecimalVector::ZERO;
    let ok = v.init_from_string("X=1231515615.32131 Y=98486484.8916451 Z=454135451684.46415416");
    info!(ok, vector = %format!("{:.5}", v), compact = %v.to_compact_string(), "vector parsed");

    let direction = v.get_safe_normal(Tolerances::DEFAULT.small_number, DecimalVector::ZERO);
    info!(direction = %format!("{:.8}", direction), size = %direction.size(), "normalized");

    // Custom tolerances
    let coarse = Tolerances::DEFAULT
        .with_small_number(Decimal::from("0.01"))
        .with_kinda_small_number(Decimal::from("0.5"));
    match coarse.validate() {
        Ok(()) => {
            let jitter = DecimalVector::new("0.003", "0.004", "0.2");
            info!(
                default = %jitter.to_compact_string(),
                coarse = %jitter.to_compact_string_with(&coarse),
                "compact forms"
            );
        },
        Err(err) => info!(%err, "rejected tolerances"),
    }

    let a = DecimalVector::new(1, 2, 3);
    let b = DecimalVector::new(4, 5, 6);
    info!(dot = %(a | b), cross = %(a ^ b), "products");

    // Bezier sampling
    let control = [
        DecimalVector::new(0, 0, 0),
        DecimalVector::new(0, 10, 0),
        DecimalVector::new(10, 10, 0),
        DecimalVector::new(10, 0, 0),
    ];
    let mut points = Vec::new();
    match DecimalVector::evaluate_bezier(&control, 5, &mut points) {
        Ok(length) => {
            for (i, point) in points.iter().enumerate() {
                info!(i, point = %point, "bezier sample");
            }
            info!(length = %format!("{:.6}", length), "bezier length");
        },
        Err(err) => info!(%err, "bezier failed"),
    }

    // Clustering
    let samples: Vec<DecimalVector> = ["-0.5", "0", "0.5"]
        .iter()
        .flat_map(|o| [DecimalVector::new(*o, 0, 0), DecimalVector::new(Decimal::from(100) + *o, 0, 0)])
        .collect();
    let mut clusters = vec![DecimalVector::new(1, 0, 0), DecimalVector::new(99, 0, 0), DecimalVector::splat(500)];
    DecimalVector::generate_cluster_centers(&mut clusters, &samples, 10, 1);
    for center in &clusters {
        info!(center = %center, "cluster center");
    }

    info!("=== Example Complete ===");
}
