use centroid::sample::srs;
use centroid::{Algorithm, ClusterBuilder, Elkan};
use rand::{rngs::StdRng, SeedableRng};
use std::sync::Arc;
use tracing_subscriber::{fmt, EnvFilter};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // RUST_LOG=centroid=debug shows one line per iteration.
    fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    // Two groups that differ in the first coordinate.
    let vectors: Vec<Vec<f64>> = vec![
        vec![1.0, 2.0, 3.0, 4.0],
        vec![1.0, 2.0, 4.0, 5.0],
        vec![1.0, 2.0, 4.0, 5.0],
        vec![1.0, 2.0, 3.0, 4.0],
        vec![1.0, 2.0, 4.0, 5.0],
        vec![1.0, 2.0, 4.0, 5.0],
        vec![10.0, 2.0, 4.0, 5.0],
        vec![10.0, 3.0, 4.0, 5.0],
        vec![10.0, 5.0, 4.0, 5.0],
        vec![10.0, 2.0, 4.0, 5.0],
        vec![10.0, 3.0, 4.0, 5.0],
        vec![10.0, 5.0, 4.0, 5.0],
    ];

    // Elkan with k-means++ seeding, plus the pruning counters.
    let elkan = Elkan::new(&vectors, 2)?
        .with_initializer(Arc::new(centroid::init::KmeansPlusPlus::default().with_seed(7)));
    let (clusters, stats) = elkan.cluster_with_stats()?;
    println!(
        "elkan: iterations={} computed={} skipped={} ({:.0}%)",
        stats.iterations,
        stats.distance_computations,
        stats.distances_skipped,
        stats.skip_fraction * 100.0
    );
    for (i, cluster) in clusters.iter().enumerate() {
        println!("  cluster {i}: centroid={} members={:?}", cluster.centroid(), cluster.members());
    }
    println!("  sse={:.3}", clusters.sse());

    // Same data through the builder, clustering a 50% sample.
    let mut rng = StdRng::seed_from_u64(7);
    let subset = srs(&vectors, 50.0, &mut rng);
    let engine = ClusterBuilder::new(Algorithm::Lloyd, &subset, 2).seed(7).build()?;
    let sampled = engine.cluster()?;
    println!("lloyd on {} sampled vectors:", subset.len());
    for (i, cluster) in sampled.iter().enumerate() {
        println!("  cluster {i}: centroid={}", cluster.centroid());
    }

    Ok(())
}
