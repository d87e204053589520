// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Meshkernel Contributors

//! Meshkernel CLI

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use indicatif::ProgressBar;
use meshkernel::geometry::{
    begin_area_statistics, is_point_inside, subdivide, AreaStatistics, StatisticsStatus,
};
use meshkernel::io::import_mesh_file;
use meshkernel::Mesh;
use nalgebra::Point3;
use std::time::{Duration, Instant};

#[derive(Parser)]
#[command(name = "meshkernel")]
#[command(about = "Triangle-mesh geometry engine", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Show vertex and triangle counts for a mesh file
    Info {
        /// Input mesh JSON file
        input: String,
    },

    /// Compute triangle area statistics
    Stats {
        /// Input mesh JSON file
        input: String,
    },

    /// Refine a mesh by midpoint subdivision
    Subdivide {
        /// Input mesh JSON file
        input: String,

        /// Number of refinement levels
        #[arg(short, long, default_value_t = 1)]
        levels: u32,
    },

    /// Test whether a point lies inside the mesh surface
    Inside {
        /// Input mesh JSON file
        input: String,

        x: f64,
        y: f64,
        z: f64,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match &cli.command {
        Commands::Info { input } => info_command(input),
        Commands::Stats { input } => stats_command(input),
        Commands::Subdivide { input, levels } => subdivide_command(input, *levels, cli.verbose),
        Commands::Inside { input, x, y, z } => inside_command(input, *x, *y, *z),
    }
}

fn load(input: &str) -> Result<Mesh> {
    import_mesh_file(input).with_context(|| format!("failed to load mesh from {}", input))
}

fn info_command(input: &str) -> Result<()> {
    let mesh = load(input)?;

    println!("{}", input.bold());
    println!("  Vertices:  {}", mesh.vertex_count());
    println!("  Triangles: {}", mesh.triangle_count());
    Ok(())
}

fn stats_command(input: &str) -> Result<()> {
    let mesh = load(input)?;
    let mut handle = begin_area_statistics(&mesh)?;

    let spinner = ProgressBar::new_spinner();
    spinner.set_message("computing triangle statistics");

    let stats = loop {
        match handle.poll() {
            StatisticsStatus::Ready(stats) => break stats,
            StatisticsStatus::Pending => {
                spinner.tick();
                std::thread::sleep(Duration::from_millis(50));
            }
        }
    };
    spinner.finish_and_clear();

    print_statistics(&mesh, &stats);
    Ok(())
}

fn print_statistics(mesh: &Mesh, stats: &AreaStatistics) {
    println!("{}", "Triangle Area Statistics".bold());
    println!("  Triangles: {}", mesh.triangle_count());
    if stats.has_min() {
        println!("  Min: {:.6}", stats.min_area);
    } else {
        println!("  Min: {}", "- (no positive-area triangle)".dimmed());
    }
    println!("  Max: {:.6}", stats.max_area);
    println!("  Avg: {:.6}", stats.avg_area);
}

fn subdivide_command(input: &str, levels: u32, verbose: bool) -> Result<()> {
    let mut mesh = load(input)?;

    println!(
        "Before: {} vertices, {} triangles",
        mesh.vertex_count(),
        mesh.triangle_count()
    );

    let start = Instant::now();
    for level in 1..=levels {
        subdivide(&mut mesh);
        if verbose {
            println!(
                "  level {}: {} vertices, {} triangles",
                level,
                mesh.vertex_count(),
                mesh.triangle_count()
            );
        }
    }

    println!(
        "After:  {} vertices, {} triangles ({})",
        mesh.vertex_count(),
        mesh.triangle_count(),
        format!("{:.2?}", start.elapsed()).dimmed()
    );
    Ok(())
}

fn inside_command(input: &str, x: f64, y: f64, z: f64) -> Result<()> {
    let mesh = load(input)?;
    let point = Point3::new(x, y, z);

    if is_point_inside(&mesh, &point) {
        println!("({}, {}, {}) is {}", x, y, z, "inside".green().bold());
    } else {
        println!("({}, {}, {}) is {}", x, y, z, "outside".red().bold());
    }
    Ok(())
}
