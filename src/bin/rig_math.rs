use anyhow::Result;

#[cfg(feature = "cli")]
mod main {
    use super::*;
    use clap::{Parser, Subcommand};
    use rig_math::{Matrix4, Transform, io};
    use std::path::{Path, PathBuf};

    #[derive(Debug, Parser)]
    #[command(about = "Compose, invert, blend and convert SRT transforms", long_about = None)]
    struct Cli {
        /// Write the result to this RON file instead of printing it
        #[arg(short, long, global = true)]
        output: Option<PathBuf>,

        #[command(subcommand)]
        command: Command,
    }

    #[derive(Debug, Subcommand)]
    enum Command {
        /// Combine transforms from left to right, so that each transform is
        /// expressed in the space of the ones before it
        Combine {
            /// RON files each holding one transform
            #[arg(required = true)]
            files: Vec<PathBuf>,

            /// Output the column-major matrix of the result instead
            #[arg(short, long)]
            matrix: bool,
        },
        /// Compute the inverse of a transform
        Invert {
            /// RON file holding the transform
            file: PathBuf,
        },
        /// Blend two transforms, taking the shorter way between rotations
        Mix {
            /// RON file holding the transform at factor 0
            from: PathBuf,

            /// RON file holding the transform at factor 1
            to: PathBuf,

            /// Interpolation factor, normally in [0, 1]
            #[arg(short, long, default_value_t = 0.5)]
            factor: f32,
        },
        /// Decompose a column-major 4x4 matrix into a transform
        Decompose {
            /// RON file holding the 16 matrix elements
            file: PathBuf,
        },
        /// Convert a transform to a column-major 4x4 matrix
        ToMatrix {
            /// RON file holding the transform
            file: PathBuf,
        },
    }

    pub fn main() -> Result<()> {
        env_logger::init();

        let cli = Cli::parse();
        let output = cli.output.as_deref();

        match cli.command {
            Command::Combine { files, matrix } => {
                log::info!("Combining {} transforms", files.len());
                let mut combined = Transform::identity();
                for file in &files {
                    let transform: Transform = io::parse_ron_file(file)?;
                    combined = combined * transform;
                }
                if matrix {
                    emit(&combined.to_matrix(), output)
                } else {
                    emit(&combined, output)
                }
            }
            Command::Invert { file } => {
                let transform: Transform = io::parse_ron_file(&file)?;
                emit(&transform.inverted(), output)
            }
            Command::Mix { from, to, factor } => {
                if !(0.0..=1.0).contains(&factor) {
                    log::warn!("Mixing factor {factor} lies outside [0, 1]; extrapolating");
                }
                let from: Transform = io::parse_ron_file(&from)?;
                let to: Transform = io::parse_ron_file(&to)?;
                emit(&from.mixed(&to, factor), output)
            }
            Command::Decompose { file } => {
                let matrix: Matrix4 = io::parse_ron_file(&file)?;
                let transform = Transform::from_matrix(&matrix);
                if !approx::abs_diff_eq!(transform.to_matrix(), matrix, epsilon = 1e-4) {
                    log::warn!(
                        "Matrix in {} has shear or rotated non-uniform scale, which the \
                         decomposed transform does not reproduce",
                        file.display()
                    );
                }
                emit(&transform, output)
            }
            Command::ToMatrix { file } => {
                let transform: Transform = io::parse_ron_file(&file)?;
                emit(&transform.to_matrix(), output)
            }
        }
    }

    fn emit<T: serde::Serialize>(value: &T, output: Option<&Path>) -> Result<()> {
        match output {
            Some(path) => {
                io::write_ron_file(value, path)?;
                log::info!("Result written to {}", path.display());
            }
            None => println!("{}", io::to_ron_string(value)?),
        }
        Ok(())
    }
}

#[cfg(not(feature = "cli"))]
mod main {
    use super::*;

    pub fn main() -> Result<()> {
        anyhow::bail!("This binary requires the `cli` feature to be enabled.")
    }
}

fn main() -> Result<()> {
    main::main()
}
