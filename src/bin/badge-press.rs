//! Badge Press CLI tool
//!
//! Generate attendee badge PDFs and combine existing PDFs.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process;

use badge_press::pdf::{
    combine_directory, count_pages, create_badges, BadgeOptions, DEFAULT_COMBINED_NAME,
};

/// Badge Press - Generate attendee badges and combine PDFs
#[derive(Parser)]
#[command(name = "badge-press")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    # Generate badges from a name list and a logo folder
    badge-press generate names.csv logos/ -o badges.pdf

    # Reproducible logo assignment
    badge-press generate names.csv logos/ -o badges.pdf --seed 42

    # Combine every PDF in the current directory into combined.pdf
    badge-press combine

    # Combine a specific folder into a named file
    badge-press combine ./print-run day-one.pdf")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a badge PDF from an attendee roster and a logo folder
    Generate {
        /// CSV attendee roster (first column = name; header row skipped)
        roster: PathBuf,

        /// Folder of logo files (.png .jpg .jpeg .gif .svg)
        logos: PathBuf,

        /// Output PDF file path
        #[arg(short, long, default_value = "badges.pdf")]
        output: PathBuf,

        /// Seed for reproducible logo assignment
        #[arg(long)]
        seed: Option<u64>,

        /// Open the output file after creation
        #[arg(long)]
        open: bool,
    },

    /// Combine every PDF in a folder into one file, in filename order
    Combine {
        /// Input folder (defaults to the current directory)
        input_folder: Option<PathBuf>,

        /// Output filename, created inside the input folder
        output_filename: Option<String>,
    },

    /// Show the page count of a PDF file
    Info {
        /// PDF file to inspect
        input: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Generate {
            roster,
            logos,
            output,
            seed,
            open,
        } => cmd_generate(roster, logos, output, seed, open),
        Commands::Combine {
            input_folder,
            output_filename,
        } => cmd_combine(input_folder, output_filename),
        Commands::Info { input } => cmd_info(input),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

/// Generate the badge document
fn cmd_generate(
    roster: PathBuf,
    logos: PathBuf,
    output: PathBuf,
    seed: Option<u64>,
    open: bool,
) -> anyhow::Result<()> {
    let options = BadgeOptions {
        roster_path: roster,
        logos_dir: logos,
        output_path: output.clone(),
        seed,
    };

    let count = create_badges(&options)?;
    eprintln!("Generated {} badges: {}", count, output.display());

    if open {
        open_file(&output)?;
    }

    Ok(())
}

/// Combine a folder of PDFs into one document
fn cmd_combine(input_folder: Option<PathBuf>, output_filename: Option<String>) -> anyhow::Result<()> {
    let folder = match input_folder {
        Some(folder) => folder,
        None => std::env::current_dir()?,
    };
    let output_name = output_filename.as_deref().unwrap_or(DEFAULT_COMBINED_NAME);

    let output_path = combine_directory(&folder, output_name)?;
    println!("Combined PDF saved as {}", output_path.display());

    Ok(())
}

/// Show information about a PDF
fn cmd_info(input: PathBuf) -> anyhow::Result<()> {
    let page_count = count_pages(&input)?;
    println!("File: {}", input.display());
    println!("Pages: {}", page_count);
    Ok(())
}

/// Open a file with the system default application
fn open_file(path: &PathBuf) -> anyhow::Result<()> {
    #[cfg(target_os = "macos")]
    {
        std::process::Command::new("open").arg(path).spawn()?;
    }
    #[cfg(target_os = "linux")]
    {
        std::process::Command::new("xdg-open").arg(path).spawn()?;
    }
    #[cfg(target_os = "windows")]
    {
        std::process::Command::new("cmd")
            .args(["/C", "start", "", &path.display().to_string()])
            .spawn()?;
    }
    Ok(())
}
