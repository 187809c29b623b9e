use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use huffpack::{compressed_output_path, huffman_decode, huffman_encode};

#[derive(Parser)]
#[command(name = "huffpack")]
#[command(about = "Huffman coding file compressor", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compress a file; writes the readable code stream to OUTPUT and the
    /// packed bits next to it with a _compressed suffix
    Encode {
        input: PathBuf,
        output: PathBuf,
    },
    /// Decompress a packed file
    Decode {
        input: PathBuf,
        output: PathBuf,
    },
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    let result = match &cli.command {
        Commands::Encode { input, output } => {
            let packed = compressed_output_path(output);
            huffman_encode(input, output, &packed).map(|()| {
                println!(
                    "encoded {} -> {} and {}",
                    input.display(),
                    output.display(),
                    packed.display()
                );
            })
        }
        Commands::Decode { input, output } => huffman_decode(input, output).map(|()| {
            println!("decoded {} -> {}", input.display(), output.display());
        }),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
