use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use anyhow::Context;
use clap::{Parser, Subcommand};

use baler_codecs::{
    bench, compress, decompress, detect, extension_of, find_smallest_compressor, is_compressed,
    measure, name_of, version_of, MeasureOptions,
};
use baler_core::{Encoding, ENCODINGS};

mod container;

use container::{Header, CONTAINER_VERSION, HEADER_SIZE};

// -- CLI definition --------------------------------------------------------

#[derive(Parser)]
#[command(
    name = "baler",
    about = "Compress, detect, and benchmark buffers across interchangeable codecs",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compress a file into a baler container
    Compress {
        /// Source file
        input: PathBuf,
        /// Destination container file
        output: PathBuf,
        /// Codec: none | brotli | lz4 | gzip | xz, a context alias
        /// (fast, default, extra, ascii), or "auto" to pick per payload
        #[arg(short, long, default_value = "default")]
        codec: String,
    },
    /// Decompress a baler container back to raw bytes
    Decompress {
        /// Source container file
        input: PathBuf,
        /// Destination file
        output: PathBuf,
    },
    /// Guess which codec produced a file
    Detect {
        /// File to sniff
        file: PathBuf,
    },
    /// Benchmark codecs against a file's contents
    Bench {
        /// Sample payload
        file: PathBuf,
        /// Comma-separated candidate list (default: all, cheapest first)
        #[arg(short, long)]
        codecs: Option<String>,
        /// Emit records as JSON
        #[arg(long)]
        json: bool,
    },
}

// -- helpers ---------------------------------------------------------------

fn human_bytes(n: u64) -> String {
    const UNITS: &[&str] = &["B", "KB", "MB", "GB", "TB"];
    let mut v = n as f64;
    let mut unit = 0;
    while v >= 1024.0 && unit < UNITS.len() - 1 {
        v /= 1024.0;
        unit += 1;
    }
    if unit == 0 {
        format!("{} B", n)
    } else {
        format!("{:.2} {}", v, UNITS[unit])
    }
}

// -- subcommand implementations --------------------------------------------

fn run_compress(input: PathBuf, output: PathBuf, codec_arg: &str) -> anyhow::Result<()> {
    let data = fs::read(&input).with_context(|| format!("reading input file {:?}", input))?;

    if is_compressed(&data) {
        log::warn!("input already looks compressed ({})", detect(&data));
    }

    let encoding = if codec_arg.eq_ignore_ascii_case("auto") {
        let choice = find_smallest_compressor(&data, &ENCODINGS);
        eprintln!("  auto-selected {}", name_of(choice));
        choice
    } else {
        codec_arg.parse::<Encoding>()?
    };

    let t0 = Instant::now();
    let packed = compress(encoding, &data)?;
    let elapsed = t0.elapsed();

    let header = Header {
        version: CONTAINER_VERSION,
        codec_id: encoding.id(),
        raw_len: data.len() as u64,
    };
    let mut out = Vec::with_capacity(HEADER_SIZE + packed.len());
    out.extend_from_slice(&header.to_bytes());
    out.extend_from_slice(&packed);
    fs::write(&output, &out).with_context(|| format!("writing output file {:?}", output))?;

    let ratio = 100.0 * (1.0 - packed.len() as f64 / data.len().max(1) as f64);
    eprintln!("  codec       : {}", name_of(encoding));
    eprintln!("  raw size    : {}", human_bytes(data.len() as u64));
    eprintln!("  compressed  : {}", human_bytes(packed.len() as u64));
    eprintln!("  ratio       : {:.2}%", ratio);
    eprintln!("  elapsed     : {:.3}s", elapsed.as_secs_f64());
    Ok(())
}

fn run_decompress(input: PathBuf, output: PathBuf) -> anyhow::Result<()> {
    let file = fs::read(&input).with_context(|| format!("reading input file {:?}", input))?;
    anyhow::ensure!(
        file.len() >= HEADER_SIZE,
        "file too short to be a baler container"
    );
    let header = Header::from_bytes(file[..HEADER_SIZE].try_into()?)?;
    let encoding = Encoding::from_id(header.codec_id)?;

    let t0 = Instant::now();
    let raw = decompress(encoding, &file[HEADER_SIZE..], header.raw_len as usize)?;
    let elapsed = t0.elapsed();

    fs::write(&output, &raw).with_context(|| format!("writing output file {:?}", output))?;

    eprintln!("  codec       : {}", name_of(encoding));
    eprintln!("  raw size    : {}", human_bytes(raw.len() as u64));
    eprintln!("  elapsed     : {:.3}s", elapsed.as_secs_f64());
    Ok(())
}

fn run_detect(file: PathBuf) -> anyhow::Result<()> {
    let data = fs::read(&file).with_context(|| format!("reading file {:?}", file))?;

    // a container file declares its codec; everything else gets sniffed
    if data.len() >= HEADER_SIZE && data.starts_with(container::MAGIC) {
        let header = Header::from_bytes(data[..HEADER_SIZE].try_into()?)?;
        let encoding = Encoding::from_id(header.codec_id)?;
        println!(
            "baler container: codec={} raw size={}",
            name_of(encoding),
            human_bytes(header.raw_len)
        );
        return Ok(());
    }

    match detect(&data) {
        Encoding::None => println!("uncompressed (no codec signature recognized)"),
        encoding => println!(
            "{} (version {}, extension {})",
            name_of(encoding),
            version_of(encoding),
            extension_of(encoding)
        ),
    }
    Ok(())
}

fn run_bench(file: PathBuf, codecs: Option<String>, json: bool) -> anyhow::Result<()> {
    let data = fs::read(&file).with_context(|| format!("reading file {:?}", file))?;

    let candidates: Vec<Encoding> = match codecs {
        Some(list) => list
            .split(',')
            .map(|token| token.trim().parse::<Encoding>())
            .collect::<Result<_, _>>()?,
        None => ENCODINGS.to_vec(),
    };

    let records = measure(&data, &candidates, MeasureOptions::default());

    if json {
        println!("{}", serde_json::to_string_pretty(&records)?);
        return Ok(());
    }

    eprintln!(
        "benchmarking {} candidates against {}...",
        candidates.len(),
        human_bytes(data.len() as u64)
    );
    for record in &records {
        println!("{}", record);
    }
    println!();
    println!("  smallest       : {}", name_of(bench::pick_smallest(&records)));
    println!(
        "  fastest encode : {}",
        name_of(bench::pick_fastest_encode(&records))
    );
    println!(
        "  fastest decode : {}",
        name_of(bench::pick_fastest_decode(&records))
    );
    Ok(())
}

// -- entry point -----------------------------------------------------------

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    match cli.command {
        Commands::Compress {
            input,
            output,
            codec,
        } => run_compress(input, output, &codec),
        Commands::Decompress { input, output } => run_decompress(input, output),
        Commands::Detect { file } => run_detect(file),
        Commands::Bench { file, codecs, json } => run_bench(file, codecs, json),
    }
}
