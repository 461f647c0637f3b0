use std::path::PathBuf;

use anyhow::*;
use structopt::StructOpt;

use simple_image_filter::{io, Convolver, FilterKind};

/// Applies one of the built-in 3x3 convolution filters to an image.
#[derive(StructOpt)]
#[structopt(name = "simple-image-filter")]
struct Opt {
    /// Image to filter
    #[structopt(parse(from_os_str))]
    input: PathBuf,

    /// One of: edge, sharpen, blur, gauss, emboss, identity.
    /// Anything else behaves like identity.
    filter: String,

    /// Where the filtered image is written
    #[structopt(short, long, parse(from_os_str), default_value = "output.png")]
    output: PathBuf,

    /// Worker thread count, defaults to the number of logical CPUs
    #[structopt(short, long)]
    threads: Option<u32>,
}

fn main() -> Result<()> {
    env_logger::init();
    let opt = Opt::from_args();

    println!("Loading '{}'...", opt.input.display());
    let src = io::load_raster(&opt.input)?;
    println!(
        "Loaded a {}x{} image with {} channels. Filtering...",
        src.width(),
        src.height(),
        src.channels()
    );

    let filter = match FilterKind::lookup(&opt.filter) {
        Some(filter) => filter,
        None => {
            log::warn!("unknown filter '{}', using identity", opt.filter);
            FilterKind::Identity
        }
    };

    let workers = opt.threads.unwrap_or_else(|| num_cpus::get() as u32);
    let convolver = Convolver::new(workers);

    let begin_time = std::time::SystemTime::now();
    let dest = convolver.apply(&src, filter.kernel())?;
    let duration = std::time::SystemTime::now().duration_since(begin_time)?;

    io::save_raster(&dest, &opt.output)?;
    println!(
        "Wrote '{}', time used: {:?}",
        opt.output.display(),
        duration
    );
    Ok(())
}
