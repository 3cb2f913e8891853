use std::error::Error;
use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

use argh::FromArgs;
use etc2::{EtcDecoder, Options, Size};
use tracing_subscriber::EnvFilter;

#[derive(FromArgs, Debug)]
/// Decode a raw stream of ETC1/ETC2 RGB blocks into an image
struct Args {
    /// input file with the block data
    #[argh(positional)]
    input: PathBuf,

    /// output file; written as PNG if it ends in `.png`, as raw RGB8 bytes otherwise
    #[argh(positional)]
    output: PathBuf,

    /// image width in pixels [default: inferred]
    #[argh(positional)]
    width: Option<u32>,

    /// image height in pixels [default: inferred]
    #[argh(positional)]
    height: Option<u32>,

    /// reject trailing bytes and partial rows of blocks
    #[argh(switch)]
    strict: bool,

    /// print debug logs
    #[argh(switch, short = 'v')]
    verbose: bool,
}

fn main() -> Result<(), Box<dyn Error>> {
    let args: Args = argh::from_env();

    let default_level = if args.verbose { "debug" } else { "warn" };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .try_init();

    let mut options = Options::default();
    options.strict = args.strict;

    let size = Size::new(args.width.unwrap_or(0), args.height.unwrap_or(0));
    let reader = BufReader::new(File::open(&args.input)?);
    let decoder = EtcDecoder::from_seekable_with_options(reader, size, &options)?;
    let image = decoder.read_image()?;

    let size = image.size();
    let is_png = args
        .output
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("png"));
    if is_png {
        let rgb = image
            .into_rgb_image()
            .map_err(|_| "decoded image does not fit an RGB buffer")?;
        rgb.save_with_format(&args.output, image::ImageFormat::Png)?;
    } else {
        std::fs::write(&args.output, image.data())?;
    }

    eprintln!("{}x{}", size.width, size.height);
    Ok(())
}
