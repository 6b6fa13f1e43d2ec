use argh::FromArgs;
use std::path::{Path, PathBuf};

use pixquant::benchmark::{self, BenchmarkConfig, FileSource, ImageSource};
use pixquant::image::Image;
use pixquant::imgproc::reduce::{ColorReducer, ReduceStrategy};
use pixquant::io::{functional as F, IoError};

#[derive(FromArgs)]
/// Compare the color reduction strategies on an image.
struct Args {
    /// path to an input image
    #[argh(option, short = 'i')]
    image_path: PathBuf,

    /// quantization step, a power of two for the bitwise strategies
    #[argh(option, short = 'd', default = "64")]
    div: u8,

    /// number of times each strategy is run
    #[argh(option, short = 'n', default = "10")]
    iterations: usize,

    /// strategy to run, can be repeated (all of them by default)
    #[argh(option, short = 's')]
    strategy: Vec<ReduceStrategy>,

    /// process the image as a single channel image
    #[argh(switch)]
    gray: bool,

    /// directory where the reduced images are saved
    #[argh(option, short = 'o')]
    output_dir: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let args: Args = argh::from_env();

    let strategies = if args.strategy.is_empty() {
        ReduceStrategy::ALL.to_vec()
    } else {
        args.strategy.clone()
    };

    let config = BenchmarkConfig {
        div: args.div,
        iterations: args.iterations,
        strategies,
    };

    let source = FileSource::new(&args.image_path);
    let output_dir = args.output_dir.as_deref();

    if args.gray {
        run::<1>(&source, &config, output_dir, |path, image| {
            F::write_image_png_mono8(path, image)
        })
    } else {
        run::<3>(&source, &config, output_dir, |path, image| {
            F::write_image_png_rgb8(path, image)
        })
    }
}

fn run<const C: usize>(
    source: &FileSource,
    config: &BenchmarkConfig,
    output_dir: Option<&Path>,
    write: impl Fn(&Path, &Image<u8, C>) -> Result<(), IoError>,
) -> Result<(), Box<dyn std::error::Error>>
where
    FileSource: ImageSource<C>,
{
    // time and process the image once
    let mut image = ImageSource::<C>::load(source)?;
    let reducer = ColorReducer::new(ReduceStrategy::RowIter, config.div)?;
    let duration = benchmark::time_once(&mut image, &reducer)?;
    println!("Duration= {}secs", duration.as_secs_f64());

    // repeat the tests several times
    let report = benchmark::run_benchmark::<C, _>(source, config)?;

    println!();
    println!("-------------------------------------------");
    println!();
    for line in report.lines() {
        println!("{line}");
    }

    if let Some(output_dir) = output_dir {
        std::fs::create_dir_all(output_dir)?;
        for (strategy, image) in report.outputs() {
            let file_path = output_dir.join(format!("{}.png", strategy.name()));
            write(&file_path, image)?;
            log::info!("saved {}", file_path.display());
        }
    }

    Ok(())
}
