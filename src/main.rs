use ascii_grid::ascii::{convert_to_ascii_pixels, CellUnit, ConvertOptions, SizingRequest};
use ascii_grid::cli::{handle_config_action, load_config, write_grid, Args, Command};
use ascii_grid::terminal::TerminalSurface;
use clap::Parser;

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();
}

fn run(args: &Args) -> Result<(), String> {
    let path = args
        .image
        .as_deref()
        .ok_or_else(|| "No image given. Run with --help for usage.".to_string())?;

    // CLI args > config file > built-in defaults
    let cfg = load_config(args.config.as_deref())?;
    let mut resolve = cfg.resolve_options();
    if args.braille {
        resolve.cell_unit = CellUnit::BRAILLE;
    }
    if let Some(filter) = args.filter {
        resolve.filter = filter.into();
    }

    let sizing = SizingRequest::try_from(args.sizing_flags()).map_err(|e| e.to_string())?;
    let options = ConvertOptions {
        sizing,
        resolve,
        mirror_x: args.flip_x || cfg.output.flip_x,
        mirror_y: args.flip_y || cfg.output.flip_y,
    };

    let img = image::open(path)
        .map_err(|e| format!("Failed to open image '{}': {}", path.display(), e))?;
    log::debug!("decoded {} ({}x{})", path.display(), img.width(), img.height());

    let grid = convert_to_ascii_pixels(&img, &TerminalSurface, &options).map_err(|e| e.to_string())?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    write_grid(&grid, args.format, &mut out).map_err(|e| format!("Failed to write output: {}", e))
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    let result = match args.command {
        Some(Command::Config { ref action }) => {
            handle_config_action(action.clone(), args.config.as_deref())
        }
        None => run(&args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
