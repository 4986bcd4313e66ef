use std::io::{self, BufWriter, Write};
use std::process::ExitCode;

use clap::Parser;

use bldiff::cli::Cli;
use bldiff::config::Config;
use bldiff::{CompareOptions, Palette, compare, renderer, source, terminal};

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::new().filter_or("BLDIFF_LOG", "warn"))
        .format_timestamp(None)
        .init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::debug!("{err:?}");
            eprintln!("bldiff: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> bldiff::Result<()> {
    let Some((path1, path2)) = cli.files() else {
        println!("{}", Cli::usage());
        return Ok(());
    };

    let mut config = Config::load(cli.config.as_deref())?;
    cli.apply(&mut config);

    let left = source::read_text(path1)?;
    let right = source::read_text(path2)?;

    let terminal_width = match cli.width {
        Some(width) => width,
        None => terminal::terminal_width()?,
    };
    let width = terminal::pane_width(terminal_width, config.width_ratio)?;
    log::debug!("column width {width} of {terminal_width}");

    let palette = Palette::from_names(&config.colors, terminal::color_enabled(config.color));
    let options = CompareOptions {
        column_width: width,
        tab_width: config.tab_width,
        marker: palette.marker(),
    };
    let comparison = compare(&left, &right, &options);

    let mut out = BufWriter::new(io::stdout().lock());
    renderer::render(&mut out, &comparison, &palette)?;
    if config.summary {
        renderer::render_summary(&mut out, &comparison.counts(), &palette)?;
    }
    out.flush()?;
    Ok(())
}
