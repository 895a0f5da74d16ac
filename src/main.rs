// algotty: step-through algorithm visualizer for the terminal

use std::io;
use std::time::Duration;

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use ratatui::{backend::CrosstermBackend, Terminal};

use algotty::catalog::Catalog;
use algotty::input::{parse_array, random_array};
use algotty::playback::DEFAULT_INTERVAL;
use algotty::ui::App;

fn usage(program: &str) {
    eprintln!("Usage: {} [options]", program);
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --array <csv>            Start with this array, e.g. --array 5,3,1");
    eprintln!("  --seed <u64>             Seed the random generator for reproducible runs");
    eprintln!("  --interval <ms>          Auto-play interval in milliseconds (default 1000)");
    eprintln!("  --shared-predict-params  Predict reuses the last run's parameters");
    eprintln!("  -h, --help               Show this help");
}

struct Options {
    array: Option<Vec<i64>>,
    seed: Option<u64>,
    interval: Duration,
    shared_predict_params: bool,
}

fn parse_options(args: &[String]) -> Result<Options, String> {
    let mut options = Options {
        array: None,
        seed: None,
        interval: DEFAULT_INTERVAL,
        shared_predict_params: false,
    };

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--array" => {
                i += 1;
                let value = args.get(i).ok_or("--array needs a value")?;
                let array = parse_array(value).map_err(|e| e.to_string())?;
                options.array = Some(array);
            }
            "--seed" => {
                i += 1;
                let value = args.get(i).ok_or("--seed needs a value")?;
                let seed = value
                    .parse::<u64>()
                    .map_err(|_| format!("invalid seed '{}'", value))?;
                options.seed = Some(seed);
            }
            "--interval" => {
                i += 1;
                let value = args.get(i).ok_or("--interval needs a value")?;
                let ms = value
                    .parse::<u64>()
                    .map_err(|_| format!("invalid interval '{}'", value))?;
                if ms == 0 {
                    return Err("interval must be at least 1 ms".to_string());
                }
                options.interval = Duration::from_millis(ms);
            }
            "--shared-predict-params" => {
                options.shared_predict_params = true;
            }
            "-h" | "--help" => {
                return Err(String::new());
            }
            other => {
                return Err(format!("unknown option '{}'", other));
            }
        }
        i += 1;
    }
    Ok(options)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = std::env::args().collect();
    let program = args.first().map(|s| s.as_str()).unwrap_or("algotty");

    let options = match parse_options(&args) {
        Ok(options) => options,
        Err(message) => {
            if !message.is_empty() {
                eprintln!("Error: {}", message);
                eprintln!();
            }
            usage(program);
            std::process::exit(if message.is_empty() { 0 } else { 1 });
        }
    };

    let mut rng = match options.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let array = options
        .array
        .unwrap_or_else(|| random_array(&mut rng));

    let catalog = Catalog::standard();

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create and run app
    let mut app = App::new(
        catalog,
        array,
        rng,
        options.interval,
        options.shared_predict_params,
    );
    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {:?}", err);
    }

    Ok(())
}
