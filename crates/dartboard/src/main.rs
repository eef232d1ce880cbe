use clap::Parser;
use dartboard::config::{self, Config};
use dartboard::gui::app::AppModel;
use dartboard::gui::board::BoardModel;
use dartboard::sys::runtime;
use dartcore::{Mode, Session};
use relm4::prelude::*;

#[derive(Parser, Debug)]
#[command(name = "dartboard", version, about = "Practice placing the numbers on a dartboard", long_about = None)]
struct Cli {
    /// Start with ghost hints on empty sectors
    #[arg(short, long)]
    training: bool,

    /// Start in hardcore mode (only official numbers, correct placements lock)
    #[arg(long)]
    hardcore: bool,

    /// How many numbers a hardcore round deals
    #[arg(short, long)]
    drill_size: Option<usize>,

    /// Fixed seed for the hardcore deal
    #[arg(long)]
    seed: Option<u64>,

    /// Write the default config file, print its path and exit
    #[arg(long)]
    init_config: bool,
}

impl Cli {
    fn apply(&self, config: &mut Config) {
        for (enabled, mode) in [(self.training, Mode::Training), (self.hardcore, Mode::Hardcore)] {
            if enabled && !config.start_modes.contains(&mode) {
                config.start_modes.push(mode);
            }
        }
        if let Some(size) = self.drill_size {
            config.drill_size = size;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    if cli.init_config {
        let path = config::write_default_config()?;
        println!("{}", path.display());
        return Ok(());
    }

    let mut config = config::load_or_default();
    cli.apply(&mut config);

    let size = config.board_size_px();
    let session = Session::new(config.session_options());
    let board = BoardModel::new(session, size as f64);

    let (tx, rx) = async_channel::bounded(32);

    // Start Background Services
    runtime::start_background_services(tx);

    // clap owns the command line; keep GTK from parsing it again
    let app = RelmApp::new("org.oche.dartboard").with_args(Vec::new());

    app.run::<AppModel>((board, size, rx));
    Ok(())
}
