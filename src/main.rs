mod cli;
mod logging;
mod runner;
mod structure;
mod walk;

fn main() -> anyhow::Result<()> {
    logging::init();
    let app = cli::parse();
    runner::run(app)
}
