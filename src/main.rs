use clap::Parser;
use smart_calc::config::{init_logging, Args, Config};
use smart_calc::{run, Calculator};

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    let mut calculator = Calculator::new(Config::from(&args));
    tracing::info!("session started with scale {}", args.scale);

    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    if let Err(e) = run(stdin.lock(), &mut stdout, &mut calculator) {
        tracing::error!("input failed: {}", e);
        eprintln!("Error, {}", e);
        std::process::exit(1);
    }
    tracing::info!("session ended");
}
