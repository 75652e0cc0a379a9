use sprout::{
    cli::{get_log_level_from_verbose, parse_cli, run},
    error::default_error_handler,
};
use std::io::Write;

fn main() {
    let cli = parse_cli();

    env_logger::Builder::new()
        .filter_level(get_log_level_from_verbose(cli.verbose))
        .format(|buf, record| writeln!(buf, "{}", record.args()))
        .init();

    if let Err(err) = run(cli) {
        default_error_handler(err);
    }
}
