use std::io;

fn main() -> io::Result<()> {
    // RUST_LOG controls verbosity; warnings cover catalog misconfiguration.
    env_logger::init();
    tideline::run()
}
