mod command;
mod config;
mod data;
mod logging;
mod pipeline;
mod util;

fn main() -> anyhow::Result<()> {
    command::run()
}
